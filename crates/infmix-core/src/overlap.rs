//! Permissive free-text token matching.
//!
//! Location and category strings are free text ("Spain" vs "España, Madrid",
//! "music" vs "Music & Dance"), so two tokens match when either one contains
//! the other after trimming and lower-casing. Empty tokens never match.

fn normalize(token: &str) -> Option<String> {
    let t = token.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_lowercase())
    }
}

/// `true` if `a` contains `b` or `b` contains `a`, case-insensitively.
#[must_use]
pub fn tokens_overlap(a: &str, b: &str) -> bool {
    match (normalize(a), normalize(b)) {
        (Some(a), Some(b)) => a.contains(&b) || b.contains(&a),
        _ => false,
    }
}

/// `true` if `token` overlaps any entry of `wanted`.
#[must_use]
pub fn overlaps_any<S: AsRef<str>>(token: &str, wanted: &[S]) -> bool {
    wanted.iter().any(|w| tokens_overlap(token, w.as_ref()))
}

/// `true` if any entry of `have` overlaps any entry of `wanted`.
#[must_use]
pub fn any_overlap<S: AsRef<str>, T: AsRef<str>>(have: &[S], wanted: &[T]) -> bool {
    have.iter().any(|h| overlaps_any(h.as_ref(), wanted))
}

/// Number of entries in `have` that overlap at least one entry of `wanted`.
#[must_use]
pub fn count_overlapping<S: AsRef<str>, T: AsRef<str>>(have: &[S], wanted: &[T]) -> usize {
    have.iter()
        .filter(|h| overlaps_any(h.as_ref(), wanted))
        .count()
}

/// Case-insensitive equality after trimming. Empty names never match.
#[must_use]
pub fn same_name(a: &str, b: &str) -> bool {
    match (normalize(a), normalize(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_matches_in_either_direction() {
        assert!(tokens_overlap("Spain", "spain, madrid"));
        assert!(tokens_overlap("España, Madrid", "madrid"));
        assert!(!tokens_overlap("France", "Spain"));
    }

    #[test]
    fn matching_ignores_case_and_padding() {
        assert!(tokens_overlap("  MUSIC ", "music"));
        assert!(tokens_overlap("ESPAÑA", "españa"));
    }

    #[test]
    fn empty_tokens_never_match() {
        assert!(!tokens_overlap("", "music"));
        assert!(!tokens_overlap("music", "   "));
        assert!(!overlaps_any("music", &[""]));
    }

    #[test]
    fn count_overlapping_counts_candidate_side() {
        let have = ["Music", "Dance", "Cooking"];
        let wanted = ["music & dance"];
        assert_eq!(count_overlapping(&have, &wanted), 2);
    }

    #[test]
    fn empty_wanted_list_never_overlaps() {
        let wanted: [&str; 0] = [];
        assert!(!any_overlap(&["Music"], &wanted));
    }

    #[test]
    fn same_name_is_case_insensitive() {
        assert!(same_name("Instagram", " instagram "));
        assert!(!same_name("Instagram", "TikTok"));
        assert!(!same_name("", ""));
    }
}
