//! Rationale prompt construction and response tidying.

use std::fmt::Write as _;

use infmix_core::{Brief, Estimates, ScoredCandidate};

/// Longest rationale kept from a generator response, in characters.
pub const MAX_RATIONALE_CHARS: usize = 600;

fn join_or(items: &[String], fallback: &str) -> String {
    let kept: Vec<&str> = items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if kept.is_empty() {
        fallback.to_string()
    } else {
        kept.join(", ")
    }
}

/// Build the prompt asking for a short justification of one pick.
#[must_use]
pub fn rationale_prompt(candidate: &ScoredCandidate, estimates: &Estimates, brief: &Brief) -> String {
    let profile = &candidate.profile;
    let mut prompt = String::from(
        "You are a marketing strategist. In one or two sentences (at most 60 words), \
         explain why this creator is a good fit for the campaign below. \
         Answer in plain text without lists, headings or quotation marks.\n\nCampaign:\n",
    );

    if let Some(brand) = brief.brand_name.as_deref().filter(|b| !b.trim().is_empty()) {
        let _ = writeln!(prompt, "- Brand: {}", brand.trim());
    }
    let _ = writeln!(prompt, "- Goals: {}", join_or(&brief.goals, "not specified"));
    let _ = writeln!(
        prompt,
        "- Content themes: {}",
        join_or(&brief.content_themes, "any")
    );
    let _ = writeln!(prompt, "- Platforms: {}", join_or(&brief.platforms, "any"));
    let _ = writeln!(prompt, "- Locations: {}", join_or(&brief.locations, "any"));

    let demo = &brief.demographics;
    let mut audience = Vec::new();
    if let Some(range) = demo.age_range {
        audience.push(format!("ages {}-{}", range.min, range.max));
    }
    if let Some(skew) = demo.gender_skew.as_deref().filter(|s| !s.trim().is_empty()) {
        audience.push(format!("{} skew", skew.trim()));
    }
    if !demo.interests.is_empty() {
        audience.push(format!("interested in {}", join_or(&demo.interests, "")));
    }
    if !audience.is_empty() {
        let _ = writeln!(prompt, "- Target audience: {}", audience.join("; "));
    }
    let _ = writeln!(prompt, "- Total budget: {}", brief.budget);

    prompt.push_str("\nCreator:\n");
    let _ = writeln!(prompt, "- Name: {}", profile.display_name());
    let _ = writeln!(
        prompt,
        "- Platform: {} ({} tier)",
        profile.platform,
        profile.tier()
    );
    let _ = writeln!(prompt, "- Followers: {}", profile.follower_count);
    let _ = writeln!(
        prompt,
        "- Engagement rate: {:.1}%",
        profile.effective_engagement_rate()
    );
    let _ = writeln!(
        prompt,
        "- Content: {}",
        join_or(&profile.content_categories, "unspecified")
    );
    let _ = writeln!(
        prompt,
        "- Based in: {}",
        join_or(&profile.locations, "unspecified")
    );
    let _ = writeln!(prompt, "- Match score: {}/100", candidate.score);
    let _ = writeln!(
        prompt,
        "- Estimated reach {}, estimated engagements {}, package cost {}",
        estimates.estimated_reach, estimates.estimated_engagement, estimates.cost_estimate
    );

    prompt
}

/// Strip matched pairs of wrapping quotes, outermost first.
fn unquote(mut text: &str) -> &str {
    loop {
        let mut chars = text.chars();
        let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
            return text;
        };
        let paired = matches!(
            (first, last),
            ('"', '"') | ('\'', '\'') | ('“', '”') | ('‘', '’')
        );
        if !paired {
            return text;
        }
        text = chars.as_str().trim();
    }
}

/// Normalize generated text: trim, drop wrapping quotes, collapse whitespace
/// and cap the length. Returns `None` when nothing usable is left.
#[must_use]
pub fn tidy_rationale(raw: &str) -> Option<String> {
    let trimmed = unquote(raw.trim());
    let collapsed = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return None;
    }
    if collapsed.chars().count() <= MAX_RATIONALE_CHARS {
        return Some(collapsed);
    }
    let mut capped: String = collapsed.chars().take(MAX_RATIONALE_CHARS - 1).collect();
    capped.push('…');
    Some(capped)
}
