use infmix_core::{estimate, Brief, CandidateProfile, EnrichedCandidate, SelectionResult};

use crate::generator::TextGenerator;
use crate::prompt::{rationale_prompt, tidy_rationale};

/// Deterministic rationale used whenever generation fails.
#[must_use]
pub fn fallback_rationale(profile: &CandidateProfile) -> String {
    format!(
        "{} brings {} followers on {} with a {:.1}% engagement rate, \
         a solid fit for this campaign's audience.",
        profile.display_name(),
        profile.follower_count,
        profile.platform,
        profile.effective_engagement_rate()
    )
}

/// Attach projections and a rationale to every pick, in selection order.
///
/// Candidates are processed one at a time. A failed or empty generation
/// falls back to [`fallback_rationale`] and the run continues.
/// An empty selection makes no generator calls.
pub async fn enrich<G>(
    selection: &SelectionResult,
    brief: &Brief,
    generator: &G,
) -> Vec<EnrichedCandidate>
where
    G: TextGenerator + ?Sized,
{
    let mut enriched = Vec::with_capacity(selection.len());
    let mut fallbacks = 0usize;

    for pick in &selection.picks {
        let estimates = estimate(&pick.profile);
        let prompt = rationale_prompt(pick, &estimates, brief);

        let rationale = match generator.generate(&prompt).await {
            Ok(text) => tidy_rationale(&text),
            Err(e) => {
                tracing::warn!(
                    candidate = %pick.profile.id,
                    error = %e,
                    "rationale generation failed, using template"
                );
                None
            }
        };
        let rationale = rationale.unwrap_or_else(|| {
            fallbacks += 1;
            fallback_rationale(&pick.profile)
        });

        enriched.push(EnrichedCandidate {
            candidate: pick.clone(),
            tier: pick.tier(),
            estimates,
            rationale,
        });
    }

    tracing::debug!(
        enriched = enriched.len(),
        fallbacks,
        "selection enriched"
    );
    enriched
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use infmix_core::{Demographics, RateCard, ScoreBreakdown, ScoredCandidate, Tier};
    use rust_decimal::Decimal;

    use super::*;
    use crate::error::GenerationError;
    use crate::generator::DisabledGenerator;

    /// Replays canned responses in order and counts calls.
    struct ScriptedGenerator {
        replies: Vec<Result<&'static str, ()>>,
        calls: AtomicUsize,
    }

    impl ScriptedGenerator {
        fn new(replies: Vec<Result<&'static str, ()>>) -> Self {
            Self {
                replies,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            let i = self.calls.fetch_add(1, Ordering::SeqCst);
            match self.replies.get(i) {
                Some(Ok(text)) => Ok((*text).to_string()),
                _ => Err(GenerationError::Malformed("scripted failure".to_string())),
            }
        }
    }

    fn brief() -> Brief {
        Brief {
            budget: Decimal::from(75_000),
            platforms: vec!["Instagram".to_string()],
            locations: vec![],
            content_themes: vec!["Music".to_string()],
            demographics: Demographics::default(),
            brand_name: None,
            goals: vec![],
        }
    }

    fn pick(id: &str, followers: u64, post: i64) -> ScoredCandidate {
        ScoredCandidate {
            profile: CandidateProfile {
                id: id.to_string(),
                name: format!("Creator {id}"),
                handle: None,
                platform: "Instagram".to_string(),
                follower_count: followers,
                engagement_rate: 5.0,
                content_categories: vec!["Music".to_string()],
                locations: vec![],
                rate_card: RateCard {
                    post: Decimal::from(post),
                    story: Decimal::from(50),
                    reel: Decimal::from(400),
                    video: Decimal::from(1_000),
                },
            },
            score: 70,
            breakdown: ScoreBreakdown::default(),
        }
    }

    fn selection() -> SelectionResult {
        SelectionResult {
            picks: vec![pick("mid", 120_000, 3_000), pick("micro", 20_000, 500)],
            committed: Decimal::from(10_500),
        }
    }

    #[tokio::test]
    async fn keeps_selection_order_and_computes_estimates() {
        let generator =
            ScriptedGenerator::new(vec![Ok("Strong music audience."), Ok("Loyal fans.")]);
        let out = enrich(&selection(), &brief(), &generator).await;

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].candidate.profile.id, "mid");
        assert_eq!(out[1].candidate.profile.id, "micro");
        assert_eq!(out[0].tier, Tier::Mid);
        assert_eq!(out[0].estimates.estimated_reach, 42_000);
        assert_eq!(out[0].estimates.estimated_engagement, 2_100);
        assert_eq!(
            out[0].estimates.cost_estimate,
            Decimal::from(2 * 3_000 + 400 + 3 * 50)
        );
        assert_eq!(out[0].rationale, "Strong music audience.");
        assert_eq!(out[1].rationale, "Loyal fans.");
    }

    #[tokio::test]
    async fn one_failure_degrades_only_that_candidate() {
        let generator = ScriptedGenerator::new(vec![Err(()), Ok("Loyal fans.")]);
        let out = enrich(&selection(), &brief(), &generator).await;

        assert_eq!(out[0].rationale, fallback_rationale(&out[0].candidate.profile));
        assert_eq!(out[1].rationale, "Loyal fans.");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn blank_generation_uses_template() {
        let generator = ScriptedGenerator::new(vec![Ok("   "), Ok("\"\"")]);
        let out = enrich(&selection(), &brief(), &generator).await;
        for e in &out {
            assert_eq!(e.rationale, fallback_rationale(&e.candidate.profile));
        }
    }

    #[tokio::test]
    async fn always_failing_generator_yields_deterministic_templates() {
        let first = enrich(&selection(), &brief(), &DisabledGenerator).await;
        let second = enrich(&selection(), &brief(), &DisabledGenerator).await;

        assert_eq!(first.len(), 2);
        for e in &first {
            assert!(!e.rationale.is_empty());
        }
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn empty_selection_makes_no_calls() {
        let generator = ScriptedGenerator::new(vec![]);
        let out = enrich(&SelectionResult::default(), &brief(), &generator).await;
        assert!(out.is_empty());
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn fallback_mentions_name_followers_and_rate() {
        let p = pick("x", 20_000, 1).profile;
        assert_eq!(
            fallback_rationale(&p),
            "Creator x brings 20000 followers on Instagram with a 5.0% engagement rate, \
             a solid fit for this campaign's audience."
        );
    }
}
