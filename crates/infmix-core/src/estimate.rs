//! Reach, engagement and cost projections.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CandidateProfile, EnrichedCandidate, Estimates, Money};

/// Share of followers expected to see a post, in percent.
pub const REACH_PERCENT: u64 = 35;

/// Package priced by [`estimate`]: two posts, one reel, three stories.
pub const COST_POSTS: u32 = 2;
pub const COST_REELS: u32 = 1;
pub const COST_STORIES: u32 = 3;

/// Project reach, engagement and package cost for one profile.
///
/// - `estimated_reach = floor(followers x 0.35)`
/// - `estimated_engagement = floor(reach x engagement_rate / 100)`
/// - `cost_estimate = 2 x post + 1 x reel + 3 x story`
#[must_use]
pub fn estimate(profile: &CandidateProfile) -> Estimates {
    let estimated_reach = profile.follower_count / 100 * REACH_PERCENT
        + profile.follower_count % 100 * REACH_PERCENT / 100;

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let estimated_engagement =
        (estimated_reach as f64 * profile.effective_engagement_rate() / 100.0).floor() as u64;

    let card = &profile.rate_card;
    let cost_estimate = card.post * Decimal::from(COST_POSTS)
        + card.reel * Decimal::from(COST_REELS)
        + card.story * Decimal::from(COST_STORIES);

    Estimates {
        estimated_reach,
        estimated_engagement,
        cost_estimate,
    }
}

/// Post-hoc budget check over an enriched mix.
///
/// The selector only enforces the budget per admission step, so a mix can
/// legitimately cost more than the brief allows. Callers surface
/// `over_budget` as a warning rather than a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub budget: Money,
    pub total_cost_estimate: Money,
    pub total_estimated_reach: u64,
    pub over_budget: bool,
}

#[must_use]
pub fn budget_summary(enriched: &[EnrichedCandidate], budget: Money) -> BudgetSummary {
    let total_cost_estimate: Money = enriched.iter().map(|e| e.estimates.cost_estimate).sum();
    let total_estimated_reach = enriched
        .iter()
        .map(|e| e.estimates.estimated_reach)
        .fold(0u64, u64::saturating_add);
    BudgetSummary {
        budget,
        total_cost_estimate,
        total_estimated_reach,
        over_budget: total_cost_estimate > budget,
    }
}
