//! Greedy tiered mix selection under a budget envelope.
//!
//! The selector walks each tier bucket once, top-down, admitting candidates
//! whose selection cost fits the remaining budget. It never backtracks, so
//! the result is not an optimal allocation. Output depends only on the
//! ranking and the budget.

use rust_decimal::Decimal;

use crate::tier::Tier;
use crate::types::{CandidateProfile, Money, ScoredCandidate, SelectionResult};

/// At most this many macro creators in a mix.
pub const MAX_MACRO: usize = 1;
/// At most this many mid-tier creators in a mix.
pub const MAX_MID: usize = 3;
/// Mid-tier admission stops once the mix reaches this size.
pub const MID_PHASE_TOTAL_CAP: usize = 6;
/// Hard cap on the mix size.
pub const MAX_TOTAL: usize = 8;
/// Posts in the package used as the per-candidate selection cost.
pub const PACKAGE_POSTS: u32 = 3;
/// Largest share of the budget a single macro creator may take (0.5).
pub const MACRO_BUDGET_SHARE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Cost used for admission decisions: the post rate times [`PACKAGE_POSTS`].
#[must_use]
pub fn selection_cost(profile: &CandidateProfile) -> Money {
    profile.rate_card.post * Decimal::from(PACKAGE_POSTS)
}

/// Pick a tiered mix from candidates already sorted by score, highest first.
///
/// 1. Partition into macro, mid and micro buckets, keeping ranked order.
/// 2. Admit the top macro only if its cost is at most half the budget.
/// 3. Admit mid-tier candidates that fit the remaining budget until three are
///    in or the mix holds six.
/// 4. Admit micro candidates that fit the remaining budget until the mix
///    holds eight.
///
/// A candidate that does not fit is skipped and the walk continues. An empty
/// input yields an empty result.
#[must_use]
pub fn select_mix(ranked: &[ScoredCandidate], budget: Money) -> SelectionResult {
    let mut macros = Vec::new();
    let mut mids = Vec::new();
    let mut micros = Vec::new();
    for candidate in ranked {
        match candidate.tier() {
            Tier::Macro => macros.push(candidate),
            Tier::Mid => mids.push(candidate),
            Tier::Micro => micros.push(candidate),
        }
    }

    let mut picks: Vec<ScoredCandidate> = Vec::with_capacity(MAX_TOTAL);
    let mut remaining = budget;

    // Only the best-ranked macro is considered.
    if let Some(top) = macros.into_iter().next() {
        let cost = selection_cost(&top.profile);
        if cost <= budget * MACRO_BUDGET_SHARE {
            remaining -= cost;
            picks.push(top.clone());
        }
    }

    let mut mid_count = 0;
    for candidate in mids {
        if mid_count >= MAX_MID || picks.len() >= MID_PHASE_TOTAL_CAP || remaining < Decimal::ZERO
        {
            break;
        }
        let cost = selection_cost(&candidate.profile);
        if cost > remaining {
            continue;
        }
        remaining -= cost;
        picks.push(candidate.clone());
        mid_count += 1;
    }

    for candidate in micros {
        if picks.len() >= MAX_TOTAL || remaining < Decimal::ZERO {
            break;
        }
        let cost = selection_cost(&candidate.profile);
        if cost > remaining {
            continue;
        }
        remaining -= cost;
        picks.push(candidate.clone());
    }

    picks.truncate(MAX_TOTAL);

    SelectionResult {
        picks,
        committed: budget - remaining,
    }
}

#[cfg(test)]
#[path = "mix_test.rs"]
mod tests;
