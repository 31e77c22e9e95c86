//! Multi-factor brief-to-candidate scoring.
//!
//! Five independently capped components add up to at most 100:
//!
//! | Component | Max | Rule |
//! |-----------|-----|------|
//! | content   | 30  | 10 per overlapping category, floor 5 when none overlap |
//! | engagement| 25  | linear in engagement rate, saturating at 10% |
//! | audience  | 20  | step function on follower count |
//! | location  | 15  | 15 on any overlap, else 5 |
//! | platform  | 10  | 10 if the platform is requested, else 0 |

use crate::overlap::{any_overlap, count_overlapping, same_name};
use crate::types::{Brief, CandidateProfile, ScoreBreakdown, ScoredCandidate};

pub const CONTENT_MAX: f64 = 30.0;
pub const CONTENT_PER_MATCH: f64 = 10.0;
pub const CONTENT_FLOOR: f64 = 5.0;

pub const ENGAGEMENT_MAX: f64 = 25.0;
/// Engagement rate (percent) at which the engagement component saturates.
pub const ENGAGEMENT_SATURATION_RATE: f64 = 10.0;

/// `(minimum followers, points)`, checked top-down.
pub const AUDIENCE_STEPS: &[(u64, f64)] = &[
    (1_000_000, 20.0),
    (500_000, 18.0),
    (100_000, 16.0),
    (50_000, 14.0),
    (10_000, 10.0),
];
pub const AUDIENCE_FLOOR: f64 = 5.0;

pub const LOCATION_MATCH: f64 = 15.0;
pub const LOCATION_FLOOR: f64 = 5.0;

pub const PLATFORM_MATCH: f64 = 10.0;
pub const PLATFORM_MISS: f64 = 0.0;

fn content_component(brief: &Brief, candidate: &CandidateProfile) -> f64 {
    let matches = count_overlapping(&candidate.content_categories, &brief.content_themes);
    if matches == 0 {
        return CONTENT_FLOOR;
    }
    #[allow(clippy::cast_precision_loss)]
    let raw = CONTENT_PER_MATCH * matches as f64;
    raw.min(CONTENT_MAX)
}

fn engagement_component(candidate: &CandidateProfile) -> f64 {
    let rate = candidate.effective_engagement_rate();
    (rate * ENGAGEMENT_MAX / ENGAGEMENT_SATURATION_RATE).min(ENGAGEMENT_MAX)
}

fn audience_component(candidate: &CandidateProfile) -> f64 {
    AUDIENCE_STEPS
        .iter()
        .find(|&&(min, _)| candidate.follower_count >= min)
        .map_or(AUDIENCE_FLOOR, |&(_, points)| points)
}

fn location_component(brief: &Brief, candidate: &CandidateProfile) -> f64 {
    if any_overlap(&candidate.locations, &brief.locations) {
        LOCATION_MATCH
    } else {
        LOCATION_FLOOR
    }
}

fn platform_component(brief: &Brief, candidate: &CandidateProfile) -> f64 {
    if brief
        .platforms
        .iter()
        .any(|p| same_name(p, &candidate.platform))
    {
        PLATFORM_MATCH
    } else {
        PLATFORM_MISS
    }
}

/// Score one candidate against a brief.
///
/// Pure and total: any brief and profile produce a score in `[0, 100]`. With
/// the floors above the effective minimum is 15.
#[must_use]
pub fn score(brief: &Brief, candidate: &CandidateProfile) -> ScoredCandidate {
    let breakdown = ScoreBreakdown {
        content: content_component(brief, candidate),
        engagement: engagement_component(candidate),
        audience: audience_component(candidate),
        location: location_component(brief, candidate),
        platform: platform_component(brief, candidate),
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = breakdown.total().round().clamp(0.0, 100.0) as u8;

    ScoredCandidate {
        profile: candidate.clone(),
        score: total,
        breakdown,
    }
}

/// Score every candidate and sort by score, highest first.
///
/// The sort is stable: candidates with equal scores keep their input order.
#[must_use]
pub fn rank(brief: &Brief, candidates: &[CandidateProfile]) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates.iter().map(|c| score(brief, c)).collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

#[cfg(test)]
#[path = "scorer_test.rs"]
mod tests;
