//! Coarse eligibility filters applied after every store query.

use infmix_core::overlap::{any_overlap, same_name};
use infmix_core::{selection_cost, Brief, CandidateProfile, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Filters derived from a brief. An empty list imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFilters {
    pub platforms: Vec<String>,
    pub locations: Vec<String>,
    pub content_categories: Vec<String>,
    /// Ceiling for a three-post package (`post x 3`).
    pub max_budget_per_candidate: Option<Money>,
}

impl CandidateFilters {
    /// Filters for a brief: its platforms, locations and themes, with the
    /// whole campaign budget as the per-candidate ceiling.
    #[must_use]
    pub fn from_brief(brief: &Brief) -> Self {
        Self {
            platforms: brief.platforms.clone(),
            locations: brief.locations.clone(),
            content_categories: brief.content_themes.clone(),
            max_budget_per_candidate: Some(brief.budget),
        }
    }

    /// `true` if `candidate` passes every filter.
    ///
    /// Candidates with a zero post rate are never admitted: a missing rate
    /// means unknown pricing, not a free creator.
    #[must_use]
    pub fn admits(&self, candidate: &CandidateProfile) -> bool {
        self.platform_ok(candidate)
            && self.location_ok(candidate)
            && self.category_ok(candidate)
            && self.budget_ok(candidate)
    }

    fn platform_ok(&self, candidate: &CandidateProfile) -> bool {
        self.platforms.is_empty()
            || self
                .platforms
                .iter()
                .any(|p| same_name(p, &candidate.platform))
    }

    fn location_ok(&self, candidate: &CandidateProfile) -> bool {
        self.locations.is_empty() || any_overlap(&candidate.locations, &self.locations)
    }

    fn category_ok(&self, candidate: &CandidateProfile) -> bool {
        self.content_categories.is_empty()
            || any_overlap(&candidate.content_categories, &self.content_categories)
    }

    fn budget_ok(&self, candidate: &CandidateProfile) -> bool {
        if candidate.rate_card.post <= Decimal::ZERO {
            return false;
        }
        self.max_budget_per_candidate
            .is_none_or(|max| selection_cost(candidate) <= max)
    }
}
