use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::tier::Tier;

/// Currency amount. All budgets, rates and costs use exact decimal arithmetic.
pub type Money = Decimal;

/// Campaign parameters produced by brief intake. Read-only for a matching run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brief {
    pub budget: Money,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub content_themes: Vec<String>,
    #[serde(default)]
    pub demographics: Demographics,
    /// Brand the campaign is for. Prompt context only.
    #[serde(default)]
    pub brand_name: Option<String>,
    /// Free-text campaign goals. Prompt context only.
    #[serde(default)]
    pub goals: Vec<String>,
}

impl Brief {
    /// Check the invariants brief intake is expected to guarantee.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidBrief`] if the budget is not positive or
    /// no platform is requested.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.budget <= Decimal::ZERO {
            return Err(CoreError::InvalidBrief(format!(
                "budget must be positive, got {}",
                self.budget
            )));
        }
        if self.platforms.iter().all(|p| p.trim().is_empty()) {
            return Err(CoreError::InvalidBrief(
                "at least one platform is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    #[serde(default)]
    pub age_range: Option<AgeRange>,
    #[serde(default)]
    pub gender_skew: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

/// Published prices of one creator. A missing entry reads as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    #[serde(default)]
    pub post: Money,
    #[serde(default)]
    pub story: Money,
    #[serde(default)]
    pub reel: Money,
    #[serde(default)]
    pub video: Money,
}

/// One creator as stored in the candidate store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub handle: Option<String>,
    pub platform: String,
    #[serde(default)]
    pub follower_count: u64,
    /// Percentage in `[0, 100]`.
    #[serde(default)]
    pub engagement_rate: f64,
    #[serde(default)]
    pub content_categories: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub rate_card: RateCard,
}

impl CandidateProfile {
    #[must_use]
    pub fn tier(&self) -> Tier {
        Tier::of(self.follower_count)
    }

    /// Name used in generated text, falling back to the handle and then the id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if !self.name.trim().is_empty() {
            return self.name.trim();
        }
        match self.handle.as_deref() {
            Some(h) if !h.trim().is_empty() => h.trim(),
            _ => &self.id,
        }
    }

    /// Engagement rate clamped to `[0, 100]`; non-finite values count as zero.
    #[must_use]
    pub fn effective_engagement_rate(&self) -> f64 {
        if self.engagement_rate.is_finite() {
            self.engagement_rate.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }
}

/// The five weighted components behind a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub content: f64,
    pub engagement: f64,
    pub audience: f64,
    pub location: f64,
    pub platform: f64,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.content + self.engagement + self.audience + self.location + self.platform
    }
}

/// A candidate with its score for one brief. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub profile: CandidateProfile,
    /// Integer score in `[0, 100]`.
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}

impl ScoredCandidate {
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.profile.tier()
    }
}

/// Ordered mix chosen by [`crate::select_mix`].
///
/// Holds at most one macro, three mid-tier and eight candidates in total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResult {
    pub picks: Vec<ScoredCandidate>,
    /// Sum of the selection costs (`post x 3`) of every pick.
    pub committed: Money,
}

impl SelectionResult {
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    #[must_use]
    pub fn count_tier(&self, tier: Tier) -> usize {
        self.picks.iter().filter(|c| c.tier() == tier).count()
    }
}

/// Reach, engagement and cost projections derived from raw profile stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimates {
    pub estimated_reach: u64,
    pub estimated_engagement: u64,
    pub cost_estimate: Money,
}

/// Terminal output of a matching run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCandidate {
    #[serde(flatten)]
    pub candidate: ScoredCandidate,
    pub tier: Tier,
    #[serde(flatten)]
    pub estimates: Estimates,
    pub rationale: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief_json(budget: &str, platforms: &str) -> Brief {
        serde_json::from_str(&format!(
            r#"{{"budget": {budget}, "platforms": {platforms}, "contentThemes": ["Music"]}}"#
        ))
        .expect("brief should parse")
    }

    #[test]
    fn brief_parses_camel_case_with_defaults() {
        let brief = brief_json("75000", r#"["Instagram"]"#);
        assert_eq!(brief.budget, Decimal::from(75_000));
        assert_eq!(brief.content_themes, ["Music"]);
        assert!(brief.locations.is_empty());
        assert!(brief.demographics.interests.is_empty());
        assert!(brief.goals.is_empty());
    }

    #[test]
    fn brief_budget_accepts_decimal_strings() {
        let brief = brief_json(r#""1250.50""#, r#"["TikTok"]"#);
        assert_eq!(brief.budget, Decimal::new(125_050, 2));
    }

    #[test]
    fn validate_rejects_non_positive_budget() {
        let brief = brief_json("0", r#"["Instagram"]"#);
        assert!(matches!(brief.validate(), Err(CoreError::InvalidBrief(_))));
    }

    #[test]
    fn validate_rejects_missing_platforms() {
        let brief = brief_json("100", r#"["  "]"#);
        assert!(matches!(brief.validate(), Err(CoreError::InvalidBrief(_))));
        let brief = brief_json("100", "[]");
        assert!(brief.validate().is_err());
    }

    #[test]
    fn validate_accepts_well_formed_brief() {
        assert!(brief_json("100", r#"["Instagram"]"#).validate().is_ok());
    }

    #[test]
    fn profile_missing_rates_read_as_zero() {
        let profile: CandidateProfile = serde_json::from_str(
            r#"{"id": "c1", "platform": "Instagram", "followerCount": 1200,
                "rateCard": {"post": 100}}"#,
        )
        .unwrap();
        assert_eq!(profile.rate_card.post, Decimal::from(100));
        assert_eq!(profile.rate_card.story, Decimal::ZERO);
        assert_eq!(profile.tier(), Tier::Micro);
    }

    #[test]
    fn display_name_falls_back_to_handle_then_id() {
        let mut profile: CandidateProfile =
            serde_json::from_str(r#"{"id": "c1", "platform": "Instagram"}"#).unwrap();
        assert_eq!(profile.display_name(), "c1");
        profile.handle = Some("@beats".to_string());
        assert_eq!(profile.display_name(), "@beats");
        profile.name = "DJ Beats".to_string();
        assert_eq!(profile.display_name(), "DJ Beats");
    }
}
