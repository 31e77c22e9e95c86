//! Core data model and pure matching engine for influencer campaign mixes.
//!
//! Scores creator profiles against a campaign brief, ranks them, and picks a
//! tiered, budget-aware mix. Nothing in this crate performs I/O.

pub mod error;
pub mod estimate;
pub mod mix;
pub mod overlap;
pub mod scorer;
pub mod tier;
pub mod types;

pub use error::CoreError;
pub use estimate::{budget_summary, estimate, BudgetSummary};
pub use mix::{select_mix, selection_cost};
pub use scorer::{rank, score};
pub use tier::Tier;
pub use types::{
    AgeRange, Brief, CandidateProfile, Demographics, EnrichedCandidate, Estimates, Money,
    RateCard, ScoreBreakdown, ScoredCandidate, SelectionResult,
};
