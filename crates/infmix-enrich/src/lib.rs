//! Enrichment of a selected influencer mix.
//!
//! Adds reach, engagement and cost projections to each pick and asks a text
//! generator for a one-line rationale. Generator failures never fail the run:
//! the rationale falls back to a template built from the profile itself.

pub mod enrich;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod prompt;

pub use enrich::{enrich, fallback_rationale};
pub use error::GenerationError;
pub use gemini::{GeminiGenerator, GeminiSettings};
pub use generator::{DisabledGenerator, TextGenerator};
