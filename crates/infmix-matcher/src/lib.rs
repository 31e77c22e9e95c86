//! End-to-end influencer matching: retrieve, score, select, enrich.

pub mod error;
pub mod pipeline;

pub use error::MatchError;
pub use pipeline::{rank_pool, run_matching, MatchOptions};
