//! Candidate retrieval for the influencer matcher.
//!
//! Queries a candidate store for a bounded pool, then re-applies the brief's
//! coarse filters client-side because store-side filtering is exact-match and
//! best-effort. Store failures propagate to the caller; nothing is cached.

pub mod error;
pub mod filters;
pub mod firestore;
pub mod memory;
pub mod retrieve;
pub mod store;

mod retry;

pub use error::StoreError;
pub use filters::CandidateFilters;
pub use firestore::{FirestoreSettings, FirestoreStore};
pub use memory::StaticStore;
pub use retrieve::{retrieve, DEFAULT_POOL_LIMIT};
pub use store::CandidateStore;
