use async_trait::async_trait;
use infmix_core::CandidateProfile;

use crate::error::StoreError;
use crate::filters::CandidateFilters;

/// A queryable collection of creator profiles. Read-only.
///
/// Implementations may push any subset of `filters` down to the backend;
/// callers re-filter the result, so returning extra candidates is fine.
/// They must return at most `limit` profiles.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    async fn query(
        &self,
        filters: &CandidateFilters,
        limit: usize,
    ) -> Result<Vec<CandidateProfile>, StoreError>;
}
