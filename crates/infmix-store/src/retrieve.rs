use infmix_core::CandidateProfile;

use crate::error::StoreError;
use crate::filters::CandidateFilters;
use crate::store::CandidateStore;

/// Upper bound on candidates fetched per run, bounding downstream cost.
pub const DEFAULT_POOL_LIMIT: usize = 200;

/// Fetch a bounded candidate pool and re-apply `filters` client-side.
///
/// The result keeps store order and may be empty. Store errors propagate
/// unchanged; there is no fallback pool.
///
/// # Errors
///
/// Returns the store's [`StoreError`] if the query fails.
pub async fn retrieve<S>(
    store: &S,
    filters: &CandidateFilters,
    pool_limit: usize,
) -> Result<Vec<CandidateProfile>, StoreError>
where
    S: CandidateStore + ?Sized,
{
    let fetched = store.query(filters, pool_limit).await?;
    let fetched_count = fetched.len();

    let pool: Vec<CandidateProfile> = fetched
        .into_iter()
        .take(pool_limit)
        .filter(|c| filters.admits(c))
        .collect();

    tracing::debug!(
        fetched = fetched_count,
        eligible = pool.len(),
        pool_limit,
        "candidate pool retrieved"
    );
    Ok(pool)
}
