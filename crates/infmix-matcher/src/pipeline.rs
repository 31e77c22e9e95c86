//! Matching pipeline orchestration.

use infmix_core::{rank, select_mix, Brief, EnrichedCandidate, ScoredCandidate, Tier};
use infmix_enrich::{enrich, TextGenerator};
use infmix_store::{retrieve, CandidateFilters, CandidateStore, DEFAULT_POOL_LIMIT};
use tracing::Instrument;
use uuid::Uuid;

use crate::error::MatchError;

/// Per-run knobs supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Maximum number of candidates fetched from the store.
    pub pool_limit: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            pool_limit: DEFAULT_POOL_LIMIT,
        }
    }
}

/// Run one matching pass for a brief.
///
/// 1. Validate the brief and derive coarse retrieval filters.
/// 2. Retrieve a bounded, re-filtered candidate pool.
/// 3. Score and rank the pool.
/// 4. Select a tiered, budget-aware mix.
/// 5. Enrich each pick with projections and a rationale.
///
/// An empty pool yields an empty result without calling the generator.
/// The run is stateless: the same brief and pool always select the same mix.
///
/// # Errors
///
/// Returns [`MatchError::Brief`] for an invalid brief and
/// [`MatchError::Store`] when retrieval fails. Rationale generation
/// failures are absorbed by the enrichment fallback.
pub async fn run_matching<S, G>(
    brief: &Brief,
    store: &S,
    generator: &G,
    options: MatchOptions,
) -> Result<Vec<EnrichedCandidate>, MatchError>
where
    S: CandidateStore + ?Sized,
    G: TextGenerator + ?Sized,
{
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("match_run", %run_id);

    async move {
        let ranked = ranked_pool(brief, store, options).await?;
        if ranked.is_empty() {
            tracing::info!("no eligible candidates, returning empty mix");
            return Ok(Vec::new());
        }

        let selection = select_mix(&ranked, brief.budget);
        tracing::info!(
            ranked = ranked.len(),
            selected = selection.len(),
            macro_picks = selection.count_tier(Tier::Macro),
            mid_picks = selection.count_tier(Tier::Mid),
            micro_picks = selection.count_tier(Tier::Micro),
            committed = %selection.committed,
            "mix selected"
        );

        let enriched = enrich(&selection, brief, generator).await;
        tracing::info!(candidates = enriched.len(), "matching run complete");
        Ok(enriched)
    }
    .instrument(span)
    .await
}

/// Retrieve and rank candidates for a brief without selecting a mix.
///
/// # Errors
///
/// Same as [`run_matching`], minus enrichment.
pub async fn rank_pool<S>(
    brief: &Brief,
    store: &S,
    options: MatchOptions,
) -> Result<Vec<ScoredCandidate>, MatchError>
where
    S: CandidateStore + ?Sized,
{
    let run_id = Uuid::new_v4();
    ranked_pool(brief, store, options)
        .instrument(tracing::info_span!("rank_run", %run_id))
        .await
}

async fn ranked_pool<S>(
    brief: &Brief,
    store: &S,
    options: MatchOptions,
) -> Result<Vec<ScoredCandidate>, MatchError>
where
    S: CandidateStore + ?Sized,
{
    brief.validate()?;

    let filters = CandidateFilters::from_brief(brief);
    let pool = retrieve(store, &filters, options.pool_limit).await?;
    tracing::debug!(pool = pool.len(), "candidate pool ready");

    Ok(rank(brief, &pool))
}
