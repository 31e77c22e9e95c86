use infmix_core::CoreError;
use infmix_store::StoreError;
use thiserror::Error;

/// Fatal failures of a matching run. Generator failures never surface here.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error(transparent)]
    Brief(#[from] CoreError),

    #[error("candidate retrieval failed: {0}")]
    Store(#[from] StoreError),
}
