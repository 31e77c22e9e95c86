use thiserror::Error;

/// Failures from a text generator. Enrichment treats every variant the same.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from text generator")]
    UnexpectedStatus { status: u16 },

    #[error("malformed generator response: {0}")]
    Malformed(String),

    #[error("text generation is disabled")]
    Disabled,
}
