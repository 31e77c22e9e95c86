use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid brief: {0}")]
    InvalidBrief(String),
}
