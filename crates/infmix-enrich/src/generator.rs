use async_trait::async_trait;

use crate::error::GenerationError;

/// Produces short free text for a natural-language prompt.
///
/// Timeouts, quotas and retries are the implementation's business; callers
/// only see success or failure.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Generator used when no model is configured. Always fails, so every
/// rationale is the fallback template.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Disabled)
    }
}
