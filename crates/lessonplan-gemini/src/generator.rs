use async_trait::async_trait;

use crate::error::GenerationError;

/// A remote capability that turns one prompt into one complete reply.
///
/// Implementations make a single attempt: no retries and no partial results.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
