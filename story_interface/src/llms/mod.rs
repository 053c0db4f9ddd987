// Public modules
pub mod api;

// Internal imports
use crate::requests::*;

// Public exports
pub use api::{
    openai::{builder::OpenAiBackendBuilder, OpenAiBackend, OpenAiConfig},
    ApiConfig, ApiError, ClientError, LlmApiConfigTrait,
};

/// A completion service that answers one [`CompletionRequest`] per call.
///
/// Implementations perform exactly one round trip and return failures as they
/// happen.
#[async_trait::async_trait]
pub trait LlmBackend: Send + Sync {
    async fn completion_request(
        &self,
        request: &CompletionRequest,
    ) -> crate::Result<CompletionResponse, CompletionError>;

    /// The model used when a caller does not pick one.
    fn model_id(&self) -> &str;
}
