// Internal modules
mod error;
mod request;
mod response;

// Public exports
pub use error::CompletionError;
pub use request::{CompletionRequest, DEFAULT_TEMPERATURE};
pub use response::{CompletionFinishReason, CompletionResponse};
