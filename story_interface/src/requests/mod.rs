// Internal modules
mod completion;
mod prompt_message;
mod res_components;

// Public exports
pub use completion::{
    CompletionError, CompletionFinishReason, CompletionRequest, CompletionResponse,
    DEFAULT_TEMPERATURE,
};
pub use prompt_message::{PromptMessage, PromptMessageType};
pub use res_components::TokenUsage;
