use crate::requests::{
    CompletionError, CompletionFinishReason, CompletionRequest, CompletionResponse, TokenUsage,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Debug, Deserialize, PartialEq)]
pub struct OpenAiCompletionRequest {
    /// ID of the model to use.
    pub model: String,

    /// The messages comprising the conversation so far, in order.
    pub messages: Vec<CompletionRequestMessage>,

    /// What sampling temperature to use, between 0 and 2. Lower values make the
    /// output more focused and deterministic.
    pub temperature: f32,
}

#[derive(Clone, Serialize, Debug, Deserialize, PartialEq)]
pub struct CompletionRequestMessage {
    pub role: String,
    pub content: String,
}

impl OpenAiCompletionRequest {
    pub fn new(req: &CompletionRequest) -> crate::Result<Self, CompletionError> {
        if req.model.trim().is_empty() {
            return Err(CompletionError::RequestBuilderError(
                "Model id must not be empty".to_string(),
            ));
        }
        if req.messages.is_empty() {
            return Err(CompletionError::RequestBuilderError(
                "Request has no messages".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&req.temperature) {
            return Err(CompletionError::RequestBuilderError(format!(
                "Temperature {} is outside 0.0..=2.0",
                req.temperature
            )));
        }

        let messages = req
            .messages
            .iter()
            .map(|m| CompletionRequestMessage {
                role: m.message_type.as_str().to_string(),
                content: m.content.clone(),
            })
            .collect();

        Ok(OpenAiCompletionRequest {
            model: req.model.clone(),
            messages,
            temperature: req.temperature,
        })
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OpenAiCompletionResponse {
    /// A unique identifier for the chat completion.
    pub id: String,
    /// A list of chat completion choices.
    pub choices: Vec<ChatChoice>,
    /// The model used for the chat completion.
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub usage: Option<CompletionUsage>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChatChoice {
    /// The index of the choice in the list of choices.
    #[serde(default)]
    pub index: u32,
    pub message: ChatCompletionResponseMessage,
    /// `stop`, `length`, `content_filter` or `tool_calls`.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChatCompletionResponseMessage {
    /// Null when the model refused or only called tools.
    #[serde(default)]
    pub content: Option<String>,
    pub role: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CompletionUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl CompletionResponse {
    /// Only the first choice is used; requests never ask for more than one.
    pub(crate) fn new_from_openai(
        res: OpenAiCompletionResponse,
    ) -> crate::Result<Self, CompletionError> {
        let token_usage = res
            .usage
            .map(|usage| TokenUsage {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
                total_tokens: usage.total_tokens,
            })
            .unwrap_or_default();
        let choice = res
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::ResponseChoicesEmpty)?;
        let content = choice
            .message
            .content
            .ok_or(CompletionError::ResponseContentEmpty)?;

        Ok(CompletionResponse {
            id: res.id,
            index: Some(choice.index),
            content,
            finish_reason: CompletionFinishReason::from_openai(choice.finish_reason.as_deref()),
            token_usage,
        })
    }
}
