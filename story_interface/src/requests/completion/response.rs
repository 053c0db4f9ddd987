use crate::requests::res_components::TokenUsage;

#[derive(Debug)]
pub struct CompletionResponse {
    /// A unique identifier for the chat completion.
    pub id: String,
    /// Index of the choice this response was built from.
    pub index: Option<u32>,
    /// The generated completion, exactly as returned.
    pub content: String,
    pub finish_reason: CompletionFinishReason,
    pub token_usage: TokenUsage,
}

impl std::fmt::Display for CompletionResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "CompletionResponse:")?;
        writeln!(f, "    id: {}", self.id)?;
        writeln!(f, "    content: {:?}", self.content)?;
        writeln!(f, "    finish_reason: {}", self.finish_reason)?;
        write!(f, "    token_usage: {}", self.token_usage)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CompletionFinishReason {
    /// The model finished its turn naturally.
    Eos,
    /// The completion finished because the model reached the maximum token limit.
    StopLimit,
    /// Any other reason reported by the provider, e.g. `content_filter`.
    Other(String),
}

impl CompletionFinishReason {
    pub fn from_openai(reason: Option<&str>) -> Self {
        match reason {
            Some("stop") => CompletionFinishReason::Eos,
            Some("length") => CompletionFinishReason::StopLimit,
            Some(other) => CompletionFinishReason::Other(other.to_owned()),
            None => CompletionFinishReason::Other("none".to_owned()),
        }
    }
}

impl std::fmt::Display for CompletionFinishReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionFinishReason::Eos => write!(f, "Eos"),
            CompletionFinishReason::StopLimit => write!(f, "StopLimit"),
            CompletionFinishReason::Other(reason) => write!(f, "Other({})", reason),
        }
    }
}
