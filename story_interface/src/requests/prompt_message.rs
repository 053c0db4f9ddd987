use serde::{Deserialize, Serialize};

/// The role a message plays in a chat prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptMessageType {
    /// Instruction that sets the assistant's role. Sent first.
    System,
    User,
    Assistant,
}

impl PromptMessageType {
    pub fn as_str(&self) -> &str {
        match self {
            PromptMessageType::System => "system",
            PromptMessageType::User => "user",
            PromptMessageType::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for PromptMessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub message_type: PromptMessageType,
    pub content: String,
}

impl PromptMessage {
    pub fn new<S: Into<String>>(message_type: PromptMessageType, content: S) -> Self {
        Self {
            message_type,
            content: content.into(),
        }
    }
}

impl std::fmt::Display for PromptMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:?}", self.message_type, self.content)
    }
}
