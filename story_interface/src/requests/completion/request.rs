use crate::requests::prompt_message::{PromptMessage, PromptMessageType};

pub const DEFAULT_TEMPERATURE: f32 = 1.0;

/// A single chat-completion call: model, ordered messages, sampling temperature.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<PromptMessage>,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new<S: Into<String>>(model: S) -> CompletionRequest {
        CompletionRequest {
            model: model.into(),
            messages: Vec::new(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn add_system_message<S: Into<String>>(&mut self, content: S) -> &mut Self {
        self.messages
            .push(PromptMessage::new(PromptMessageType::System, content));
        self
    }

    pub fn add_user_message<S: Into<String>>(&mut self, content: S) -> &mut Self {
        self.messages
            .push(PromptMessage::new(PromptMessageType::User, content));
        self
    }

    pub fn add_assistant_message<S: Into<String>>(&mut self, content: S) -> &mut Self {
        self.messages
            .push(PromptMessage::new(PromptMessageType::Assistant, content));
        self
    }

    /// 0.0 asks the provider for greedy decoding.
    pub fn set_temperature(&mut self, temperature: f32) -> &mut Self {
        self.temperature = temperature;
        self
    }
}

impl std::fmt::Display for CompletionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "CompletionRequest:")?;
        writeln!(f, "  model: {}", self.model)?;
        writeln!(f, "  temperature: {}", self.temperature)?;
        write!(f, "  messages:")?;
        for message in &self.messages {
            write!(f, "\n    {}", message)?;
        }
        Ok(())
    }
}
