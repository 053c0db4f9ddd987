use crate::{
    categories::CategorySet,
    classification::ClassificationResult,
    error::ServiceError,
    prompt::{classification_prompt, SYSTEM_PROMPT},
};
use story_interface::{
    llms::{ApiConfig, LlmApiConfigTrait, LlmBackend, OpenAiBackendBuilder},
    logging::{LoggingConfig, LoggingConfigTrait},
    requests::CompletionRequest,
};

/// Greedy decoding: the same story should get the same answer.
pub const CLASSIFICATION_TEMPERATURE: f32 = 0.0;

pub const SAMPLE_STORY: &str =
    "I lost my best friend recently, and it's been hard to cope with the grief.";

/// Sorts stories into a fixed [`CategorySet`] by asking a completion service.
///
/// Holds only immutable configuration, so one instance can serve concurrent
/// callers. Every [`Categorizer::classify`] call makes exactly one request.
pub struct Categorizer {
    backend: std::sync::Arc<dyn LlmBackend>,
    pub categories: CategorySet,
    pub model_id: String,
}

impl Categorizer {
    /// Uses the reference categories and the backend's model.
    pub fn new(backend: std::sync::Arc<dyn LlmBackend>) -> Self {
        Self {
            model_id: backend.model_id().to_owned(),
            backend,
            categories: CategorySet::default(),
        }
    }

    /// Creates a new instance of the [`CategorizerBuilder`] backed by the OpenAI
    /// chat completions API. It is converted to a `Categorizer` with `init`.
    pub fn openai() -> CategorizerBuilder {
        CategorizerBuilder::default()
    }

    pub fn with_categories(mut self, categories: CategorySet) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_model<S: Into<String>>(mut self, model_id: S) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub async fn classify<T: AsRef<str>>(
        &self,
        story: T,
    ) -> Result<ClassificationResult, ServiceError> {
        let request = self.completion_request(story.as_ref());
        let response = match self.backend.completion_request(&request).await {
            Ok(response) => response,
            Err(e) => {
                crate::error!("Completion request failed: {}", e);
                return Err(ServiceError::from(e));
            }
        };
        let result = self.match_category(&response.content);
        crate::debug!(reply = ?response.content, "Raw completion");
        crate::info!("Story classified as {}", result);
        Ok(result)
    }

    /// Trims the reply and accepts it only if it is exactly one of the labels.
    /// Casing, punctuation or extra words all make it [`ClassificationResult::Uncategorized`].
    pub fn match_category(&self, reply: &str) -> ClassificationResult {
        match self.categories.get(reply.trim()) {
            Some(label) => ClassificationResult::Category(label.to_owned()),
            None => ClassificationResult::Uncategorized,
        }
    }

    pub fn prompt(&self, story: &str) -> String {
        classification_prompt(&self.categories, story)
    }

    pub fn completion_request(&self, story: &str) -> CompletionRequest {
        let mut request = CompletionRequest::new(&self.model_id);
        request
            .add_system_message(SYSTEM_PROMPT)
            .add_user_message(self.prompt(story))
            .set_temperature(CLASSIFICATION_TEMPERATURE);
        request
    }
}

pub struct CategorizerBuilder {
    pub backend: OpenAiBackendBuilder,
    pub categories: CategorySet,
}

impl Default for CategorizerBuilder {
    fn default() -> Self {
        Self {
            backend: OpenAiBackendBuilder::default().logger_name("story_categorizer"),
            categories: CategorySet::default(),
        }
    }
}

impl CategorizerBuilder {
    pub fn model_id<S: Into<String>>(mut self, model_id: S) -> Self {
        self.backend = self.backend.model_id(model_id);
        self
    }

    pub fn categories(mut self, categories: CategorySet) -> Self {
        self.categories = categories;
        self
    }

    /// Builds the backend, reading the API key once, and returns the categorizer.
    pub fn init(self) -> crate::Result<Categorizer> {
        let backend = self.backend.init()?;
        Ok(Categorizer::new(backend).with_categories(self.categories))
    }
}

impl LlmApiConfigTrait for CategorizerBuilder {
    fn api_base_config_mut(&mut self) -> &mut ApiConfig {
        self.backend.api_base_config_mut()
    }

    fn api_config(&self) -> &ApiConfig {
        self.backend.api_config()
    }
}

impl LoggingConfigTrait for CategorizerBuilder {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig {
        self.backend.logging_config_mut()
    }
}
