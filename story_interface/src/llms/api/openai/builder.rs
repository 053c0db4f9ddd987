use super::{OpenAiBackend, OpenAiConfig, DEFAULT_OPENAI_MODEL};
use crate::{
    llms::{
        api::config::{ApiConfig, LlmApiConfigTrait},
        LlmBackend,
    },
    logging::{LoggingConfig, LoggingConfigTrait},
};

pub struct OpenAiBackendBuilder {
    pub config: OpenAiConfig,
    pub model_id: String,
}

impl Default for OpenAiBackendBuilder {
    fn default() -> Self {
        Self {
            config: Default::default(),
            model_id: DEFAULT_OPENAI_MODEL.to_string(),
        }
    }
}

impl OpenAiBackendBuilder {
    pub fn model_id<S: Into<String>>(mut self, model_id: S) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn org_id<S: Into<String>>(mut self, org_id: S) -> Self {
        self.config = self.config.with_org_id(org_id);
        self
    }

    pub fn project_id<S: Into<String>>(mut self, project_id: S) -> Self {
        self.config = self.config.with_project_id(project_id);
        self
    }

    pub fn init(self) -> crate::Result<std::sync::Arc<dyn LlmBackend>> {
        Ok(std::sync::Arc::new(OpenAiBackend::new(
            self.config,
            self.model_id,
        )?))
    }
}

impl LlmApiConfigTrait for OpenAiBackendBuilder {
    fn api_base_config_mut(&mut self) -> &mut ApiConfig {
        &mut self.config.api_config
    }

    fn api_config(&self) -> &ApiConfig {
        &self.config.api_config
    }
}

impl LoggingConfigTrait for OpenAiBackendBuilder {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig {
        &mut self.config.logging_config
    }
}
