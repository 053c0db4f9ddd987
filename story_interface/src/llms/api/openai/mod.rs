pub mod builder;
pub mod completion;

use super::{
    client::ApiClient,
    config::{ApiConfig, ApiConfigTrait},
};
use crate::{
    llms::LlmBackend,
    logging::LoggingConfig,
    requests::{CompletionError, CompletionRequest, CompletionResponse},
};
use completion::{OpenAiCompletionRequest, OpenAiCompletionResponse};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, Secret};

/// Default v1 API base url
pub const OPENAI_API_HOST: &str = "api.openai.com/v1";
/// Organization header
pub const OPENAI_ORGANIZATION_HEADER: &str = "OpenAI-Organization";
/// Project header
pub const OPENAI_PROJECT_HEADER: &str = "OpenAI-Project";
pub const OPENAI_COMPLETION_PATH: &str = "/chat/completions";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

pub struct OpenAiBackend {
    pub(crate) client: ApiClient<OpenAiConfig>,
    pub model_id: String,
}

impl OpenAiBackend {
    pub fn new<S: Into<String>>(mut config: OpenAiConfig, model_id: S) -> crate::Result<Self> {
        config.logging_config.load_logger()?;
        // A missing key is not fatal here. The service rejects the request and
        // the caller sees an authentication error.
        match config.api_config.load_api_key() {
            Ok(api_key) => config.api_config.api_key = Some(api_key),
            Err(e) => crate::warn!(
                "{}: {}. Requests will be sent without credentials.",
                config.api_config.api_key_env_var,
                e
            ),
        }
        Ok(Self {
            client: ApiClient::new(config)?,
            model_id: model_id.into(),
        })
    }
}

#[async_trait::async_trait]
impl LlmBackend for OpenAiBackend {
    async fn completion_request(
        &self,
        request: &CompletionRequest,
    ) -> crate::Result<CompletionResponse, CompletionError> {
        crate::debug!("{}", request);
        let res: OpenAiCompletionResponse = self
            .client
            .post(OPENAI_COMPLETION_PATH, OpenAiCompletionRequest::new(request)?)
            .await?;
        let res = CompletionResponse::new_from_openai(res)?;
        crate::debug!("{}", res);
        Ok(res)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    pub api_config: ApiConfig,
    pub logging_config: LoggingConfig,
    pub org_id: String,
    pub project_id: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_config: ApiConfig {
                host: OPENAI_API_HOST.to_string(),
                api_key: None,
                api_key_env_var: "OPENAI_API_KEY".to_string(),
                request_timeout: None,
            },
            logging_config: LoggingConfig {
                logger_name: "openai".to_string(),
                ..Default::default()
            },
            org_id: Default::default(),
            project_id: Default::default(),
        }
    }
}

impl OpenAiConfig {
    pub fn new() -> Self {
        Default::default()
    }

    /// To use a different organization id other than default
    pub fn with_org_id<S: Into<String>>(mut self, org_id: S) -> Self {
        self.org_id = org_id.into();
        self
    }

    /// Non default project id
    pub fn with_project_id<S: Into<String>>(mut self, project_id: S) -> Self {
        self.project_id = project_id.into();
        self
    }
}

impl ApiConfigTrait for OpenAiConfig {
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if !self.org_id.is_empty() {
            if let Ok(header_value) = HeaderValue::from_str(self.org_id.as_str()) {
                headers.insert(OPENAI_ORGANIZATION_HEADER, header_value);
            } else {
                crate::error!("Failed to create header value from org_id value");
            }
        }
        if !self.project_id.is_empty() {
            if let Ok(header_value) = HeaderValue::from_str(self.project_id.as_str()) {
                headers.insert(OPENAI_PROJECT_HEADER, header_value);
            } else {
                crate::error!("Failed to create header value from project_id value");
            }
        }
        if let Some(api_key) = self.api_key() {
            if let Ok(mut header_value) =
                HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
            {
                header_value.set_sensitive(true);
                headers.insert(AUTHORIZATION, header_value);
            } else {
                crate::error!("Failed to create header value from authorization value");
            }
        }

        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_config.base_url(), path)
    }

    fn api_key(&self) -> &Option<Secret<String>> {
        &self.api_config.api_key
    }

    fn request_timeout(&self) -> Option<std::time::Duration> {
        self.api_config.request_timeout
    }
}
