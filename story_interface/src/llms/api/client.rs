use super::{
    config::ApiConfigTrait,
    error::{map_deserialization_error, map_serialization_error, ApiError, ClientError, WrappedError},
};
use bytes::Bytes;
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone)]
pub(crate) struct ApiClient<C: ApiConfigTrait> {
    http_client: reqwest::Client,
    pub config: C,
}

impl<C: ApiConfigTrait> ApiClient<C> {
    pub fn new(config: C) -> crate::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http_client: builder.build()?,
            config,
        })
    }

    /// Make a POST request to {path} and deserialize the response body
    pub(crate) async fn post<I, O>(&self, path: &str, request: I) -> Result<O, ClientError>
    where
        I: Serialize + std::fmt::Debug,
        O: DeserializeOwned,
    {
        let serialized_request = serde_json::to_string(&request).map_err(map_serialization_error)?;
        crate::trace!("Serialized request: {}", serialized_request);
        let request = self
            .http_client
            .post(self.config.url(path))
            .headers(self.config.headers())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serialized_request)
            .build()?;
        self.execute(request).await
    }

    /// Execute a HTTP request once. Failures, rate limits included, are returned
    /// to the caller as they are.
    async fn execute_raw(&self, request: reqwest::Request) -> Result<Bytes, ClientError> {
        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(ClientError::Reqwest)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(ClientError::Reqwest)?;

        // Deserialize response body from either error object or actual response object
        if !status.is_success() {
            let error = match serde_json::from_slice::<WrappedError>(bytes.as_ref()) {
                Ok(wrapped_error) => wrapped_error.error,
                Err(_) => ApiError {
                    message: String::from_utf8_lossy(bytes.as_ref()).into_owned(),
                    r#type: None,
                    param: None,
                    code: None,
                },
            };
            if status.as_u16() == 429 {
                crate::warn!("Rate limited: {}", error.message);
            } else {
                crate::warn!("API error {}: {}", status, error.message);
            }
            return Err(ClientError::ApiError {
                status: status.as_u16(),
                error,
            });
        }

        Ok(bytes)
    }

    async fn execute<O>(&self, request: reqwest::Request) -> Result<O, ClientError>
    where
        O: DeserializeOwned,
    {
        let bytes = self.execute_raw(request).await?;

        // Deserialize once into a generic Value
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| map_deserialization_error(e, &bytes))?;

        let pretty_json = serde_json::to_string_pretty(&value).map_err(map_serialization_error)?;
        crate::trace!("Serialized response: {}", pretty_json);

        let response: O =
            serde_json::from_value(value).map_err(|e| map_deserialization_error(e, &bytes))?;

        Ok(response)
    }
}
