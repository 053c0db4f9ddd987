#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("RequestBuilderError: {0}")]
    RequestBuilderError(String),
    #[error("ClientError: {0}")]
    ClientError(#[from] crate::llms::api::ClientError),
    #[error("ResponseChoicesEmpty: Response had no choices")]
    ResponseChoicesEmpty,
    #[error("ResponseContentEmpty: Response had no content")]
    ResponseContentEmpty,
}
