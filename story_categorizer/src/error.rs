use story_interface::requests::CompletionError;

/// The completion service could not produce an answer.
///
/// Transport, authentication, rate-limit and malformed-payload failures all
/// land here with the original error as the source. Nothing is retried.
#[derive(Debug, thiserror::Error)]
#[error("completion service call failed: {source}")]
pub struct ServiceError {
    #[from]
    pub source: CompletionError,
}

impl ServiceError {
    /// HTTP status of the failed call, if the service answered.
    pub fn status(&self) -> Option<u16> {
        match &self.source {
            CompletionError::ClientError(e) => e.status(),
            _ => None,
        }
    }
}
