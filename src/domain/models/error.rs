use std::time::Duration;

use thiserror::Error;

/// Failures surfaced by an interview session. Completion service failures are
/// passed through unchanged and never leave a partial turn behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Input is empty, type an answer before submitting")]
    EmptyInput,

    #[error("Utterance text must not be empty")]
    InvalidUtterance,

    #[error("Completion service is unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Completion service rejected the credentials: {0}")]
    AuthenticationError(String),

    #[error("Completion service rate limit reached: {0}")]
    RateLimited(String),

    #[error("Completion service did not answer within {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Completion service returned a malformed response: {0}")]
    MalformedResponse(String),
}

impl SessionError {
    /// Whether the user can carry on by simply trying again.
    pub fn is_recoverable(&self) -> bool {
        return matches!(
            self,
            SessionError::EmptyInput
                | SessionError::ServiceUnavailable(_)
                | SessionError::RateLimited(_)
                | SessionError::Timeout(_)
        );
    }
}
