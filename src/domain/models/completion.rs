use anyhow::Result;
use async_trait::async_trait;

use super::Request;
use super::SessionError;

/// Generated text for one request, and what it cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub tokens_used: u64,
}

impl Completion {
    pub fn new(text: &str, tokens_used: u64) -> Completion {
        return Completion {
            text: text.to_string(),
            tokens_used,
        };
    }
}

pub type CompletionClientBox = Box<dyn CompletionClient + Send + Sync>;

#[async_trait]
pub trait CompletionClient {
    fn name(&self) -> &'static str;

    /// Used at startup to verify all configurations are available to work with
    /// the completion service, so a missing credential fails before the first
    /// question rather than on it.
    async fn health_check(&self) -> Result<()>;

    /// Executes one stateless request. Usage is returned alongside the text
    /// instead of being tracked on the side.
    async fn complete(&self, request: &Request) -> Result<Completion, SessionError>;

    /// Drops any client side state. Only called when a session restarts.
    fn reset_state(&mut self) {}
}
