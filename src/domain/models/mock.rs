use std::collections::VecDeque;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use super::Completion;
use super::CompletionClient;
use super::Request;
use super::SessionError;

/// Scripted completion client. Replies are handed out in order, every request
/// is recorded and restarts are counted.
#[derive(Clone, Default)]
pub struct MockCompletion {
    replies: Arc<Mutex<VecDeque<Result<Completion, SessionError>>>>,
    requests: Arc<Mutex<Vec<Request>>>,
    resets: Arc<AtomicUsize>,
    delay: Option<Duration>,
}

impl MockCompletion {
    pub fn new(replies: Vec<Result<Completion, SessionError>>) -> MockCompletion {
        return MockCompletion {
            replies: Arc::new(Mutex::new(replies.into())),
            ..MockCompletion::default()
        };
    }

    pub fn with_delay(mut self, delay: Duration) -> MockCompletion {
        self.delay = Some(delay);
        return self;
    }

    pub fn requests(&self) -> Vec<Request> {
        return self.requests.lock().unwrap().clone();
    }

    pub fn resets(&self) -> usize {
        return self.resets.load(Ordering::SeqCst);
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    fn name(&self) -> &'static str {
        return "mock";
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn complete(&self, request: &Request) -> Result<Completion, SessionError> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        return self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                return Err(SessionError::ServiceUnavailable(
                    "no scripted reply left".to_string(),
                ));
            });
    }

    fn reset_state(&mut self) {
        self.resets.fetch_add(1, Ordering::SeqCst);
    }
}
