#[cfg(test)]
#[path = "interview_test.rs"]
mod tests;

use std::time::Duration;

use tokio::time;

use crate::domain::models::compose;
use crate::domain::models::prompt::INTERVIEWER_INSTRUCTION;
use crate::domain::models::Completion;
use crate::domain::models::CompletionClientBox;
use crate::domain::models::MessageLog;
use crate::domain::models::Request;
use crate::domain::models::SessionError;
use crate::domain::models::SessionState;
use crate::domain::models::Speaker;
use crate::domain::models::Utterance;

/// One interview conversation. Owns the history and the usage counter and
/// commits each exchange atomically: either both turns are recorded and usage
/// is updated, or nothing changes.
///
/// `submit` takes `&mut self`, so calls against one session are serialized by
/// construction. Share a session across tasks through `ActionsService`.
pub struct InterviewSession {
    client: CompletionClientBox,
    log: MessageLog,
    usage_total: u64,
    system_instruction: &'static str,
    timeout: Option<Duration>,
}

impl InterviewSession {
    pub fn new(client: CompletionClientBox) -> InterviewSession {
        return InterviewSession {
            client,
            log: MessageLog::default(),
            usage_total: 0,
            system_instruction: INTERVIEWER_INSTRUCTION,
            timeout: None,
        };
    }

    /// Bounds every completion call. Elapsing is reported as
    /// `SessionError::Timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> InterviewSession {
        self.timeout = Some(timeout);
        return self;
    }

    pub fn state(&self) -> SessionState {
        if self.log.is_empty() {
            return SessionState::Fresh;
        }

        return SessionState::Active;
    }

    pub async fn submit(&mut self, input: &str) -> Result<Utterance, SessionError> {
        if input.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }

        let request = compose(self.system_instruction, self.log.snapshot(), input)?;
        tracing::debug!(
            client = self.client.name(),
            prior_turns = request.prior_turns().len(),
            input_chars = request.new_input().chars().count(),
            "Requesting completion"
        );

        let completion = self.request_completion(&request).await.map_err(|err| {
            tracing::warn!(error = %err, "Completion failed, session left untouched");
            return err;
        })?;

        let reply = Utterance::new(Speaker::Assistant, &completion.text);
        if reply.is_blank() {
            return Err(SessionError::MalformedResponse(
                "completion text is empty".to_string(),
            ));
        }

        self.log
            .append_exchange(Utterance::new(Speaker::User, input), reply.clone())?;
        self.usage_total = self.usage_total.saturating_add(completion.tokens_used);

        tracing::debug!(
            tokens_used = completion.tokens_used,
            usage_total = self.usage_total,
            history_len = self.log.len(),
            "Exchange committed"
        );

        return Ok(reply);
    }

    /// Ends the current interview but keeps the same client.
    pub fn reset(&mut self) {
        self.log.clear();
        self.usage_total = 0;
        tracing::debug!("Session reset");
    }

    /// Same as building a brand new session: history and usage are dropped and
    /// the client may discard whatever it keeps between calls.
    pub fn restart(&mut self) {
        self.log.clear();
        self.usage_total = 0;
        self.client.reset_state();
        tracing::debug!(client = self.client.name(), "Session restarted");
    }

    pub fn current_usage(&self) -> u64 {
        return self.usage_total;
    }

    pub fn history(&self) -> &[Utterance] {
        return self.log.snapshot();
    }

    pub fn transcript(&self) -> String {
        return self.log.transcript();
    }

    async fn request_completion(&self, request: &Request) -> Result<Completion, SessionError> {
        if let Some(timeout) = self.timeout {
            return time::timeout(timeout, self.client.complete(request))
                .await
                .unwrap_or(Err(SessionError::Timeout(timeout)));
        }

        return self.client.complete(request).await;
    }
}
