#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::InterviewSession;
use crate::domain::models::Action;
use crate::domain::models::Event;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /exit (/x) - Exit the interview. Clears the conversation and the token count.
- /new (/n) - Start a new interview from scratch.
- /usage (/u) - Shows how many tokens the interview has used so far.
- /history (/hi) - Prints the conversation buffer sent to the model.
- /quit (/q) - Quit Interview Buddy.
- /help (/h) - Provides this help menu.

Submitting an empty line sends "Hello Interview Bot" to get things started.
        "#;

    return text.trim().to_string();
}

pub struct ActionsService {}

impl ActionsService {
    /// Owns the session and drains actions one at a time, so queued submits
    /// are answered in the order they were sent and never overlap.
    pub async fn start(
        mut session: InterviewSession,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            let event = match action {
                Action::Submit(text) => match session.submit(&text).await {
                    Ok(reply) => Event::Reply(reply, session.current_usage()),
                    Err(err) => Event::Failure(err),
                },
                Action::Reset() => {
                    session.reset();
                    Event::ResetDone()
                }
                Action::Restart() => {
                    session.restart();
                    Event::RestartDone()
                }
                Action::Usage() => Event::Usage(session.current_usage(), session.state()),
                Action::History() => {
                    Event::History(session.history().to_vec(), session.transcript())
                }
            };

            tx.send(event)?;
        }

        return Ok(());
    }
}
