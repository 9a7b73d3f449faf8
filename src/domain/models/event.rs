use super::SessionError;
use super::SessionState;
use super::Utterance;

/// Answers from the session worker, one per `Action`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Reply(Utterance, u64),
    Failure(SessionError),
    ResetDone(),
    RestartDone(),
    Usage(u64, SessionState),
    History(Vec<Utterance>, String),
}
