use std::time::Duration;

use super::format_event;
use super::format_usage;
use super::format_utterance;
use crate::domain::models::Event;
use crate::domain::models::SessionError;
use crate::domain::models::SessionState;
use crate::domain::models::Speaker;
use crate::domain::models::Utterance;

#[test]
fn it_formats_assistant_bubbles() {
    let utterance = Utterance::new(
        Speaker::Assistant,
        "Thanks for joining. Could you start by introducing yourself?",
    );

    insta::assert_snapshot!(format_utterance(&utterance, 30), @r###"
    Interviewer 🤖:
      Thanks for joining. Could you
      start by introducing
      yourself?
    "###);
}

#[test]
fn it_formats_usage() {
    assert_eq!(format_usage(21), "Used 21 tokens");
}

#[test]
fn it_formats_usage_reports_with_session_state() {
    assert_eq!(
        format_event(&Event::Usage(0, SessionState::Fresh)),
        "[FRESH] Used 0 tokens (the interview has not started)"
    );
    assert_eq!(
        format_event(&Event::Usage(145, SessionState::Active)),
        "[ACTIVE] Used 145 tokens (interview in progress)"
    );
}

#[test]
fn it_formats_replies_with_usage() {
    let event = Event::Reply(Utterance::new(Speaker::Assistant, "What domain?"), 21);

    insta::assert_snapshot!(format_event(&event), @r###"
    Interviewer 🤖:
      What domain?

    Used 21 tokens
    "###);
}

#[test]
fn it_formats_failures() {
    let event = Event::Failure(SessionError::Timeout(Duration::from_millis(1500)));
    assert_eq!(
        format_event(&event),
        "Completion service did not answer within 1500ms. Nothing was recorded, you can try again."
    );

    let event = Event::Failure(SessionError::AuthenticationError("status 401: nope".to_string()));
    assert_eq!(
        format_event(&event),
        "Completion service rejected the credentials: status 401: nope. Nothing was recorded."
    );
}

#[test]
fn it_formats_empty_history() {
    let event = Event::History(vec![], "".to_string());
    assert_eq!(format_event(&event), "The conversation is empty.");
}

#[test]
fn it_formats_history() {
    let event = Event::History(
        vec![
            Utterance::new(Speaker::User, "Hi"),
            Utterance::new(Speaker::Assistant, "Tell me about yourself."),
        ],
        "Human: Hi\nAI: Tell me about yourself.".to_string(),
    );
    assert_eq!(
        format_event(&event),
        "Human: Hi\nAI: Tell me about yourself."
    );
}
