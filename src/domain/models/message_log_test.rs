use super::MessageLog;
use crate::domain::models::SessionError;
use crate::domain::models::Speaker;
use crate::domain::models::Utterance;

#[test]
fn it_appends_in_order() {
    let mut log = MessageLog::default();
    log.append(Utterance::new(Speaker::User, "hi")).unwrap();
    log.append(Utterance::new(Speaker::Assistant, "hello")).unwrap();
    log.append(Utterance::new(Speaker::Assistant, "anyone there?"))
        .unwrap();

    let snapshot = log.snapshot();
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot[0], Utterance::new(Speaker::User, "hi"));
    assert_eq!(snapshot[1], Utterance::new(Speaker::Assistant, "hello"));
    assert_eq!(
        snapshot[2],
        Utterance::new(Speaker::Assistant, "anyone there?")
    );
}

#[test]
fn it_rejects_empty_utterances() {
    let mut log = MessageLog::default();
    let res = log.append(Utterance::new(Speaker::User, ""));

    assert_eq!(res, Err(SessionError::InvalidUtterance));
    assert!(log.is_empty());
}

#[test]
fn it_appends_exchanges_atomically() {
    let mut log = MessageLog::default();
    let res = log.append_exchange(
        Utterance::new(Speaker::User, "hi"),
        Utterance::new(Speaker::Assistant, ""),
    );

    assert_eq!(res, Err(SessionError::InvalidUtterance));
    assert_eq!(log.len(), 0);

    log.append_exchange(
        Utterance::new(Speaker::User, "hi"),
        Utterance::new(Speaker::Assistant, "hello"),
    )
    .unwrap();
    assert_eq!(log.len(), 2);
}

#[test]
fn it_clears() {
    let mut log = MessageLog::default();
    log.append(Utterance::new(Speaker::User, "hi")).unwrap();
    log.clear();

    assert!(log.is_empty());
    assert!(log.snapshot().is_empty());
}

#[test]
fn it_formats_transcript() {
    let mut log = MessageLog::default();
    log.append_exchange(
        Utterance::new(Speaker::User, "Hi, I'm ready"),
        Utterance::new(Speaker::Assistant, "Tell me about yourself."),
    )
    .unwrap();

    insta::assert_snapshot!(log.transcript(), @r###"
    Human: Hi, I'm ready
    AI: Tell me about yourself.
    "###);
}
