//! Integration Tests for scrollback flows
//!
//! Several messages arriving one after another, with formatting carried
//! between them, failures shown raw, and local input echoed.

use ansiscroll::{Color, Config, EntryKind, InputKey, Scrollback, Session};

#[test]
fn test_style_spans_messages() {
    let mut log = Scrollback::default();
    log.receive("\x1b[1;36mheader").unwrap();
    log.receive("still styled").unwrap();
    log.receive("\x1b[0mplain again").unwrap();

    let entries: Vec<_> = log.entries().collect();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].runs[0].style.foreground, Color::Cyan);
    assert!(entries[1].runs[0].style.bold);
    assert!(entries[2].runs[0].style.is_default());
}

#[test]
fn test_bad_message_does_not_break_stream() {
    let mut log = Scrollback::default();
    log.receive("\x1b[33mwarm").unwrap();
    assert!(log.receive("\x1b[Hcursor home").is_err());
    let entry = log.receive("after").unwrap();

    assert_eq!(entry.runs[0].style.foreground, Color::Yellow);
    let kinds: Vec<_> = log.entries().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![EntryKind::Received, EntryKind::Raw, EntryKind::Received]
    );
}

#[test]
fn test_disabled_formatting_from_config() {
    let mut config = Config::default();
    config.formatting.enabled = false;
    let mut log = Scrollback::with_config(&config);

    let entry = log.receive("\x1b[31mHi").unwrap();
    assert_eq!(entry.runs.len(), 1);
    assert_eq!(entry.text(), "Hi");
    assert!(entry.runs[0].style.is_default());
}

#[test]
fn test_session_round_trip() {
    let mut session = Session::default();
    session.scrollback.receive("\x1b[32m$ \x1b[0mready").unwrap();

    for ch in "echo hi".chars() {
        session.process_key(InputKey::Char(ch));
    }
    assert_eq!(session.process_key(InputKey::Enter).as_deref(), Some("echo hi"));
    assert_eq!(session.process_key(InputKey::Enter), None);

    assert_eq!(session.scrollback.plain_text(), "$ ready\necho hi");
    assert_eq!(session.scrollback.last().map(|e| e.kind), Some(EntryKind::Echo));
}

#[test]
fn test_entries_serialize() {
    let mut log = Scrollback::default();
    log.receive("\x1b[1mx").unwrap();
    let json = serde_json::to_value(log.last().unwrap()).unwrap();
    assert_eq!(json["kind"], "received");
    assert_eq!(json["runs"][0]["style"]["bold"], true);
    assert_eq!(json["runs"][0]["style"]["foreground"], "default");
}
