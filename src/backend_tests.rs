//! Tests for message identifiers.

use super::*;

#[test]
fn new_ids_are_unique_and_non_empty() {
    let first = MessageId::new();
    let second = MessageId::new();

    assert!(!first.as_str().is_empty());
    assert_ne!(first, second);
}

#[test]
fn id_round_trips_through_display() {
    let id = MessageId::from("abc-123".to_string());

    assert_eq!(id.to_string(), "abc-123");
    assert_eq!(id.as_str(), "abc-123");
}

#[test]
fn id_parses_from_str() {
    let id: MessageId = "msg-42".parse().expect("parsing is infallible");

    assert_eq!(id.as_str(), "msg-42");
}
