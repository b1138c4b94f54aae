use chrono::{TimeZone, Utc};
use serde_json::json;

use chat_relay::domain::{Message, MessageId, MessageRole, TurnId};

#[test]
fn given_user_message_when_serialized_then_uses_wire_field_names() {
    let mut message = Message::user(TurnId::from_millis(1_714_564_800_000), "hello".to_string());
    message.timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let value = serde_json::to_value(&message).unwrap();

    assert_eq!(
        value,
        json!({
            "id": "1714564800000_u",
            "role": "user",
            "text": "hello",
            "ts": "2024-05-01T12:00:00.000Z"
        })
    );
}

#[test]
fn given_wire_json_when_deserialized_then_builds_message() {
    let raw = r#"{"id":"17_a","role":"assistant","text":"hi","ts":"2024-05-01T12:00:00.250Z"}"#;

    let message: Message = serde_json::from_str(raw).unwrap();

    assert_eq!(message.id, MessageId::from("17_a".to_string()));
    assert_eq!(message.role, MessageRole::Assistant);
    assert_eq!(message.text, "hi");
    assert_eq!(message.timestamp.timestamp_subsec_millis(), 250);
}

#[test]
fn given_unknown_role_when_deserialized_then_fails() {
    let raw = r#"{"id":"1_s","role":"system","text":"x","ts":"2024-05-01T12:00:00.000Z"}"#;

    assert!(serde_json::from_str::<Message>(raw).is_err());
}

#[test]
fn given_empty_text_when_creating_message_then_keeps_it() {
    let message = Message::user(TurnId::from_millis(1), String::new());

    assert_eq!(message.text, "");
    assert_eq!(message.role, MessageRole::User);
}

#[test]
fn given_role_strings_when_parsed_then_match_wire_names() {
    assert_eq!("user".parse::<MessageRole>(), Ok(MessageRole::User));
    assert_eq!(MessageRole::Assistant.to_string(), "assistant");
    assert!("USER".parse::<MessageRole>().is_err());
}
