use chrono::Utc;

use chat_relay::domain::{MessageId, MessageRole, TurnId, TurnIdGenerator};

#[test]
fn given_generator_when_drawing_many_ids_then_they_strictly_increase() {
    let generator = TurnIdGenerator::new();

    let ids: Vec<TurnId> = (0..1000).map(|_| generator.next()).collect();

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn given_start_time_when_drawing_id_then_id_is_not_before_start() {
    let start = Utc::now().timestamp_millis() as u64;
    let generator = TurnIdGenerator::new();

    let turn = generator.next();

    assert!(turn.as_millis() >= start);
}

#[test]
fn given_turn_when_building_role_ids_then_only_suffix_differs() {
    let turn = TurnId::from_millis(1_700_000_000_123);

    let user = MessageId::for_role(turn, MessageRole::User);
    let assistant = MessageId::for_role(turn, MessageRole::Assistant);

    assert_eq!(user.as_str(), "1700000000123_u");
    assert_eq!(assistant.as_str(), "1700000000123_a");
    assert_eq!(user.turn(), assistant.turn());
    assert_eq!(user.suffix(), Some("_u"));
    assert_eq!(assistant.suffix(), Some("_a"));
}

#[test]
fn given_local_error_id_when_inspected_then_has_err_suffix() {
    let id = MessageId::local_error(TurnId::from_millis(42));

    assert_eq!(id.as_str(), "42_err");
    assert_eq!(id.turn(), Some(TurnId::from_millis(42)));
}

#[test]
fn given_id_without_turn_prefix_when_parsing_turn_then_returns_none() {
    let id = MessageId::from("abc".to_string());

    assert_eq!(id.turn(), None);
    assert_eq!(id.suffix(), None);
}
