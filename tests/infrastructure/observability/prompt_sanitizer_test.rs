use chat_relay::infrastructure::observability::{redact_secrets, sanitize_prompt};

#[test]
fn given_blank_prompt_when_sanitizing_then_marks_empty() {
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(sanitize_prompt("  hello  "), "hello");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_total() {
    let prompt = "a".repeat(150);

    let sanitized = sanitize_prompt(&prompt);

    assert!(sanitized.starts_with(&"a".repeat(100)));
    assert!(sanitized.ends_with("... (150 chars total)"));
}

#[test]
fn given_multibyte_prompt_when_truncating_then_does_not_split_characters() {
    let prompt = "é".repeat(120);

    let sanitized = sanitize_prompt(&prompt);

    assert!(sanitized.starts_with(&"é".repeat(100)));
    assert!(sanitized.ends_with("(120 chars total)"));
}

#[test]
fn given_endpoint_with_key_when_redacting_then_hides_key() {
    let url = "https://example.test/v1beta/models/m:generateContent?key=AIzaSecret";

    assert_eq!(
        redact_secrets(url),
        "https://example.test/v1beta/models/m:generateContent?key=[REDACTED]"
    );
}

#[test]
fn given_repeated_secrets_when_redacting_then_hides_all() {
    let text = "token=abc and token=def";

    assert_eq!(redact_secrets(text), "token=[REDACTED] and token=[REDACTED]");
}

#[test]
fn given_bearer_header_when_sanitizing_then_redacts_token() {
    assert_eq!(
        sanitize_prompt("Authorization: Bearer sk-123 please"),
        "Authorization: Bearer [REDACTED] please"
    );
}
