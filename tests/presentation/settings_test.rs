use std::collections::HashMap;

use chat_relay::presentation::config::{
    DEFAULT_MODEL, DEFAULT_PORT, DEFAULT_PROVIDER_BASE_URL, Environment, Settings,
};

#[test]
fn given_known_environment_names_when_parsing_then_maps_case_insensitively() {
    assert_eq!(Environment::try_from("LOCAL".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
}

#[test]
fn given_unknown_environment_when_parsing_then_returns_error() {
    let result = Environment::try_from("staging".to_string());

    assert!(result.unwrap_err().contains("staging"));
}

#[test]
fn given_default_settings_when_created_then_match_relay_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.server.port, DEFAULT_PORT);
    assert_eq!(settings.server.port, 4000);
    assert_eq!(settings.llm.model, DEFAULT_MODEL);
    assert_eq!(settings.llm.base_url, DEFAULT_PROVIDER_BASE_URL);
    assert_eq!(settings.llm.request_timeout_secs, None);
    assert!(!settings.scaffold.enabled);
}

fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn settings_dir(file_contents: &str) -> tempfile::TempDir {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("appsettings.test.toml"), file_contents).unwrap();
    dir
}

const TEST_FILE: &str = r#"
[server]
host = "127.0.0.1"
port = 5000

[llm]
model = "file-model"
"#;

#[test]
fn given_no_file_and_no_vars_when_loading_then_uses_defaults() {
    let dir = tempfile::TempDir::new().unwrap();

    let settings = Settings::load_from(dir.path(), Environment::Test, HashMap::new()).unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, DEFAULT_PORT);
    assert_eq!(settings.llm.model, DEFAULT_MODEL);
    assert_eq!(settings.llm.api_key, "");
    assert_eq!(settings.logging.level, "info");
    assert!(!settings.scaffold.enabled);
}

#[test]
fn given_settings_file_when_loading_then_file_overrides_defaults() {
    let dir = settings_dir(TEST_FILE);

    let settings = Settings::load_from(dir.path(), Environment::Test, HashMap::new()).unwrap();

    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.llm.model, "file-model");
    assert_eq!(settings.llm.base_url, DEFAULT_PROVIDER_BASE_URL);
}

#[test]
fn given_prefixed_vars_when_loading_then_they_override_file() {
    let dir = settings_dir(TEST_FILE);

    let settings = Settings::load_from(
        dir.path(),
        Environment::Test,
        vars(&[
            ("APP_SERVER__PORT", "5050"),
            ("APP_LOGGING__LEVEL", "debug"),
            ("APP_SCAFFOLD__ENABLED", "true"),
            ("APP_LLM__REQUEST_TIMEOUT_SECS", "30"),
        ]),
    )
    .unwrap();

    assert_eq!(settings.server.port, 5050);
    assert_eq!(settings.logging.level, "debug");
    assert!(settings.scaffold.enabled);
    assert_eq!(settings.llm.request_timeout_secs, Some(30));
    assert_eq!(settings.llm.model, "file-model");
}

#[test]
fn given_deployment_vars_when_loading_then_they_win_over_every_layer() {
    let dir = settings_dir(TEST_FILE);

    let settings = Settings::load_from(
        dir.path(),
        Environment::Test,
        vars(&[
            ("APP_SERVER__PORT", "5050"),
            ("PORT", "5123"),
            ("GEMINI_API_KEY", "k123"),
            ("GEMINI_MODEL", "gemini-x"),
        ]),
    )
    .unwrap();

    assert_eq!(settings.server.port, 5123);
    assert_eq!(settings.llm.api_key, "k123");
    assert_eq!(settings.llm.model, "gemini-x");
    assert_eq!(settings.server.host, "127.0.0.1");
}

#[test]
fn given_invalid_port_when_loading_then_returns_error() {
    let dir = tempfile::TempDir::new().unwrap();

    let result = Settings::load_from(
        dir.path(),
        Environment::Test,
        vars(&[("PORT", "not-a-port")]),
    );

    assert!(result.is_err());
}
