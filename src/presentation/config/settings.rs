use std::collections::HashMap;
use std::path::Path;

use config::{Config, File};
use serde::Deserialize;

use super::Environment;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
    #[serde(default)]
    pub scaffold: ScaffoldSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    #[serde(default)]
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Unset means the provider call may wait forever.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScaffoldSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub mock_response_delay_ms: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
}

impl Settings {
    /// Layers defaults, `appsettings.<env>` and `APP_*` variables, then the
    /// deployment variables `PORT`, `GEMINI_API_KEY` and `GEMINI_MODEL`.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        Self::load_from(Path::new("."), environment, std::env::vars().collect())
    }

    /// Same layering as [`Settings::load`], reading `appsettings.<env>` from
    /// `dir` and variables from `vars` instead of the process environment.
    pub fn load_from(
        dir: &Path,
        environment: Environment,
        vars: HashMap<String, String>,
    ) -> Result<Self, SettingsError> {
        let file_name = dir.join(format!(
            "appsettings.{}",
            environment.as_str().to_lowercase()
        ));
        let port = vars.get("PORT").cloned();
        let api_key = vars.get("GEMINI_API_KEY").cloned();
        let model = vars.get("GEMINI_MODEL").cloned();

        let settings = Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("llm.model", DEFAULT_MODEL)?
            .set_default("llm.base_url", DEFAULT_PROVIDER_BASE_URL)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&file_name.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.into_iter().collect())),
            )
            .set_override_option("server.port", port)?
            .set_override_option("llm.api_key", api_key)?
            .set_override_option("llm.model", model)?
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            llm: LlmSettings {
                api_key: String::new(),
                model: DEFAULT_MODEL.to_string(),
                base_url: DEFAULT_PROVIDER_BASE_URL.to_string(),
                request_timeout_secs: None,
            },
            logging: LoggingSettings {
                level: "info".to_string(),
                enable_json: false,
            },
            scaffold: ScaffoldSettings::default(),
        }
    }
}
