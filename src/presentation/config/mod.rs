mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DEFAULT_MODEL, DEFAULT_PORT, DEFAULT_PROVIDER_BASE_URL, LlmSettings, LoggingSettings,
    ScaffoldSettings, ServerSettings, Settings, SettingsError,
};
