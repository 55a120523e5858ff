mod parsing;
mod settings;
mod types;

pub use types::{
    AiSettings, ConfigError, Environment, GradingSettings, RuntimeSettings, Settings,
    TelemetrySettings,
};
