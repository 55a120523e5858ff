use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Settings {
    pub(super) runtime: RuntimeSettings,
    pub(super) grading: GradingSettings,
    pub(super) ai: AiSettings,
    pub(super) telemetry: TelemetrySettings,
}

#[derive(Debug, Clone)]
pub struct GradingSettings {
    /// Grader selector passed to the service factory (`mock` or `llm`).
    pub service: String,
    /// Keyword score used when neither criteria nor the reference text yield keywords.
    pub neutral_keyword_score: f64,
}

#[derive(Debug, Clone)]
pub struct AiSettings {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub ai_model: String,
}

#[derive(Debug, Clone)]
pub struct TelemetrySettings {
    pub log_level: String,
    pub json: bool,
    pub prometheus_enabled: bool,
}

#[derive(Debug, Clone)]
pub struct RuntimeSettings {
    pub environment: Environment,
    pub strict_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Staging,
    Test,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Staging => "staging",
            Self::Test => "test",
        }
    }

    pub(super) fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
    #[error("missing required secret for {0}")]
    MissingSecret(&'static str),
}

impl Default for GradingSettings {
    fn default() -> Self {
        Self { service: "mock".to_string(), neutral_keyword_score: 0.5 }
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            openai_base_url: String::new(),
            ai_model: "gpt-4".to_string(),
        }
    }
}
