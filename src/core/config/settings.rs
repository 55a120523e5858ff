use super::parsing::{
    env_optional, env_or_default, parse_bool, parse_environment, parse_unit_interval,
};
use super::types::{
    AiSettings, ConfigError, GradingSettings, RuntimeSettings, Settings, TelemetrySettings,
};

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            parse_environment(env_optional("GRADING_ENV").or_else(|| env_optional("ENVIRONMENT")));
        let strict_config =
            env_optional("GRADING_STRICT_CONFIG").map(|value| parse_bool(&value)).unwrap_or(false)
                || environment.is_production();

        let service = env_or_default("GRADING_SERVICE", "mock");
        let neutral_keyword_score = parse_unit_interval(
            "GRADING_NEUTRAL_KEYWORD_SCORE",
            env_or_default("GRADING_NEUTRAL_KEYWORD_SCORE", "0.5"),
        )?;

        let openai_api_key = env_or_default("OPENAI_API_KEY", "");
        let openai_base_url = env_or_default("OPENAI_BASE_URL", "");
        let ai_model = env_or_default("AI_MODEL", "gpt-4");

        let log_level = env_or_default("GRADING_LOG_LEVEL", "info");
        let json = env_optional("GRADING_LOG_JSON").map(|value| parse_bool(&value)).unwrap_or(false);
        let prometheus_enabled =
            env_optional("PROMETHEUS_ENABLED").map(|value| parse_bool(&value)).unwrap_or(false);

        let settings = Self {
            runtime: RuntimeSettings { environment, strict_config },
            grading: GradingSettings { service, neutral_keyword_score },
            ai: AiSettings { openai_api_key, openai_base_url, ai_model },
            telemetry: TelemetrySettings { log_level, json, prometheus_enabled },
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn grading(&self) -> &GradingSettings {
        &self.grading
    }

    pub fn ai(&self) -> &AiSettings {
        &self.ai
    }

    pub fn telemetry(&self) -> &TelemetrySettings {
        &self.telemetry
    }

    pub fn runtime(&self) -> &RuntimeSettings {
        &self.runtime
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.grading.service.as_str(), "mock" | "llm") {
            // The factory falls back to the mock grader for unknown kinds.
            tracing::warn!(
                service = %self.grading.service,
                "Unrecognized GRADING_SERVICE; the mock grader will be used"
            );
        }

        if !(self.runtime.strict_config || self.runtime.environment.is_production()) {
            return Ok(());
        }

        if self.grading.service == "llm" && self.ai.openai_api_key.is_empty() {
            return Err(ConfigError::MissingSecret("OPENAI_API_KEY"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Environment;
    use crate::test_support::{env_lock, set_test_env};

    #[test]
    fn load_uses_defaults() {
        let _guard = env_lock();
        set_test_env();

        let settings = Settings::load().expect("settings");
        assert_eq!(settings.runtime().environment, Environment::Test);
        assert!(!settings.runtime().strict_config);
        assert_eq!(settings.grading().service, "mock");
        assert_eq!(settings.grading().neutral_keyword_score, 0.5);
        assert_eq!(settings.ai().ai_model, "gpt-4");
        assert!(!settings.telemetry().prometheus_enabled);
    }

    #[test]
    fn load_reads_grading_overrides() {
        let _guard = env_lock();
        set_test_env();
        std::env::set_var("GRADING_SERVICE", "llm");
        std::env::set_var("GRADING_NEUTRAL_KEYWORD_SCORE", "0.4");
        std::env::set_var("AI_MODEL", "gpt-4o");

        let settings = Settings::load().expect("settings");
        assert_eq!(settings.grading().service, "llm");
        assert_eq!(settings.grading().neutral_keyword_score, 0.4);
        assert_eq!(settings.ai().ai_model, "gpt-4o");
    }

    #[test]
    fn load_rejects_neutral_score_outside_unit_interval() {
        let _guard = env_lock();
        set_test_env();
        std::env::set_var("GRADING_NEUTRAL_KEYWORD_SCORE", "2");

        let err = Settings::load().expect_err("out of range");
        assert!(matches!(
            err,
            ConfigError::InvalidValue { field: "GRADING_NEUTRAL_KEYWORD_SCORE", .. }
        ));
    }

    #[test]
    fn strict_llm_requires_api_key() {
        let _guard = env_lock();
        set_test_env();
        std::env::set_var("GRADING_STRICT_CONFIG", "1");
        std::env::set_var("GRADING_SERVICE", "llm");

        let err = Settings::load().expect_err("missing key");
        assert!(matches!(err, ConfigError::MissingSecret("OPENAI_API_KEY")));

        std::env::set_var("OPENAI_API_KEY", "sk-test");
        assert!(Settings::load().is_ok());
    }

    #[test]
    fn unknown_service_is_not_a_config_error() {
        let _guard = env_lock();
        set_test_env();
        std::env::set_var("GRADING_SERVICE", "heuristic");

        let settings = Settings::load().expect("fallback is tolerated");
        assert_eq!(settings.grading().service, "heuristic");
    }
}
