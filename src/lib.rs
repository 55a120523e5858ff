pub mod core;
pub mod schemas;
pub mod services;

#[cfg(test)]
mod test_support;

pub use crate::core::config::{ConfigError, Settings};
pub use crate::schemas::grading::{GradingMethod, GradingResult};
pub use crate::schemas::question::{GradingCriteria, Question, QuestionType};
pub use crate::services::grading::{
    get_grading_service, GradingError, GradingService, LlmGradingService, MockGradingService,
    ServiceKind,
};

/// Load `.env`, read settings and install tracing and metrics.
///
/// Hosts embedding the grader call this once at startup and then build a
/// grader with [`services::grading::from_settings`].
pub fn init() -> anyhow::Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    core::telemetry::init_tracing(&settings)?;
    core::metrics::init(&settings)?;

    tracing::info!(
        environment = %settings.runtime().environment.as_str(),
        service = %settings.grading().service,
        "Grading engine configured"
    );

    Ok(settings)
}
