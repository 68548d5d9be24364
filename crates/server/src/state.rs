use chrono::{DateTime, Utc};
use slide300_common::AppConfig;
use slide300_prompt::{LocalConsultant, StrategyConsultant};
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Strategic variant provider
    pub consultant: Arc<dyn StrategyConsultant>,

    /// Server start time
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create new application state with the local consultant
    pub fn new(config: AppConfig) -> Self {
        let consultant = Arc::new(LocalConsultant::new(config.strategy_delay()));
        Self::with_consultant(config, consultant)
    }

    /// Create new application state with a custom consultant
    pub fn with_consultant(config: AppConfig, consultant: Arc<dyn StrategyConsultant>) -> Self {
        Self {
            config,
            consultant,
            started_at: Utc::now(),
        }
    }
}
