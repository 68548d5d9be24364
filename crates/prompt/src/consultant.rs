use async_trait::async_trait;
use slide300_catalog::{CatalogItem, StrategyTable};
use slide300_common::Result;
use std::time::Duration;
use tracing::{debug, info};

use crate::prompts::render_strategic_prompt;
use crate::strategy::{plan_strategic_variant, require_audience};
use crate::types::StrategicVariant;

/// Common trait for strategic variant providers
#[async_trait]
pub trait StrategyConsultant: Send + Sync {
    /// Produce a strategic variant for an item and audience
    async fn consult(&self, item: &CatalogItem, audience: &str) -> Result<StrategicVariant>;

    /// Display name of the consultant
    fn name(&self) -> &str;
}

/// Local, deterministic consultant with a simulated thinking delay
///
/// The delay is presentation only: no cancellation, retry or error path.
#[derive(Debug, Clone)]
pub struct LocalConsultant {
    table: StrategyTable<'static>,
    delay: Duration,
}

impl LocalConsultant {
    /// Create new consultant over the built-in strategy table
    pub fn new(delay: Duration) -> Self {
        Self::with_table(StrategyTable::builtin(), delay)
    }

    /// Create new consultant over a custom strategy table
    pub fn with_table(table: StrategyTable<'static>, delay: Duration) -> Self {
        Self { table, delay }
    }

    /// Consultant that answers immediately
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Synthesize without waiting
    pub fn synthesize(&self, item: &CatalogItem, audience: &str) -> Result<StrategicVariant> {
        let audience = require_audience(audience)?;
        let plan = plan_strategic_variant(item, audience, &self.table);
        let prompt = render_strategic_prompt(item, &plan);
        Ok(StrategicVariant::new(item.id, plan, prompt))
    }
}

impl Default for LocalConsultant {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl StrategyConsultant for LocalConsultant {
    async fn consult(&self, item: &CatalogItem, audience: &str) -> Result<StrategicVariant> {
        // Validate before the delay so a missing audience is reported at once
        require_audience(audience)?;

        info!("Generating strategic variant - item: {}, audience: {}", item.id, audience.trim());

        if !self.delay.is_zero() {
            debug!("Simulated strategy delay: {:?}", self.delay);
            tokio::time::sleep(self.delay).await;
        }

        self.synthesize(item, audience)
    }

    fn name(&self) -> &str {
        "local-strategic-consultant"
    }
}
