use serde::Serialize;

use crate::strategy::StrategicPlan;

/// Strategic variant result handed to the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct StrategicVariant {
    /// Catalog item id
    pub item_id: u32,

    /// Computed overrides and strategy
    pub plan: StrategicPlan,

    /// Rendered prompt text
    pub prompt: String,
}

impl StrategicVariant {
    /// Create new strategic variant
    pub fn new(item_id: u32, plan: StrategicPlan, prompt: String) -> Self {
        Self {
            item_id,
            plan,
            prompt,
        }
    }

    /// Whether the default strategy was used
    pub fn is_fallback(&self) -> bool {
        self.plan.fallback
    }
}
