use serde::Serialize;
use slide300_catalog::{
    is_dark_background, AudienceStrategy, CatalogItem, StrategyTable, EXECUTIVE_AUDIENCE,
    EXECUTIVE_OVERRIDE, GENERAL_PUBLIC_AUDIENCE, GENERAL_PUBLIC_OVERRIDE,
};
use slide300_common::{Result, Slide300Error};
use tracing::debug;

use crate::prompts::render_strategic_prompt;

/// Placement sentence for the executive persona
pub const EXECUTIVE_PLACEMENT: &str =
    "결론(Key Message)을 최상단에 배치하고 근거 데이터를 하단에 요약";

/// Placement sentence for every other audience
pub const VISUAL_PLACEMENT: &str =
    "시선을 사로잡는 비주얼을 좌측에 60% 배치하고 우측에 스토리텔링";

/// Background/text shift chosen for the audience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorShift {
    /// Light slide turned dark for executives
    AddGravity,
    /// Dark slide turned light for the general public
    AddWarmth,
    /// Original pair kept
    Unchanged,
}

/// Values computed for a strategic variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategicPlan {
    /// Audience label as requested
    pub audience: String,

    /// Strategy applied (the default record on fallback)
    pub strategy: AudienceStrategy,

    /// True when the label was not in the strategy table
    pub fallback: bool,

    pub original_background: String,
    pub original_text: String,
    pub strategic_background: String,
    pub strategic_text: String,

    /// Always the item's accent
    pub accent_color: String,

    pub shift: ColorShift,

    /// Audience-conditioned placement sentence
    pub placement: &'static str,
}

/// Reject an empty audience before strategic synthesis
pub fn require_audience(label: &str) -> Result<&str> {
    let label = label.trim();
    if label.is_empty() {
        return Err(Slide300Error::AudienceRequired);
    }
    Ok(label)
}

/// Compute the strategic overrides for an item and audience
///
/// Unknown labels fall back to the default strategy. Only background and
/// text are shifted; the accent is passed through.
pub fn plan_strategic_variant(
    item: &CatalogItem,
    audience: &str,
    table: &StrategyTable<'_>,
) -> StrategicPlan {
    let (strategy, fallback) = table.resolve(audience);
    let is_dark = is_dark_background(&item.background_color);

    let (strategic_background, strategic_text, shift) = if audience == EXECUTIVE_AUDIENCE && !is_dark {
        (
            EXECUTIVE_OVERRIDE.background_color.to_string(),
            EXECUTIVE_OVERRIDE.text_color.to_string(),
            ColorShift::AddGravity,
        )
    } else if audience == GENERAL_PUBLIC_AUDIENCE && is_dark {
        (
            GENERAL_PUBLIC_OVERRIDE.background_color.to_string(),
            GENERAL_PUBLIC_OVERRIDE.text_color.to_string(),
            ColorShift::AddWarmth,
        )
    } else {
        (
            item.background_color.clone(),
            item.text_color.clone(),
            ColorShift::Unchanged,
        )
    };

    let placement = if audience == EXECUTIVE_AUDIENCE {
        EXECUTIVE_PLACEMENT
    } else {
        VISUAL_PLACEMENT
    };

    debug!(
        "Strategic plan - item: {}, audience: {}, fallback: {}, shift: {:?}",
        item.id, audience, fallback, shift
    );

    StrategicPlan {
        audience: audience.to_string(),
        strategy: *strategy,
        fallback,
        original_background: item.background_color.clone(),
        original_text: item.text_color.clone(),
        strategic_background,
        strategic_text,
        accent_color: item.accent_color.clone(),
        shift,
        placement,
    }
}

/// Strategic variant document for an item and audience
pub fn render_strategic_variant(
    item: &CatalogItem,
    audience: &str,
    table: &StrategyTable<'_>,
) -> String {
    let plan = plan_strategic_variant(item, audience, table);
    render_strategic_prompt(item, &plan)
}
