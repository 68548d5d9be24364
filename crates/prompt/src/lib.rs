//! Slide300 Prompt Synthesizer
//!
//! 템플릿 기반 AUTO 프롬프트 및 청중 맞춤 전략적 변주 프롬프트 생성

mod consultant;
mod guide;
mod prompts;
mod strategy;
mod types;

pub use consultant::{LocalConsultant, StrategyConsultant};
pub use guide::{render_guide, WORKFLOW_GUIDE};
pub use prompts::{render_auto_prompt, render_strategic_prompt};
pub use strategy::{
    plan_strategic_variant, render_strategic_variant, require_audience, ColorShift, StrategicPlan,
    EXECUTIVE_PLACEMENT, VISUAL_PLACEMENT,
};
pub use types::StrategicVariant;
