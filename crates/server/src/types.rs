use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slide300_catalog::{AudienceStrategy, CatalogItem, CategoryCount, CategoryDescriptor};
use slide300_prompt::StrategicPlan;

/// Query string for template search
#[derive(Debug, Default, Deserialize)]
pub struct TemplateQuery {
    /// Category name or "전체"/"all"
    pub category: Option<String>,

    /// Free-text search term
    pub q: Option<String>,
}

/// Strategic variant request body
#[derive(Debug, Deserialize)]
pub struct VariantRequest {
    #[serde(default)]
    pub audience: String,
}

/// Application info
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub version: &'static str,
    pub strategy_goal: &'static str,
    pub build_date: &'static str,
    pub template_count: usize,
    pub category_count: usize,
    pub audience_count: usize,

    /// Items per real category
    pub categories: Vec<CategoryCount>,

    /// Categories dropped for lack of an archetype
    pub skipped_categories: Vec<&'static str>,
    pub consultant: String,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: &'static [CategoryDescriptor],
}

#[derive(Debug, Serialize)]
pub struct AudiencesResponse {
    pub audiences: Vec<&'static str>,
    pub strategies: &'static [AudienceStrategy],
}

/// Template search result
#[derive(Debug, Serialize)]
pub struct TemplateSearchResponse {
    pub results: Vec<&'static CatalogItem>,
    pub count: usize,
    pub category: String,
    pub query: String,
}

/// Auto prompt for one template
#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub id: u32,
    pub prompt: String,
}

/// Strategic variant for one template
#[derive(Debug, Serialize)]
pub struct VariantResponse {
    pub id: u32,
    pub audience: String,
    pub fallback: bool,
    pub plan: StrategicPlan,
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GuideResponse {
    pub guide: String,
}
