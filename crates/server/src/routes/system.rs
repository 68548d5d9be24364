use actix_web::{get, web, HttpResponse};
use slide300_catalog::{
    catalog_stats, list_audiences, list_categories, StrategyTable, APP_VERSION, BUILD_DATE, STRATEGY_GOAL,
};
use slide300_prompt::render_guide;
use std::sync::Arc;
use tracing::debug;

use crate::state::AppState;
use crate::types::{AudiencesResponse, CategoriesResponse, GuideResponse, InfoResponse};

/// Application info
#[get("/info")]
pub async fn info(state: web::Data<Arc<AppState>>) -> actix_web::Result<HttpResponse> {
    debug!("Info requested");

    let stats = catalog_stats();

    Ok(HttpResponse::Ok().json(InfoResponse {
        version: APP_VERSION,
        strategy_goal: STRATEGY_GOAL,
        build_date: BUILD_DATE,
        template_count: stats.total_items,
        category_count: stats.categories.len(),
        audience_count: list_audiences().len(),
        categories: stats.categories,
        skipped_categories: stats.skipped_categories,
        consultant: state.consultant.name().to_string(),
        started_at: state.started_at,
    }))
}

#[get("/categories")]
pub async fn categories() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(CategoriesResponse {
        categories: list_categories(),
    }))
}

#[get("/audiences")]
pub async fn audiences() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(AudiencesResponse {
        audiences: list_audiences(),
        strategies: StrategyTable::builtin().entries(),
    }))
}

/// Workflow guide
#[get("/guide")]
pub async fn guide() -> actix_web::Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(GuideResponse {
        guide: render_guide(),
    }))
}
