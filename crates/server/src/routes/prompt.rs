use actix_web::{get, post, web, HttpResponse};
use slide300_prompt::{render_auto_prompt, require_audience};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::routes::catalog::lookup;
use crate::state::AppState;
use crate::types::{PromptResponse, VariantRequest, VariantResponse};

/// Auto prompt for one template
#[get("/templates/{id}/prompt")]
pub async fn auto_prompt(path: web::Path<u32>) -> Result<HttpResponse, ApiError> {
    let item = lookup(path.into_inner())?;

    Ok(HttpResponse::Ok().json(PromptResponse {
        id: item.id,
        prompt: render_auto_prompt(Some(item)),
    }))
}

/// Strategic variant for one template and audience
#[post("/templates/{id}/variant")]
pub async fn strategic_variant(
    path: web::Path<u32>,
    req: web::Json<VariantRequest>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, ApiError> {
    let item = lookup(path.into_inner())?;
    let audience = require_audience(&req.audience)?.to_string();

    info!("Strategic variant requested - item: {}, audience: {}", item.id, audience);

    let variant = state.consultant.consult(item, &audience).await?;

    Ok(HttpResponse::Ok().json(VariantResponse {
        id: variant.item_id,
        audience,
        fallback: variant.is_fallback(),
        plan: variant.plan,
        prompt: variant.prompt,
    }))
}
