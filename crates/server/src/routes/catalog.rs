use actix_web::{get, web, HttpResponse};
use slide300_catalog::{find_item, query_catalog, CatalogItem, CategoryFilter, ALL_CATEGORY};
use slide300_common::Slide300Error;
use tracing::info;

use crate::error::ApiError;
use crate::types::{TemplateQuery, TemplateSearchResponse};

/// Resolve a template id or fail with 404
pub(crate) fn lookup(id: u32) -> Result<&'static CatalogItem, ApiError> {
    find_item(id).ok_or_else(|| ApiError(Slide300Error::not_found(format!("템플릿 #{}", id))))
}

/// Search templates by category and term
#[get("/templates")]
pub async fn search_templates(query: web::Query<TemplateQuery>) -> actix_web::Result<HttpResponse> {
    let query = query.into_inner();
    let filter = CategoryFilter::parse(query.category.as_deref().unwrap_or_default());
    let term = query.q.unwrap_or_default();

    let results = query_catalog(&filter, &term);

    let category = match &filter {
        CategoryFilter::All => ALL_CATEGORY.to_string(),
        CategoryFilter::Named(name) => name.clone(),
    };

    info!(
        "Template search - category: {}, query: '{}', results: {}",
        category,
        term,
        results.len()
    );

    Ok(HttpResponse::Ok().json(TemplateSearchResponse {
        count: results.len(),
        results,
        category,
        query: term,
    }))
}

/// Get one template
#[get("/templates/{id}")]
pub async fn get_template(path: web::Path<u32>) -> Result<HttpResponse, ApiError> {
    let item = lookup(path.into_inner())?;
    Ok(HttpResponse::Ok().json(item))
}
