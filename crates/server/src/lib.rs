//! Slide300 HTTP Server
//!
//! Actix-web 기반 템플릿 카탈로그 / 프롬프트 REST API

pub mod error;
pub mod routes;
pub mod state;
pub mod types;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use slide300_catalog::{catalog_stats, validate_registry, ARCHETYPES, CATEGORIES};
use slide300_common::{AppConfig, Result, ANY_ORIGIN};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

pub use error::ApiError;
pub use state::AppState;

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::system::info)
        .service(routes::system::categories)
        .service(routes::system::audiences)
        .service(routes::system::guide)
        .service(routes::catalog::search_templates)
        .service(routes::prompt::auto_prompt)
        .service(routes::prompt::strategic_variant)
        .service(routes::catalog::get_template);
}

fn build_cors(allowed_origin: Option<&str>) -> Cors {
    match allowed_origin {
        None | Some(ANY_ORIGIN) => Cors::permissive(),
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600),
    }
}

/// Validate the registries, build the catalog and serve until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    config.validate()?;

    let report = validate_registry(CATEGORIES, ARCHETYPES)?;
    if !report.is_clean() {
        warn!(
            "Registry has gaps - missing: {:?}, orphan: {:?}",
            report.missing_archetypes, report.orphan_archetypes
        );
    }

    let stats = catalog_stats();
    info!(
        "Catalog ready: {} templates in {} categories",
        stats.total_items,
        stats.categories.len()
    );

    let bind_address = config.server_bind_address();
    let allowed_origin = config.allowed_origin.clone();
    let state = Arc::new(AppState::new(config));

    info!(
        "Starting server on http://{} (consultant: {})",
        bind_address,
        state.consultant.name()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(allowed_origin.as_deref()))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(configure)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, test};

    #[actix_web::test]
    async fn test_wildcard_origin_is_permissive() {
        let app = test::init_service(App::new().wrap(build_cors(Some("*"))).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/audiences")
            .insert_header((header::ORIGIN, "http://anywhere.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn test_single_origin() {
        let app = test::init_service(
            App::new()
                .wrap(build_cors(Some("http://localhost:3000")))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/audiences")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
    }

    #[actix_web::test]
    async fn test_start_server_rejects_invalid_origin() {
        let config = AppConfig {
            allowed_origin: Some("not an origin".to_string()),
            ..AppConfig::default()
        };

        let err = start_server(config).await.unwrap_err();
        assert_eq!(err.error_code(), "CONFIG");
    }
}
