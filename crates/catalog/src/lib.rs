//! Slide300 Template Catalog
//!
//! 디자인 아키타입 레지스트리, 청중 전략 테이블, 카탈로그 확장 및 검색

pub mod audience;
pub mod color;
pub mod expander;
pub mod query;
pub mod registry;
pub mod store;
pub mod types;
pub mod validation;

pub use audience::{
    StrategyTable, AUDIENCE_STRATEGIES, DEFAULT_STRATEGY, EXECUTIVE_AUDIENCE,
    EXECUTIVE_OVERRIDE, GENERAL_PUBLIC_AUDIENCE, GENERAL_PUBLIC_OVERRIDE,
};
pub use color::{adjust_color, is_dark_background, is_valid_hex_color};
pub use expander::build_catalog;
pub use query::query;
pub use registry::{fonts, ALL_CATEGORY, APP_VERSION, ARCHETYPES, BUILD_DATE, CATEGORIES, STRATEGY_GOAL};
pub use store::{
    catalog, catalog_stats, find_item, list_audiences, list_categories, query_catalog, CatalogStats,
    CategoryCount,
};
pub use types::{AudienceStrategy, CatalogItem, CategoryDescriptor, CategoryFilter, ColorOverride, DesignArchetype};
pub use validation::{validate_registry, RegistryReport};
