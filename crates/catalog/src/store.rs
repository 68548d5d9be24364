//! Process-wide catalog, built once on first access

use serde::Serialize;
use std::sync::LazyLock;

use crate::audience::StrategyTable;
use crate::expander::build_catalog;
use crate::query::query;
use crate::registry::{find_archetype, real_categories, ARCHETYPES, CATEGORIES};
use crate::types::{CatalogItem, CategoryDescriptor, CategoryFilter};

static CATALOG: LazyLock<Vec<CatalogItem>> = LazyLock::new(|| {
    tracing::info!("Building template catalog");
    build_catalog(CATEGORIES, ARCHETYPES)
});

/// The full catalog (read-only, built on first call)
pub fn catalog() -> &'static [CatalogItem] {
    &CATALOG
}

/// Look up one item by id
pub fn find_item(id: u32) -> Option<&'static CatalogItem> {
    // ids are 1-based and gapless
    let index = usize::try_from(id).ok()?.checked_sub(1)?;
    catalog().get(index).filter(|item| item.id == id)
}

/// Query the process-wide catalog
pub fn query_catalog(filter: &CategoryFilter, search_term: &str) -> Vec<&'static CatalogItem> {
    query(catalog(), filter, search_term)
}

/// All navigation categories, aggregate included
pub fn list_categories() -> &'static [CategoryDescriptor] {
    CATEGORIES
}

/// Built-in audience labels in menu order
pub fn list_audiences() -> Vec<&'static str> {
    StrategyTable::builtin().labels()
}

/// Per-category item count
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub name: &'static str,
    pub icon: &'static str,
    pub count: usize,
}

/// Catalog summary
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total_items: usize,
    pub categories: Vec<CategoryCount>,
    pub skipped_categories: Vec<&'static str>,
}

/// Summarize the process-wide catalog
pub fn catalog_stats() -> CatalogStats {
    let items = catalog();

    let categories = real_categories(CATEGORIES)
        .map(|c| CategoryCount {
            name: c.name,
            icon: c.icon,
            count: items.iter().filter(|item| item.category == c.name).count(),
        })
        .collect();

    let skipped_categories = real_categories(CATEGORIES)
        .filter(|c| find_archetype(ARCHETYPES, c.name).is_none())
        .map(|c| c.name)
        .collect();

    CatalogStats {
        total_items: items.len(),
        categories,
        skipped_categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_catalog_is_cached() {
        let first = catalog();
        let second = catalog();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), 330);
    }

    #[test]
    fn test_concurrent_access_sees_full_catalog() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| catalog().len()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 330);
        }
    }

    #[test]
    fn test_find_item() {
        let item = find_item(16).unwrap();
        assert_eq!(item.id, 16);
        assert_eq!(item.category, "건강/웰빙");
        assert_eq!(item.style_label, "마인드풀 젠 Set-1");

        assert!(find_item(0).is_none());
        assert!(find_item(331).is_none());
    }

    #[test]
    fn test_list_accessors() {
        assert_eq!(list_categories().len(), 23);
        assert_eq!(list_audiences().len(), 5);
    }

    #[test]
    fn test_stats() {
        let stats = catalog_stats();
        assert_eq!(stats.total_items, 330);
        assert_eq!(stats.categories.len(), 22);
        assert!(stats.categories.iter().all(|c| c.count == 15));
        assert!(stats.skipped_categories.is_empty());
    }

    #[test]
    fn test_query_catalog_returns_static_refs() {
        let results = query_catalog(&CategoryFilter::parse("심플"), "");
        assert_eq!(results.len(), 15);
        assert_eq!(results[0].style_label, "미니멀 젠 Set-1");
    }
}
