use crate::types::{CatalogItem, CategoryFilter};

/// Filter the catalog by category and free-text search term
///
/// The term is trimmed and lower-cased; an empty term matches everything.
/// A term matches when it is a substring of the style label, category, mood
/// or narrative, or when it equals the item id exactly. Catalog order is kept.
pub fn query<'a>(
    catalog: &'a [CatalogItem],
    filter: &CategoryFilter,
    search_term: &str,
) -> Vec<&'a CatalogItem> {
    let term = normalize_term(search_term);

    catalog
        .iter()
        .filter(|item| filter.matches(&item.category) && matches_term(item, &term))
        .collect()
}

/// Trim and case-fold a search term
pub fn normalize_term(search_term: &str) -> String {
    search_term.trim().to_lowercase()
}

/// Check a single item against an already-normalized term
pub fn matches_term(item: &CatalogItem, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    [&item.style_label, &item.category, &item.mood, &item.narrative]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
        || item.id.to_string() == term
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expander::build_catalog;
    use crate::registry::{ARCHETYPES, CATEGORIES};

    fn catalog() -> Vec<CatalogItem> {
        build_catalog(CATEGORIES, ARCHETYPES)
    }

    #[test]
    fn test_all_with_empty_term_returns_everything() {
        let catalog = catalog();
        let results = query(&catalog, &CategoryFilter::All, "");
        assert_eq!(results.len(), catalog.len());
        assert!(results.iter().zip(catalog.iter()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_whitespace_term_is_empty() {
        let catalog = catalog();
        assert_eq!(query(&catalog, &CategoryFilter::All, "   ").len(), catalog.len());
    }

    #[test]
    fn test_category_filter() {
        let catalog = catalog();
        let results = query(&catalog, &CategoryFilter::Named("럭셔리".to_string()), "");
        assert_eq!(results.len(), 15);
        assert!(results.iter().all(|item| item.category == "럭셔리"));
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let catalog = catalog();
        let results = query(&catalog, &CategoryFilter::Named("없음".to_string()), "");
        assert!(results.is_empty());
    }

    #[test]
    fn test_id_is_exact_match() {
        let catalog = catalog();
        // ids 142 and 242 contain "42" but must not match
        let results = query(&catalog, &CategoryFilter::All, "42");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 42);

        let results = query(&catalog, &CategoryFilter::All, " 330 ");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 330);
    }

    #[test]
    fn test_numeric_term_also_hits_set_labels() {
        let catalog = catalog();
        // "12" is a substring of every "Set-12" label; id 12 is one of them
        let results = query(&catalog, &CategoryFilter::All, "12");
        assert_eq!(results.len(), 22);
        assert!(results.iter().all(|item| item.style_label.ends_with("Set-12")));
        assert!(results.iter().any(|item| item.id == 12));
    }

    #[test]
    fn test_term_is_case_insensitive() {
        let catalog = catalog();
        let upper = query(&catalog, &CategoryFilter::All, "TED");
        let lower = query(&catalog, &CategoryFilter::All, "ted");
        assert_eq!(upper.len(), lower.len());
        // TED 임팩트 style plus the narrative mention
        assert!(upper.iter().any(|item| item.category == "강의교안"));
    }

    #[test]
    fn test_term_matches_mood_and_narrative() {
        let catalog = catalog();
        let by_mood = query(&catalog, &CategoryFilter::All, "사이버펑크");
        assert_eq!(by_mood.len(), 15);
        assert!(by_mood.iter().all(|item| item.category == "공상과학/SF"));

        let by_narrative = query(&catalog, &CategoryFilter::All, "mckinsey");
        assert_eq!(by_narrative.len(), 15);
        assert!(by_narrative.iter().all(|item| item.category == "비즈니스"));
    }

    #[test]
    fn test_category_and_term_combine() {
        let catalog = catalog();
        let results = query(&catalog, &CategoryFilter::Named("비즈니스".to_string()), "set-1");
        // Set-1, Set-10 .. Set-15
        assert_eq!(results.len(), 7);
        assert!(results.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_features_and_texture_are_not_searched() {
        let catalog = catalog();
        assert!(query(&catalog, &CategoryFilter::All, "워터폴 차트").is_empty());
        assert!(query(&catalog, &CategoryFilter::All, "변주 포인트").is_empty());
    }
}
