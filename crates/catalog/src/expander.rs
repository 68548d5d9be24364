use tracing::{debug, warn};

use crate::color::adjust_color;
use crate::registry::{find_archetype, real_categories};
use crate::types::{CatalogItem, CategoryDescriptor, DesignArchetype};

/// Background shift applied to odd-indexed items
const BACKGROUND_SHIFT: i32 = -10;

/// Accent shift applied to items whose index is not a multiple of 3
const ACCENT_SHIFT: i32 = 20;

/// Expand category archetypes into the numbered catalog
///
/// The aggregate category is skipped. A category without an archetype is a
/// configuration gap: it is logged and produces no items. Ids come from one
/// counter shared across categories, in declaration order then index order.
pub fn build_catalog(
    categories: &[CategoryDescriptor],
    archetypes: &[DesignArchetype],
) -> Vec<CatalogItem> {
    let mut items = Vec::new();
    let mut next_id: u32 = 1;

    for category in real_categories(categories) {
        let Some(archetype) = find_archetype(archetypes, category.name) else {
            warn!("Configuration gap: no archetype for category '{}', skipping", category.name);
            continue;
        };

        for index in 0..category.item_count {
            items.push(expand_item(next_id, category.name, archetype, index));
            next_id += 1;
        }
    }

    items.sort_by_key(|item| item.id);
    debug!("Catalog built - {} items", items.len());

    items
}

/// Derive the `index`-th (0-based) variant of an archetype
fn expand_item(id: u32, category: &str, archetype: &DesignArchetype, index: usize) -> CatalogItem {
    let ordinal = index + 1;

    let background_color = if index % 2 == 0 {
        archetype.background_color.to_string()
    } else {
        adjust_color(archetype.background_color, BACKGROUND_SHIFT)
    };

    let accent_color = if index % 3 == 0 {
        archetype.accent_color.to_string()
    } else {
        adjust_color(archetype.accent_color, ACCENT_SHIFT)
    };

    let mut features: Vec<String> = archetype.features.iter().map(|f| f.to_string()).collect();
    features.push(format!("변주 포인트 #{}", ordinal));

    CatalogItem {
        id,
        category: category.to_string(),
        style_label: format!("{} Set-{}", archetype.style_name, ordinal),
        background_color,
        text_color: archetype.text_color.to_string(),
        accent_color,
        font_family: archetype.font_family.to_string(),
        mood: archetype.mood.to_string(),
        features,
        texture: archetype.texture.to_string(),
        layout_label: format!("{} (Option-{})", archetype.layout, ordinal),
        narrative: archetype.narrative.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::is_valid_hex_color;
    use crate::registry::{ALL_CATEGORY, ARCHETYPES, CATEGORIES};
    use std::collections::HashSet;

    const SAMPLE: DesignArchetype = DesignArchetype {
        category: "샘플",
        style_name: "샘플 스타일",
        background_color: "#f5f5f7",
        text_color: "#1d1d1f",
        accent_color: "#2997ff",
        font_family: "Pretendard",
        mood: "평온함",
        features: &["극단적 여백"],
        texture: "매트 화이트",
        layout: "좌측 하단 집중",
        narrative: "본질에 집중합니다.",
    };

    #[test]
    fn test_catalog_size_matches_declared_counts() {
        let catalog = build_catalog(CATEGORIES, ARCHETYPES);
        let expected: usize = real_categories(CATEGORIES).map(|c| c.item_count).sum();
        assert_eq!(catalog.len(), expected);
        assert_eq!(catalog.len(), 330);
    }

    #[test]
    fn test_ids_are_contiguous() {
        let catalog = build_catalog(CATEGORIES, ARCHETYPES);
        for (position, item) in catalog.iter().enumerate() {
            assert_eq!(item.id as usize, position + 1);
        }
    }

    #[test]
    fn test_categories_follow_declaration_order() {
        let catalog = build_catalog(CATEGORIES, ARCHETYPES);
        assert_eq!(catalog[0].category, "강의교안");
        assert_eq!(catalog[14].category, "강의교안");
        assert_eq!(catalog[15].category, "건강/웰빙");
        assert_eq!(catalog[329].category, "학술/과학");

        let names: HashSet<&str> = real_categories(CATEGORIES).map(|c| c.name).collect();
        assert!(catalog.iter().all(|item| names.contains(item.category.as_str())));
        assert!(catalog.iter().all(|item| item.category != ALL_CATEGORY));
    }

    #[test]
    fn test_all_colors_valid() {
        let catalog = build_catalog(CATEGORIES, ARCHETYPES);
        for item in &catalog {
            assert!(is_valid_hex_color(&item.background_color), "{}", item.background_color);
            assert!(is_valid_hex_color(&item.text_color), "{}", item.text_color);
            assert!(is_valid_hex_color(&item.accent_color), "{}", item.accent_color);
        }
    }

    #[test]
    fn test_variation_rules() {
        let categories = [CategoryDescriptor { name: "샘플", item_count: 4, icon: "*" }];
        let catalog = build_catalog(&categories, &[SAMPLE]);
        assert_eq!(catalog.len(), 4);

        // index 0: untouched
        assert_eq!(catalog[0].background_color, "#f5f5f7");
        assert_eq!(catalog[0].accent_color, "#2997ff");
        // index 1: darker background, brighter accent
        assert_eq!(catalog[1].background_color, "#ebebed");
        assert_eq!(catalog[1].accent_color, "#3dabff");
        // index 2: original background, brighter accent
        assert_eq!(catalog[2].background_color, "#f5f5f7");
        assert_eq!(catalog[2].accent_color, "#3dabff");
        // index 3: darker background, original accent
        assert_eq!(catalog[3].background_color, "#ebebed");
        assert_eq!(catalog[3].accent_color, "#2997ff");

        assert!(catalog.iter().all(|item| item.text_color == "#1d1d1f"));
    }

    #[test]
    fn test_labels_and_features() {
        let categories = [CategoryDescriptor { name: "샘플", item_count: 2, icon: "*" }];
        let catalog = build_catalog(&categories, &[SAMPLE]);

        assert_eq!(catalog[1].style_label, "샘플 스타일 Set-2");
        assert_eq!(catalog[1].layout_label, "좌측 하단 집중 (Option-2)");
        assert_eq!(catalog[1].features, vec!["극단적 여백", "변주 포인트 #2"]);
    }

    #[test]
    fn test_missing_archetype_is_skipped() {
        let categories = [
            CategoryDescriptor { name: ALL_CATEGORY, item_count: 9, icon: "*" },
            CategoryDescriptor { name: "없는 카테고리", item_count: 5, icon: "*" },
            CategoryDescriptor { name: "샘플", item_count: 3, icon: "*" },
        ];
        let catalog = build_catalog(&categories, &[SAMPLE]);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_build_is_reproducible() {
        assert_eq!(build_catalog(CATEGORIES, ARCHETYPES), build_catalog(CATEGORIES, ARCHETYPES));
    }
}
