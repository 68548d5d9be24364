//! Startup checks for the static registries

use serde::Serialize;
use slide300_common::{Result, Slide300Error};
use tracing::{info, warn};

use crate::audience::{EXECUTIVE_OVERRIDE, GENERAL_PUBLIC_OVERRIDE};
use crate::color::is_valid_hex_color;
use crate::registry::{find_archetype, real_categories};
use crate::types::{CategoryDescriptor, ColorOverride, DesignArchetype};

/// Non-fatal findings from [`validate_registry`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistryReport {
    /// Categories without an archetype (skipped when expanding)
    pub missing_archetypes: Vec<String>,

    /// Archetypes whose category is not declared
    pub orphan_archetypes: Vec<String>,
}

impl RegistryReport {
    pub fn is_clean(&self) -> bool {
        self.missing_archetypes.is_empty() && self.orphan_archetypes.is_empty()
    }
}

/// Validate registry colors and category/archetype coverage
///
/// A color outside `#RRGGBB` fails fast with `MalformedColor`. Coverage
/// problems are configuration gaps: they are logged and returned in the report.
pub fn validate_registry(
    categories: &[CategoryDescriptor],
    archetypes: &[DesignArchetype],
) -> Result<RegistryReport> {
    for archetype in archetypes {
        check_color(archetype.category, "background_color", archetype.background_color)?;
        check_color(archetype.category, "text_color", archetype.text_color)?;
        check_color(archetype.category, "accent_color", archetype.accent_color)?;
    }

    for (name, colors) in [
        ("executive_override", EXECUTIVE_OVERRIDE),
        ("general_public_override", GENERAL_PUBLIC_OVERRIDE),
    ] {
        check_override(name, &colors)?;
    }

    let mut report = RegistryReport::default();

    for category in real_categories(categories) {
        if find_archetype(archetypes, category.name).is_none() {
            warn!("{}", Slide300Error::configuration_gap(category.name));
            report.missing_archetypes.push(category.name.to_string());
        }
    }

    for archetype in archetypes {
        let declared = real_categories(categories).any(|c| c.name == archetype.category);
        if !declared {
            warn!("Archetype '{}' has no declared category", archetype.category);
            report.orphan_archetypes.push(archetype.category.to_string());
        }
    }

    info!(
        "Registry validated - {} categories, {} archetypes, {} gaps",
        real_categories(categories).count(),
        archetypes.len(),
        report.missing_archetypes.len()
    );

    Ok(report)
}

fn check_override(name: &str, colors: &ColorOverride) -> Result<()> {
    check_color(name, "background_color", colors.background_color)?;
    check_color(name, "text_color", colors.text_color)
}

fn check_color(owner: &str, field: &str, value: &str) -> Result<()> {
    if is_valid_hex_color(value) {
        Ok(())
    } else {
        Err(Slide300Error::malformed_color(format!("{}.{}", owner, field), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ARCHETYPES, CATEGORIES};

    const BROKEN: DesignArchetype = DesignArchetype {
        category: "샘플",
        style_name: "샘플",
        background_color: "#fff",
        text_color: "#000000",
        accent_color: "#000000",
        font_family: "Inter",
        mood: "",
        features: &[],
        texture: "",
        layout: "",
        narrative: "",
    };

    #[test]
    fn test_builtin_registry_is_clean() {
        let report = validate_registry(CATEGORIES, ARCHETYPES).unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_malformed_color_fails_fast() {
        let categories = [CategoryDescriptor { name: "샘플", item_count: 1, icon: "*" }];
        let err = validate_registry(&categories, &[BROKEN]).unwrap_err();
        match err {
            Slide300Error::MalformedColor { field, value } => {
                assert_eq!(field, "샘플.background_color");
                assert_eq!(value, "#fff");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_gaps_are_reported() {
        let categories = [
            CategoryDescriptor { name: "강의교안", item_count: 1, icon: "*" },
            CategoryDescriptor { name: "없는 카테고리", item_count: 1, icon: "*" },
        ];
        let report = validate_registry(&categories, &ARCHETYPES[..2]).unwrap();
        assert_eq!(report.missing_archetypes, vec!["없는 카테고리"]);
        assert_eq!(report.orphan_archetypes, vec!["비즈니스"]);
        assert!(!report.is_clean());
    }
}
