use serde::Serialize;

/// Category shown in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDescriptor {
    /// Unique category name
    pub name: &'static str,

    /// Number of catalog items derived for this category
    pub item_count: usize,

    /// Icon shown next to the name
    pub icon: &'static str,
}

/// Canonical design definition for one category, before per-item variation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DesignArchetype {
    /// Owning category name
    pub category: &'static str,

    /// Style name used as the label prefix
    pub style_name: &'static str,

    /// Background color (#RRGGBB)
    pub background_color: &'static str,

    /// Text color (#RRGGBB)
    pub text_color: &'static str,

    /// Accent color (#RRGGBB)
    pub accent_color: &'static str,

    /// Title font family
    pub font_family: &'static str,

    /// Mood keywords
    pub mood: &'static str,

    /// Key features, in display order
    pub features: &'static [&'static str],

    /// Surface texture
    pub texture: &'static str,

    /// Layout strategy
    pub layout: &'static str,

    /// Brand narrative
    pub narrative: &'static str,
}

/// One concrete, numbered design entry derived from an archetype
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    /// 1-based id, unique across the catalog
    pub id: u32,

    /// Category name
    pub category: String,

    /// Style name with set suffix (e.g. "TED 임팩트 Set-1")
    pub style_label: String,

    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
    pub font_family: String,
    pub mood: String,

    /// Archetype features plus one variation point
    pub features: Vec<String>,

    pub texture: String,

    /// Layout with option suffix (e.g. "중앙 핵심 문구 집중형 (Option-1)")
    pub layout_label: String,

    pub narrative: String,
}

/// Persuasion strategy for a target audience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AudienceStrategy {
    /// Audience label (lookup key)
    pub label: &'static str,

    /// How the story is ordered
    pub logic_style: &'static str,

    /// Layout keywords for the variant
    pub layout_keywords: &'static str,

    /// Color tone strategy
    pub color_strategy: &'static str,

    /// One-line persuasion summary
    pub persuasion_summary: &'static str,
}

/// Background/text pair imposed by an audience strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorOverride {
    pub background_color: &'static str,
    pub text_color: &'static str,
}

/// Category predicate for catalog queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Match every category
    #[default]
    All,

    /// Exact, case-sensitive category name
    Named(String),
}

impl CategoryFilter {
    /// Parse a filter from user input
    ///
    /// The aggregate category name, `all` (any case) and the empty string all
    /// select every category. Anything else is taken as an exact name.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty()
            || value == crate::registry::ALL_CATEGORY
            || value.eq_ignore_ascii_case("all")
        {
            Self::All
        } else {
            Self::Named(value.to_string())
        }
    }

    /// Check whether an item's category passes this filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == category,
        }
    }
}
