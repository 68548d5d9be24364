//! Audience strategy table

use crate::types::{AudienceStrategy, ColorOverride};

/// Executive persona: prefers conclusion-first, deep-toned slides
pub const EXECUTIVE_AUDIENCE: &str = "CEO/임원진";

/// General-public persona: prefers warm, light slides
pub const GENERAL_PUBLIC_AUDIENCE: &str = "대중/고객";

/// Dark background imposed for executives ("add gravity")
pub const EXECUTIVE_OVERRIDE: ColorOverride = ColorOverride {
    background_color: "#0a0c10",
    text_color: "#ffffff",
};

/// Light background imposed for the general public ("add warmth")
pub const GENERAL_PUBLIC_OVERRIDE: ColorOverride = ColorOverride {
    background_color: "#ffffff",
    text_color: "#1a1a1a",
};

/// Strategy used for labels missing from the table
pub const DEFAULT_STRATEGY: AudienceStrategy = AudienceStrategy {
    label: "표준",
    logic_style: "표준 논리",
    layout_keywords: "Balanced Standard Layout",
    color_strategy: "Standard",
    persuasion_summary: "명확한 정보 전달",
};

/// Built-in strategies in selection-menu order
pub const AUDIENCE_STRATEGIES: &[AudienceStrategy] = &[
    AudienceStrategy {
        label: EXECUTIVE_AUDIENCE,
        logic_style: "두괄식 (Conclusion First)",
        layout_keywords: "Executive Summary Layout, Minimal Text, Key Metrics Highlight",
        color_strategy: "Authority (Deep Tone)",
        persuasion_summary: "ROI 및 결론 우선 제시",
    },
    AudienceStrategy {
        label: "투자자/VC",
        logic_style: "성장/수익 중심 (Growth Focused)",
        layout_keywords: "J-Curve Graph Focus, Big Number Typography, Exit Strategy Flow",
        color_strategy: "Trust & Profit (Blue/Green Accent)",
        persuasion_summary: "시장 기회와 수익성 증명",
    },
    AudienceStrategy {
        label: "실무자/팀원",
        logic_style: "How-To 중심 (Action Plan)",
        layout_keywords: "Step-by-Step Workflow, Checklist, Timeline View",
        color_strategy: "Energy & Action (Vivid)",
        persuasion_summary: "구체적 실행 방안 제시",
    },
    AudienceStrategy {
        label: GENERAL_PUBLIC_AUDIENCE,
        logic_style: "감성 스토리텔링 (Empathy)",
        layout_keywords: "Full Screen Image, Emotional Copy, Card News Style",
        color_strategy: "Warm & Friendly",
        persuasion_summary: "공감대 형성 후 솔루션 제시",
    },
    AudienceStrategy {
        label: "학생/교육생",
        logic_style: "학습/이해 중심 (Educational)",
        layout_keywords: "Concept Diagram, Quiz Layout, Bullet Points",
        color_strategy: "Focus & Clear (High Contrast)",
        persuasion_summary: "쉬운 설명과 개념 정립",
    },
];

/// Read-only view over a set of audience strategies
#[derive(Debug, Clone, Copy)]
pub struct StrategyTable<'a> {
    entries: &'a [AudienceStrategy],
}

impl<'a> StrategyTable<'a> {
    /// Wrap an arbitrary strategy slice
    pub fn new(entries: &'a [AudienceStrategy]) -> Self {
        Self { entries }
    }

    /// Exact-label lookup
    pub fn lookup(&self, label: &str) -> Option<&'a AudienceStrategy> {
        self.entries.iter().find(|s| s.label == label)
    }

    /// Lookup with [`DEFAULT_STRATEGY`] fallback; the flag is true on fallback
    pub fn resolve(&self, label: &str) -> (&'a AudienceStrategy, bool) {
        match self.lookup(label) {
            Some(strategy) => (strategy, false),
            None => (&DEFAULT_STRATEGY, true),
        }
    }

    /// Audience labels in declaration order
    pub fn labels(&self) -> Vec<&'a str> {
        self.entries.iter().map(|s| s.label).collect()
    }

    /// Full strategy records in declaration order
    pub fn entries(&self) -> &'a [AudienceStrategy] {
        self.entries
    }
}

impl StrategyTable<'static> {
    /// The built-in table
    pub fn builtin() -> Self {
        Self::new(AUDIENCE_STRATEGIES)
    }
}

impl Default for StrategyTable<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_labels_in_order() {
        let table = StrategyTable::builtin();
        assert_eq!(
            table.labels(),
            vec![EXECUTIVE_AUDIENCE, "투자자/VC", "실무자/팀원", GENERAL_PUBLIC_AUDIENCE, "학생/교육생"]
        );
    }

    #[test]
    fn test_resolve_known_label() {
        let table = StrategyTable::builtin();
        let (strategy, fallback) = table.resolve("투자자/VC");
        assert!(!fallback);
        assert_eq!(strategy.color_strategy, "Trust & Profit (Blue/Green Accent)");
    }

    #[test]
    fn test_resolve_unknown_label_falls_back() {
        let table = StrategyTable::builtin();
        let (strategy, fallback) = table.resolve("not-a-real-audience");
        assert!(fallback);
        assert_eq!(*strategy, DEFAULT_STRATEGY);
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = StrategyTable::builtin();
        assert!(table.lookup("ceo/임원진").is_none());
        assert!(table.lookup(" CEO/임원진").is_none());
    }

    #[test]
    fn test_entries_match_labels() {
        let table = StrategyTable::builtin();
        let labels: Vec<_> = table.entries().iter().map(|s| s.label).collect();
        assert_eq!(labels, table.labels());
        assert_eq!(table.entries().len(), AUDIENCE_STRATEGIES.len());
    }
}
