//! Prompt templates for slide generation
//!
//! Both documents are a fixed-layout text contract consumed by an image
//! generation model. Section order and headings must stay stable.

use slide300_catalog::{fonts, CatalogItem, APP_VERSION, BUILD_DATE};

use crate::strategy::StrategicPlan;

/// Auto prompt for a catalog item (empty string when no item is selected)
pub fn render_auto_prompt(item: Option<&CatalogItem>) -> String {
    let Some(item) = item else {
        return String::new();
    };

    let features = item
        .features
        .iter()
        .map(|f| format!("• {}", f))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"╔════════════════════════════════════════════════════════════════╗
║  AUTO SLIDE PROMPT - Ready to Use Template                    ║
║  Pre-designed Professional System                             ║
╚════════════════════════════════════════════════════════════════╝

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

■ Template Information
• ID: {id}
• Category: {category}
• Style Name: {style_label}
• Verified Design System: Production-Ready

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

[Design Specification]

■ Color System
┌────────────────────────────────────────────────────────────┐
│ • Background: {background}
│ • Text: {text}
│ • Accent: {accent}
│ • Brand Logic: {mood}
└────────────────────────────────────────────────────────────┘

■ Typography
┌────────────────────────────────────────────────────────────┐
│ • Title Font (English): {font}
│ • Body Font (Korean): {body_font} Bold
│ • Font Weight: Bold to Heavy (700-900)
│ • Font Style: Clean, modern sans-serif preferred
└────────────────────────────────────────────────────────────┘

■ Key Features
{features}

■ Visual Guide
• Texture: {texture}
• Layout Strategy: {layout}

■ Brand Narrative
"{narrative}"

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

[나노 바나나 프로 4K 렌더링 최적화]

⚠️ MANDATORY REQUIREMENTS:

1. Resolution Settings
   • **4K High Resolution (3840×2160) - REQUIRED**
   • Low resolution (1K, 2K) will cause Korean text artifacts

2. Korean Font Strategy
   • Korean Body Text: **{body_font} Bold** (FIXED)
   • English Title: **{font}** (Style-specific)
   • Font Style: **Clean, bold sans-serif / Modern Gothic typography**
   • FORBIDDEN: Serif, brush, decorative fonts (cause rendering noise)

3. Complex Korean Character Handling
   • For complex characters (붇, 짇, 뛿, 쐐):
     - Font Weight: **Heavy weight (Bold or heavier)**
     - Letter Spacing: **Minimum 0.05em**
     - Stroke Spacing: **Minimum 2px**

4. Structural Stability
   • Consider **Positional Semantics** to prevent character separation
   • Ensure 초성/중성/종성 are recognized as single block
   • Provide sufficient text area padding (minimum 20%)

5. Verified Font List (Options)
   • Core 7: {core_fonts}
   • Verified 5: {verified_fonts}

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

[Rendering Checklist]
□ 4K resolution configured
□ {body_font} Bold applied for Korean
□ Gothic-style font used (no serif/decorative)
□ Complex Korean characters tested (붇, 짇, 뛿)
□ Letter/stroke spacing sufficient

Follow this guide to ensure Korean text renders clearly without artifacts in Nano Banana Pro.

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

[Designer Credit]
Creative Direction by AiDreamU | 시니어토킹TV

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

Template Version: {version}
System: Nano Banana Pro Hangul 4K Optimized
Date: {build_date}

╚════════════════════════════════════════════════════════════╝"#,
        id = item.id,
        category = item.category,
        style_label = item.style_label,
        background = item.background_color,
        text = item.text_color,
        accent = item.accent_color,
        mood = item.mood,
        font = item.font_family,
        body_font = fonts::HANGUL_BODY_FONT,
        features = features,
        texture = item.texture,
        layout = item.layout_label,
        narrative = item.narrative,
        core_fonts = fonts::CORE_FONTS.join(", "),
        verified_fonts = fonts::VERIFIED_FONTS.join(", "),
        version = APP_VERSION,
        build_date = BUILD_DATE,
    )
}

/// Strategic variant document for a computed plan
pub fn render_strategic_prompt(item: &CatalogItem, plan: &StrategicPlan) -> String {
    format!(
        r#"╔════════════════════════════════════════════════════════════════╗
║  AI CREATIVE PROMPT - Strategic Variation System              ║
║  Target Audience: "{audience}" (Strategy Applied)             ║
╚════════════════════════════════════════════════════════════════╝

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

[PHASE 1: Similarity & Identity (30% Match)]
> 원본 디자인의 '핵심 DNA'는 유지하여 브랜드 일관성을 확보합니다.

• Font Family: {font} (English), {body_font} (Korean) - Identity 유지
• Base Mood: {mood} - 분위기 계승
• Texture: {texture} - 질감 유지

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

[PHASE 2: Strategic Variation (70% Unique)]
> 청중({audience})의 특성에 맞춰 구조와 컬러를 전략적으로 재해석합니다.

■ 1. Color Strategy Change ({color_strategy})
   [Original] BG: {background} / Text: {text}
       ↓ (Strategic Shift)
   [AI Variant] BG: {strategic_background} / Text: {strategic_text}
   
   • Logic: {audience}에게 최적화된 가독성과 심리적 톤앤매너 적용
   • Accent Color: {accent} 유지하되 채도를 조절하여 주목도 강화

■ 2. Layout Reconstruction ({logic_style})
   [Original] {layout}
       ↓ (Structural Shift)
   [AI Variant] {layout_keywords}
   
   • 청중 맞춤 논리 전개: {persuasion}
   • 배치 전략: {placement}

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

[PHASE 3: Nano Banana Pro Execution Guide]

"""
Create a presentation slide based on the following Strategic Variation.

CONTEXT: {category} Topic Presentation
TARGET AUDIENCE: {audience}

DESIGN RULES (30% Similarity):
- Typography: Use **{font}** (Bold/Heavy) for Headlines
- Korean Font: **{body_font}** (Bold) for Body
- Atmosphere: Keep the '{mood}' vibe but adapted for the audience

VARIATION RULES (70% Unique):
- Background Color: **{strategic_background}** (Strategic Shift)
- Text Color: **{strategic_text}** (High Contrast)
- Layout Structure: **{layout_keywords}**
- Content Flow: Follow the '{logic_style}' structure

RENDERING:
- Resolution: 4K (3840x2160)
- Font Style: Clean, bold sans-serif / Modern Gothic (no serif, brush or decorative fonts)
- Letter Spacing: Minimum 0.05em / Stroke Spacing: Minimum 2px
- Ensure clean rendering of Korean text (No artifacts)
"""

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

Generated by AI Strategic Design Consultant System
Build: {version} | Powered by Thomas & AiDreamU

╚════════════════════════════════════════════════════════════╝"#,
        audience = plan.audience,
        font = item.font_family,
        body_font = fonts::HANGUL_BODY_FONT,
        mood = item.mood,
        texture = item.texture,
        color_strategy = plan.strategy.color_strategy,
        background = plan.original_background,
        text = plan.original_text,
        strategic_background = plan.strategic_background,
        strategic_text = plan.strategic_text,
        accent = plan.accent_color,
        logic_style = plan.strategy.logic_style,
        layout = item.layout_label,
        layout_keywords = plan.strategy.layout_keywords,
        persuasion = plan.strategy.persuasion_summary,
        placement = plan.placement,
        category = item.category,
        version = APP_VERSION,
    )
}
