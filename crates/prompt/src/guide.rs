//! Workflow guide shown to first-time users

use slide300_catalog::APP_VERSION;

/// Three-step workflow guide
pub const WORKFLOW_GUIDE: &str = r#"Thomas Strategic Workflow 🚀

[AUTO PROMPT 모드]
카테고리 선택 → 디자인 클릭 → "AUTO PROMPT 복사" 버튼으로 검증된 템플릿 즉시 사용

[AI CREATIVE 모드]
오직 '발표 대상'만 선택하세요. 나머지는 AI가 알아서 '전략적 변주(Strategic Variation)'를 생성합니다.

[30:70 법칙]
30%: 폰트와 무드는 유지 (Identity)
70%: 색상과 레이아웃은 청중에 맞춰 변신"#;

/// Guide text with the build tag appended
pub fn render_guide() -> String {
    format!("{}\n\nBuild {}", WORKFLOW_GUIDE, APP_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_sections() {
        let guide = render_guide();
        let auto = guide.find("[AUTO PROMPT 모드]").unwrap();
        let creative = guide.find("[AI CREATIVE 모드]").unwrap();
        let rule = guide.find("[30:70 법칙]").unwrap();
        assert!(auto < creative && creative < rule);
        assert!(guide.ends_with(APP_VERSION));
    }
}
