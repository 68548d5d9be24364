//! Static design registry: categories, archetypes and font constants

use crate::types::{CategoryDescriptor, DesignArchetype};

/// Application build tag embedded in generated prompts
pub const APP_VERSION: &str = "v2.3.0-SIMPLE_UX";

/// Product positioning line
pub const STRATEGY_GOAL: &str = "One-Click Audience Targeting System";

/// Fixed build date printed in prompt footers
pub const BUILD_DATE: &str = "2026-02-18";

/// Aggregate category that matches every template
pub const ALL_CATEGORY: &str = "전체";

/// Fonts verified for Hangul rendering
pub mod fonts {
    pub const FONT_SANS: &str = "Pretendard";
    pub const FONT_TITLE: &str = "Jua";
    pub const FONT_NEUTRAL: &str = "Inter";
    pub const FONT_SERIF: &str = "Gowun Batang";
    pub const FONT_DECOR: &str = "Righteous";
    pub const FONT_SOFT: &str = "Nunito";
    pub const FONT_ELEGANT: &str = "Cormorant Garamond";
    pub const FONT_HELVETICA: &str = "Helvetica Neue";
    pub const FONT_ARIAL: &str = "Arial";
    pub const FONT_TIMES: &str = "Times New Roman";
    pub const FONT_COMIC: &str = "Comic Neue";
    pub const FONT_GOOGLE: &str = "Google Sans Text";

    /// Body font for Korean text in every prompt
    pub const HANGUL_BODY_FONT: &str = "Noto Sans KR";

    pub const CORE_FONTS: [&str; 7] = [
        FONT_SANS,
        FONT_TITLE,
        FONT_NEUTRAL,
        FONT_SERIF,
        FONT_DECOR,
        FONT_SOFT,
        FONT_ELEGANT,
    ];

    pub const VERIFIED_FONTS: [&str; 5] = [
        FONT_HELVETICA,
        FONT_ARIAL,
        FONT_TIMES,
        FONT_COMIC,
        FONT_GOOGLE,
    ];
}

/// Navigation categories in declaration order (aggregate first)
pub const CATEGORIES: &[CategoryDescriptor] = &[
    CategoryDescriptor { name: ALL_CATEGORY, item_count: 330, icon: "🌐" },
    CategoryDescriptor { name: "강의교안", item_count: 15, icon: "📖" },
    CategoryDescriptor { name: "건강/웰빙", item_count: 15, icon: "🧘" },
    CategoryDescriptor { name: "공상과학/SF", item_count: 15, icon: "🚀" },
    CategoryDescriptor { name: "기계/전자공학", item_count: 15, icon: "⚙️" },
    CategoryDescriptor { name: "내추럴", item_count: 15, icon: "🌿" },
    CategoryDescriptor { name: "럭셔리", item_count: 15, icon: "💎" },
    CategoryDescriptor { name: "레트로", item_count: 15, icon: "📻" },
    CategoryDescriptor { name: "모던", item_count: 15, icon: "🏢" },
    CategoryDescriptor { name: "비즈니스", item_count: 15, icon: "💼" },
    CategoryDescriptor { name: "소셜미디어/광고", item_count: 15, icon: "📱" },
    CategoryDescriptor { name: "스포츠/이벤트", item_count: 15, icon: "🏃" },
    CategoryDescriptor { name: "시네마틱", item_count: 15, icon: "🎬" },
    CategoryDescriptor { name: "심플", item_count: 15, icon: "✨" },
    CategoryDescriptor { name: "예술/디자인", item_count: 15, icon: "🎨" },
    CategoryDescriptor { name: "여행/음식", item_count: 15, icon: "✈️" },
    CategoryDescriptor { name: "역사/문화", item_count: 15, icon: "🏛️" },
    CategoryDescriptor { name: "종교/문화", item_count: 15, icon: "🙏" },
    CategoryDescriptor { name: "첨단기술/AI", item_count: 15, icon: "🧠" },
    CategoryDescriptor { name: "카툰/일러스트", item_count: 15, icon: "🎨" },
    CategoryDescriptor { name: "키즈/교육", item_count: 15, icon: "🧸" },
    CategoryDescriptor { name: "포토/갤러리", item_count: 15, icon: "📷" },
    CategoryDescriptor { name: "학술/과학", item_count: 15, icon: "🎓" },
];

/// One archetype per real category
pub const ARCHETYPES: &[DesignArchetype] = &[
    DesignArchetype {
        category: "강의교안",
        style_name: "TED 임팩트",
        background_color: "#000000",
        text_color: "#ffffff",
        accent_color: "#E62B1E",
        font_family: fonts::FONT_HELVETICA,
        mood: "지적 호기심, 명료함, 인사이트",
        features: &["1 슬라이드 1 메시지", "대형 풀스크린 이미지", "압도적 몰입감"],
        texture: "매트 블랙",
        layout: "중앙 핵심 문구 집중형",
        narrative: "TED 강연처럼 청중을 압도하고 핵심 메시지 하나를 강렬하게 각인시킵니다.",
    },
    DesignArchetype {
        category: "비즈니스",
        style_name: "글로벌 컨설팅",
        background_color: "#FFFFFF",
        text_color: "#0f172a",
        accent_color: "#051C2C",
        font_family: fonts::FONT_SANS,
        mood: "전문성, 신뢰, 데이터 기반",
        features: &["MECE 구조화", "워터폴 차트", "핵심 인사이트 박스"],
        texture: "프리미엄 A4 용지",
        layout: "헤드라인 메시지 + 3단 근거",
        narrative: "McKinsey, BCG 스타일의 전략적 보고서로 경영진 의사결정을 유도합니다.",
    },
    DesignArchetype {
        category: "첨단기술/AI",
        style_name: "뉴럴 네트워크",
        background_color: "#020617",
        text_color: "#f8fafc",
        accent_color: "#38bdf8",
        font_family: fonts::FONT_NEUTRAL,
        mood: "미래지향, 인공지능, 딥러닝",
        features: &["빛나는 회로 라인", "시냅스 데이터 포인트"],
        texture: "디지털 글리프",
        layout: "중앙 AI 코어 배치",
        narrative: "AI 기술 뉴스 및 첨단 딥러닝 아키텍처 브리핑에 최적화된 전문가용 디자인입니다.",
    },
    DesignArchetype {
        category: "공상과학/SF",
        style_name: "사이버네틱 시티",
        background_color: "#000000",
        text_color: "#ffffff",
        accent_color: "#f43f5e",
        font_family: fonts::FONT_DECOR,
        mood: "사이버펑크, 네온, 하이테크",
        features: &["네온 글로우", "홀로그램 UI"],
        texture: "스캔라인 효과",
        layout: "비대칭 미래도시",
        narrative: "SF 영화 리뷰나 미래 기술 테마에서 시각적 압도감을 선사합니다.",
    },
    DesignArchetype {
        category: "예술/디자인",
        style_name: "아방가르드 갤러리",
        background_color: "#f8fafc",
        text_color: "#0f172a",
        accent_color: "#ef4444",
        font_family: fonts::FONT_ELEGANT,
        mood: "창의적, 미니멀, 예술적",
        features: &["과감한 비대칭 타이포", "여백의 미"],
        texture: "캔버스 질감",
        layout: "작품 중심 그리드",
        narrative: "예술 전시회, 디자인 포트폴리오 및 창의적인 컨셉 발표에 적합합니다.",
    },
    DesignArchetype {
        category: "역사/문화",
        style_name: "내셔널 아카이브",
        background_color: "#1a1a1a",
        text_color: "#f5f5dc",
        accent_color: "#FFCC00",
        font_family: fonts::FONT_SERIF,
        mood: "탐험, 유산, 다큐멘터리",
        features: &["노란색 사각 프레임", "고해상도 다큐 사진"],
        texture: "오래된 필름 그레인",
        layout: "이미지 80% + 캡션 20%",
        narrative: "역사적 사실과 문화 유산을 다큐멘터리 스타일로 깊이 있게 전달합니다.",
    },
    DesignArchetype {
        category: "기계/전자공학",
        style_name: "PCB 마스터 설계",
        background_color: "#064e3b",
        text_color: "#ecfdf5",
        accent_color: "#10b981",
        font_family: fonts::FONT_SANS,
        mood: "공학, 하드웨어, 정밀",
        features: &["구리 배선 패턴", "부품 실루엣"],
        texture: "회로 기판 질감",
        layout: "부품 조립 도면",
        narrative: "전자통신 전문가용으로 기술적 깊이와 전문성을 완벽히 보여줍니다.",
    },
    DesignArchetype {
        category: "시네마틱",
        style_name: "블록버스터 프레임",
        background_color: "#000000",
        text_color: "#fafaf9",
        accent_color: "#E50914",
        font_family: fonts::FONT_ELEGANT,
        mood: "드라마틱, 영화적, 조명",
        features: &["와이드 레터박스", "아나모픽 플레어", "필름 그레인"],
        texture: "시네마틱 검정",
        layout: "황금 분할 시네마 뷰",
        narrative: "영화 스타일의 스토리텔링이나 대작 프로젝트 브리핑 시 임팩트를 극대화합니다.",
    },
    DesignArchetype {
        category: "카툰/일러스트",
        style_name: "다이나믹 코믹스",
        background_color: "#ffffff",
        text_color: "#000000",
        accent_color: "#ef4444",
        font_family: fonts::FONT_TITLE,
        mood: "에너지, 만화, 유쾌함",
        features: &["강렬한 집중선", "말풍선 가이드"],
        texture: "인쇄망점 질감",
        layout: "컷 분할 그리드",
        narrative: "재미있는 에피소드나 홍보 광고를 카드뉴스 형태로 전달하기 좋습니다.",
    },
    DesignArchetype {
        category: "학술/과학",
        style_name: "퀀텀 리서치",
        background_color: "#f8fafc",
        text_color: "#1e293b",
        accent_color: "#4f46e5",
        font_family: fonts::FONT_SERIF,
        mood: "학구적, 깊이, 입자",
        features: &["입자 가속 궤적", "정교한 도표 가이드"],
        texture: "연구용 종이",
        layout: "데이터 중심 배치",
        narrative: "양자 역학, 물리 과학 및 논문 발표 등 학술적 신뢰도가 필요한 슬라이드에 적합합니다.",
    },
    DesignArchetype {
        category: "소셜미디어/광고",
        style_name: "바이럴 마케팅",
        background_color: "#ffffff",
        text_color: "#262626",
        accent_color: "#db2777",
        font_family: fonts::FONT_DECOR,
        mood: "트렌디, 홍보, 화려함",
        features: &["그라데이션 보더", "이모지 포인트"],
        texture: "글라스 질감",
        layout: "피드 집중형",
        narrative: "SNS 트렌드 뉴스, 광고 홍보 및 마케팅 바이럴 콘텐츠 제작에 완벽합니다.",
    },
    DesignArchetype {
        category: "심플",
        style_name: "미니멀 젠",
        background_color: "#f5f5f7",
        text_color: "#1d1d1f",
        accent_color: "#2997ff",
        font_family: fonts::FONT_SANS,
        mood: "평온함, 여백, 본질",
        features: &["극단적 여백", "샌프란시스코 스타일"],
        texture: "매트 화이트",
        layout: "좌측 하단 집중",
        narrative: "시각적 노이즈를 제거하여 메시지의 본질에만 집중하게 합니다.",
    },
    DesignArchetype {
        category: "모던",
        style_name: "어반 산세리프",
        background_color: "#f1f5f9",
        text_color: "#0f172a",
        accent_color: "#3b82f6",
        font_family: fonts::FONT_NEUTRAL,
        mood: "도시적, 세련됨",
        features: &["비대칭 레이아웃", "강한 고딕 서체"],
        texture: "없음",
        layout: "Z-패턴 그리드",
        narrative: "도시 트렌드, 최신 기술 라이프스타일 뉴스를 현대적으로 전달합니다.",
    },
    DesignArchetype {
        category: "내추럴",
        style_name: "포레스트 웰빙",
        background_color: "#f0fdf4",
        text_color: "#166534",
        accent_color: "#22c55e",
        font_family: fonts::FONT_SOFT,
        mood: "싱그래움, 건강, 치유",
        features: &["수채화 나뭇잎", "곡선 배치"],
        texture: "캔버스 질감",
        layout: "자연스러운 분산형",
        narrative: "건강 뉴스 및 친환경 마케팅 슬라이드에 최적화된 에너지를 전달합니다.",
    },
    DesignArchetype {
        category: "럭셔리",
        style_name: "하이엔드 골드",
        background_color: "#0c0a09",
        text_color: "#f5f5f5",
        accent_color: "#D4AF37",
        font_family: fonts::FONT_ELEGANT,
        mood: "프리미엄, 명품, 격조",
        features: &["금박 디테일", "대리석 텍스처"],
        texture: "다크 마블",
        layout: "골든 레이아웃",
        narrative: "VIP 광고, 자산 관리 뉴스 및 명품 브랜드 스토리텔링 전용입니다.",
    },
    DesignArchetype {
        category: "레트로",
        style_name: "80s 노스탤지어",
        background_color: "#111827",
        text_color: "#ffffff",
        accent_color: "#f43f5e",
        font_family: fonts::FONT_DECOR,
        mood: "뉴트로, 향수, 추억",
        features: &["VHS 글리치 효과", "TV 프레임"],
        texture: "비디오 노이즈",
        layout: "브라운관 박스",
        narrative: "5060의 향수와 젊은 층의 뉴트로 감성을 동시에 저격하는 뉴스용입니다.",
    },
    DesignArchetype {
        category: "여행/음식",
        style_name: "글로벌 고메",
        background_color: "#fff7ed",
        text_color: "#431407",
        accent_color: "#ea580c",
        font_family: fonts::FONT_TITLE,
        mood: "여행, 모험, 미식",
        features: &["빈티지 스탬프", "고화질 사진"],
        texture: "오래된 종이",
        layout: "아카이브 박스",
        narrative: "여행 뉴스, 맛집 홍보 및 미식 가이드 콘텐츠에 생동감을 더합니다.",
    },
    DesignArchetype {
        category: "건강/웰빙",
        style_name: "마인드풀 젠",
        background_color: "#fdfbf7",
        text_color: "#44403c",
        accent_color: "#a8a29e",
        font_family: fonts::FONT_SERIF,
        mood: "명상, 치유, 평온",
        features: &["부드러운 블러", "원형 요소"],
        texture: "모래 질감",
        layout: "플로팅 레이아웃",
        narrative: "실버 세대 건강 뉴스 및 심리 치유 홍보 마케팅에 적합합니다.",
    },
    DesignArchetype {
        category: "키즈/교육",
        style_name: "에듀 파스텔",
        background_color: "#eff6ff",
        text_color: "#1e3a8a",
        accent_color: "#f472b6",
        font_family: fonts::FONT_TITLE,
        mood: "귀여움, 상상력",
        features: &["둥근 모서리", "크레용 질감"],
        texture: "도화지 패턴",
        layout: "스티커형 배치",
        narrative: "손주 교육 정보, 아동용 제품 광고 뉴스 콘텐츠에서 인기가 높습니다.",
    },
    DesignArchetype {
        category: "스포츠/이벤트",
        style_name: "다이나믹 액션",
        background_color: "#0f172a",
        text_color: "#ffffff",
        accent_color: "#D0021B",
        font_family: fonts::FONT_DECOR,
        mood: "역동적, 속도, 열정",
        features: &["사선 타이포", "속도선 효과"],
        texture: "메탈릭 질감",
        layout: "사선 그리드",
        narrative: "스포츠 중계 뉴스, 축제 홍보 광고 및 피트니스 마케팅에 최적입니다.",
    },
    DesignArchetype {
        category: "종교/문화",
        style_name: "스테인드글라스",
        background_color: "#1e1b4b",
        text_color: "#f8fafc",
        accent_color: "#fbbf24",
        font_family: fonts::FONT_SERIF,
        mood: "경건함, 평화, 예술",
        features: &["유리 패턴", "빛의 번짐"],
        texture: "유리 질감",
        layout: "중앙 아치형",
        narrative: "종교적 가르침 홍보 및 문화 예술 뉴스 전달 시 경건함을 더합니다.",
    },
    DesignArchetype {
        category: "포토/갤러리",
        style_name: "시네마틱 사진첩",
        background_color: "#0a0a0a",
        text_color: "#e5e5e5",
        accent_color: "#737373",
        font_family: fonts::FONT_NEUTRAL,
        mood: "예술적, 이미지 중심",
        features: &["이미지 영역 80%", "세련된 캡션"],
        texture: "매트 검정",
        layout: "와이드 사진 집중형",
        narrative: "고품격 사진 중심 뉴스 및 이미지 광고 스토리텔링에 최적화되어 있습니다.",
    },
];

/// Find the archetype for a category name
pub fn find_archetype<'a>(
    archetypes: &'a [DesignArchetype],
    category: &str,
) -> Option<&'a DesignArchetype> {
    archetypes.iter().find(|a| a.category == category)
}

/// Categories that produce catalog items (aggregate excluded)
pub fn real_categories(categories: &[CategoryDescriptor]) -> impl Iterator<Item = &CategoryDescriptor> {
    categories.iter().filter(|c| c.name != ALL_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_one_archetype() {
        for category in real_categories(CATEGORIES) {
            let count = ARCHETYPES.iter().filter(|a| a.category == category.name).count();
            assert_eq!(count, 1, "category {}", category.name);
        }
    }

    #[test]
    fn test_category_names_unique() {
        let mut names: Vec<_> = CATEGORIES.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CATEGORIES.len());
    }

    #[test]
    fn test_aggregate_count_matches_total() {
        let aggregate = CATEGORIES.iter().find(|c| c.name == ALL_CATEGORY).unwrap();
        let total: usize = real_categories(CATEGORIES).map(|c| c.item_count).sum();
        assert_eq!(aggregate.item_count, total);
        assert_eq!(total, 330);
    }

    #[test]
    fn test_find_archetype() {
        let archetype = find_archetype(ARCHETYPES, "비즈니스").unwrap();
        assert_eq!(archetype.style_name, "글로벌 컨설팅");
        assert_eq!(archetype.font_family, fonts::FONT_SANS);
        assert!(find_archetype(ARCHETYPES, ALL_CATEGORY).is_none());
    }
}
