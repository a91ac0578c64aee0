//! SiteInfo model matching the frontend SiteInfo interface.

use serde::{Deserialize, Serialize};

/// One of the three "Why BEGLES" feature cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AboutFeature {
    pub title: String,
    pub description: String,
}

/// Which half of a feature card an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureField {
    Title,
    Description,
}

/// Site copy and contact configuration. Single instance, mutated field by
/// field, never deleted.
///
/// `about_features` is a fixed array: the editor mutates cards in place by
/// index and never inserts or removes one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub name: String,
    /// May contain line-break markers, rendered as-is.
    pub hero_title: String,
    pub hero_sub_title: String,
    pub about_title: String,
    pub about_description: String,
    pub about_features: [AboutFeature; 3],
    pub contact_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kakao_url: Option<String>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "BEGLES".to_string(),
            hero_title: "Genuine Connections,\nBetween Glasses".to_string(),
            hero_sub_title:
                "글라스 사이로 오가는 진심 어린 대화와 새로운 인연, 프리미엄 소셜 클럽 베글스(BEGLES)"
                    .to_string(),
            about_title: "Why BEGLES?".to_string(),
            about_description:
                "BEGLES는 \"Between Glass\"의 가치를 지향합니다. 엄격한 멤버 선별 시스템을 통해 검증된 분들과 함께, 와인의 풍미만큼이나 다채롭고 깊이 있는 인연의 순간을 선사합니다."
                    .to_string(),
            about_features: [
                AboutFeature {
                    title: "Curated Members".to_string(),
                    description:
                        "단순한 가입이 아닌, 신원 검증과 내부 선별 과정을 통과한 분들만 파티에 초대됩니다. 수준 높은 대화와 매너는 기본입니다."
                            .to_string(),
                },
                AboutFeature {
                    title: "Atmosphere".to_string(),
                    description:
                        "단순한 장소가 아닌, 대화의 몰입도를 높일 수 있는 엄선된 공간과 그 분위기에 어울리는 최상급 와인 리스트를 제공합니다."
                            .to_string(),
                },
                AboutFeature {
                    title: "Private & Safe".to_string(),
                    description:
                        "모든 만남은 철저한 보안 하에 프라이빗하게 진행되며, 파티 종료 후에도 매너 있는 커뮤니티 문화를 유지합니다."
                            .to_string(),
                },
            ],
            contact_email: "contact@begles.com".to_string(),
            instagram_url: Some("https://instagram.com".to_string()),
            kakao_url: Some("https://pf.kakao.com".to_string()),
        }
    }
}
