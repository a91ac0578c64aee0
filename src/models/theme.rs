//! Theme model matching the frontend Theme interface.

use serde::{Deserialize, Serialize};

/// Presentation configuration for the public site.
///
/// Exactly one instance exists at all times; it is mutated field by field
/// and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub card_background_color: String,
    /// Font stack descriptor, passed through to the renderer verbatim.
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#0369A1".to_string(),
            accent_color: "#38BDF8".to_string(),
            background_color: "#FFFFFF".to_string(),
            card_background_color: "#FFFFFF".to_string(),
            font_family: "\"Pretendard Variable\", Pretendard, -apple-system, sans-serif"
                .to_string(),
        }
    }
}
