//! Party model matching the frontend Party interface.

use serde::{Deserialize, Serialize};

use super::ImageSource;

/// Lifecycle status of a party.
///
/// Serialized with the Korean labels the frontend persisted, so stored
/// documents keep their wire form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PartyStatus {
    #[serde(rename = "모집중")]
    Recruiting,
    #[serde(rename = "마감")]
    Closed,
    #[serde(rename = "진행완료")]
    Completed,
}

impl PartyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyStatus::Recruiting => "모집중",
            PartyStatus::Closed => "마감",
            PartyStatus::Completed => "진행완료",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "모집중" => Some(PartyStatus::Recruiting),
            "마감" => Some(PartyStatus::Closed),
            "진행완료" => Some(PartyStatus::Completed),
            _ => None,
        }
    }

    /// Only recruiting parties accept applications.
    pub fn is_recruiting(&self) -> bool {
        matches!(self, PartyStatus::Recruiting)
    }
}

/// A bookable event shown in the public catalog.
///
/// Identity is `id`, minted once at creation and never reassigned. Records
/// are replaced wholesale by id on edit and removed by id on delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: String,
    pub title: String,
    /// Free-text date, not a structured timestamp ("2024-06-15 19:00").
    pub date: String,
    pub location: String,
    pub capacity: i32,
    /// Shown in the catalog; no workflow in this crate ever increments it.
    pub current_applicants: i32,
    pub price: i64,
    pub description: String,
    pub image_url: ImageSource,
    /// Gallery images, insertion order = display order.
    #[serde(default)]
    pub intro_images: Vec<ImageSource>,
    pub status: PartyStatus,
    #[serde(default)]
    pub google_form_url: String,
}
