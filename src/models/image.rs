//! Image source field shared by the main image and the gallery slots.

use serde::{Deserialize, Serialize};

/// Prefix that marks an embedded data-URL payload.
pub const DATA_URL_PREFIX: &str = "data:";

/// An image reference: either an external URL or an embedded
/// `data:<mime>;base64,<payload>` string produced by the media encoder.
///
/// Persisted as the plain string the frontend stored; the tag is recovered
/// from the `data:` prefix when a document is read back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ImageSource {
    /// Remote URL, possibly empty (the catalog renders a placeholder).
    External(String),
    /// Self-describing data-URL payload.
    Embedded(String),
}

impl ImageSource {
    pub fn as_str(&self) -> &str {
        match self {
            ImageSource::External(s) | ImageSource::Embedded(s) => s,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, ImageSource::Embedded(_))
    }
}

impl Default for ImageSource {
    fn default() -> Self {
        ImageSource::External(String::new())
    }
}

impl From<String> for ImageSource {
    fn from(raw: String) -> Self {
        if raw.starts_with(DATA_URL_PREFIX) {
            ImageSource::Embedded(raw)
        } else {
            ImageSource::External(raw)
        }
    }
}

impl From<&str> for ImageSource {
    fn from(raw: &str) -> Self {
        ImageSource::from(raw.to_string())
    }
}

impl From<ImageSource> for String {
    fn from(source: ImageSource) -> Self {
        match source {
            ImageSource::External(s) | ImageSource::Embedded(s) => s,
        }
    }
}
