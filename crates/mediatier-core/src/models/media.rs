//! Media type of a single web resource, derived from its mime type.

use serde::{Deserialize, Serialize};

/// What kind of media a web resource holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceMediaType {
    Audio,
    Image,
    Text,
    Video,
    Other,
}

/// Application types that count as text documents.
const TEXT_APPLICATION_TYPES: &[&str] = &[
    "application/pdf",
    "application/rtf",
    "application/xml",
    "application/epub+zip",
    "application/msword",
    "application/vnd.oasis.opendocument.text",
];

impl ResourceMediaType {
    /// Classify a (normalized, lower-case) mime type. `None` maps to `Other`.
    pub fn from_mime_type(mime_type: Option<&str>) -> Self {
        let Some(mime_type) = mime_type else {
            return ResourceMediaType::Other;
        };
        if mime_type.starts_with("audio/") {
            ResourceMediaType::Audio
        } else if mime_type.starts_with("image/") {
            ResourceMediaType::Image
        } else if mime_type.starts_with("video/") {
            ResourceMediaType::Video
        } else if mime_type.starts_with("text/") || TEXT_APPLICATION_TYPES.contains(&mime_type) {
            ResourceMediaType::Text
        } else {
            ResourceMediaType::Other
        }
    }
}
