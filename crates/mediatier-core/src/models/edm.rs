//! EDM record types and the link roles between a record and its web resources.

use serde::{Deserialize, Serialize};

/// Declared broad media category of a record (`edm:type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EdmType {
    Sound,
    Image,
    Text,
    Video,
    /// Known type without media tier rules; classifies as T0.
    #[serde(rename = "3D")]
    ThreeD,
}

/// How a web resource is linked from the record's aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    /// `edm:isShownBy`: the digital object itself.
    IsShownBy,
    /// `edm:isShownAt`: the provider's landing page.
    IsShownAt,
    /// `edm:hasView`: an additional view of the object.
    HasView,
    /// `edm:object`: the representative image (thumbnail source).
    Object,
}

impl LinkType {
    pub const ALL: [LinkType; 4] = [
        LinkType::IsShownBy,
        LinkType::IsShownAt,
        LinkType::HasView,
        LinkType::Object,
    ];
}
