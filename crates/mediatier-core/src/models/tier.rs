//! Media tier ordering.
//!
//! Declaration order is the quality order: `Min < T0 < T1 < T2 < T4`.
//! There is no T3. The gap is content policy and must not be renumbered.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Quality grade of a record's digital representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MediaTier {
    /// No basis for classification (the record declares no usable type).
    #[serde(rename = "MIN")]
    Min,
    T0,
    T1,
    T2,
    T4,
}

impl MediaTier {
    /// Absolute floor, returned when classification cannot proceed.
    pub const MIN: MediaTier = MediaTier::Min;

    /// All tiers in ascending order.
    pub const ALL: [MediaTier; 5] = [
        MediaTier::Min,
        MediaTier::T0,
        MediaTier::T1,
        MediaTier::T2,
        MediaTier::T4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaTier::Min => "MIN",
            MediaTier::T0 => "T0",
            MediaTier::T1 => "T1",
            MediaTier::T2 => "T2",
            MediaTier::T4 => "T4",
        }
    }
}

impl fmt::Display for MediaTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MediaTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownTier(s.to_string()))
    }
}
