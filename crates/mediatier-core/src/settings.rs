//! Classifier settings.
//!
//! Plain JSON, every field optional. Missing fields take the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// URL prefixes of players whose `isShownBy` links are embeddable media.
pub const DEFAULT_EMBEDDABLE_URL_PREFIXES: &[&str] = &[
    "http://sounds.bl.uk/embed/",
    "http://eusounds.ait.co.at/player/",
    "http://www.dismarc.org/player/",
    "http://www.ccma.cat/tv3/alacarta/programa/titol/video/",
    "http://www.ina.fr/",
    "https://www.ina.fr/",
    "http://api.picturepipe.net/api/html/widgets/public/playout_cloudfront?token=",
    "https://api.picturepipe.net/api/html/widgets/public/playout_cloudfront?token=",
    "http://archives.crem-cnrs.fr/archives/items/",
    "http://www.euscreen.eu/item.html",
    "https://www.euscreen.eu/item.html",
    "https://sketchfab.com/3d-models/",
    "https://sketchfab.com/models/",
    "https://skfb.ly/",
    "https://soundcloud.com/",
    "https://vimeo.com/",
    "https://player.vimeo.com/video/",
    "https://www.youtube.com/watch",
    "https://youtu.be/",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub embeddable_url_prefixes: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            embeddable_url_prefixes: DEFAULT_EMBEDDABLE_URL_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<()> {
        if let Some(blank) = self
            .embeddable_url_prefixes
            .iter()
            .position(|p| p.trim().is_empty())
        {
            return Err(Error::InvalidSettings(format!(
                "embeddable_url_prefixes[{}] is blank",
                blank
            )));
        }
        Ok(())
    }
}

/// Load settings from `path`, falling back to defaults when the file is
/// missing or invalid.
pub fn load_or_default(path: Option<&Path>) -> Settings {
    let Some(path) = path else {
        return Settings::default();
    };
    match Settings::from_file(path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("mediatier: invalid settings ({}), using defaults", e);
            Settings::default()
        }
    }
}
