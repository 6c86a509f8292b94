//! Embeddable media detection.
//!
//! A resource is embeddable when the record shows it through a known
//! player (`isShownBy` pointing at one of the configured URL prefixes),
//! so it can be viewed or played without leaving the record page.

use crate::settings::Settings;
use crate::web_resource::WebResourceWrapper;

#[derive(Debug, Clone)]
pub struct EmbeddableMedia {
    url_prefixes: Vec<String>,
}

impl EmbeddableMedia {
    pub fn new(url_prefixes: Vec<String>) -> Self {
        Self { url_prefixes }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.embeddable_url_prefixes.clone())
    }

    pub fn is_embeddable(&self, resource: &WebResourceWrapper<'_>) -> bool {
        resource.is_shown_by() && self.matches_url(resource.about())
    }

    pub fn matches_url(&self, url: &str) -> bool {
        let url = url.trim();
        self.url_prefixes.iter().any(|prefix| url.starts_with(prefix.as_str()))
    }
}

impl Default for EmbeddableMedia {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
