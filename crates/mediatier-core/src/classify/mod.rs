//! Media tier classification.
//!
//! One shared algorithm, four rule sets. Each media type supplies an
//! entity-level pre-check and a per-resource rule through [`MediaRules`];
//! [`classify_with`] does the rest:
//!
//! ```text
//! classify_entity(record) ──Some(tier)──▶ tier
//!        │ None
//!        ▼
//! candidates = isShownBy ∪ hasView resources
//!        │ none                          ──▶ T0
//!        ▼
//! max(classify_web_resource(r, has_landing_page, is_embeddable(r)))
//! ```

pub mod audio;
pub mod classifier;
pub mod embeddable;
pub mod image;
pub mod mime;
pub mod text;
pub mod video;

#[cfg(test)]
pub(crate) mod fixtures;

use serde::{Deserialize, Serialize};

use crate::models::{EdmType, LinkType, MediaTier, ResourceMediaType};
use crate::rdf::RdfWrapper;
use crate::web_resource::WebResourceWrapper;

pub use audio::AudioClassifier;
pub use classifier::MediaClassifier;
pub use embeddable::EmbeddableMedia;
pub use image::ImageClassifier;
pub use text::TextClassifier;
pub use video::VideoClassifier;

/// Roles under which a web resource is a classification candidate.
pub const CANDIDATE_LINK_TYPES: [LinkType; 2] = [LinkType::HasView, LinkType::IsShownBy];

/// Per-media rules plugged into [`classify_with`].
pub trait MediaRules: Send + Sync {
    fn media_type(&self) -> EdmType;

    /// Classify from the record as a whole. `None` means the web resources
    /// must be looked at.
    fn classify_entity(&self, entity: &RdfWrapper<'_>) -> Option<MediaTier>;

    /// Classify one candidate web resource.
    fn classify_web_resource(
        &self,
        resource: &WebResourceWrapper<'_>,
        has_landing_page: bool,
        has_embeddable_media: bool,
    ) -> MediaTier;
}

/// Outcome of a classification: the tier and how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierClassification {
    pub tier: MediaTier,
    pub breakdown: ContentTierBreakdown,
}

impl TierClassification {
    /// A tier decided without looking at individual web resources.
    pub fn without_resources(tier: MediaTier) -> Self {
        Self {
            tier,
            breakdown: ContentTierBreakdown::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentTierBreakdown {
    pub media_type: Option<EdmType>,
    pub has_thumbnails: bool,
    pub has_landing_page: bool,
    pub has_embeddable_media: bool,
    /// Candidate resources, best tier first.
    pub resources: Vec<ResourceTierMetadata>,
}

/// Technical metadata of one candidate resource and the tier it earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceTierMetadata {
    pub resource_url: String,
    pub media_type: ResourceMediaType,
    pub mime_type: Option<String>,
    pub link_types: Vec<LinkType>,
    pub size: u64,
    pub height: u64,
    pub spatial_resolution: u64,
    pub embeddable: bool,
    pub media_tier: MediaTier,
}

/// Run the shared classification algorithm for one media type.
pub fn classify_with<R: MediaRules + ?Sized>(
    rules: &R,
    entity: &RdfWrapper<'_>,
    embeddable: &EmbeddableMedia,
) -> TierClassification {
    if let Some(tier) = rules.classify_entity(entity) {
        log::debug!(
            "mediatier: {:?} record {} classified {} before resource checks",
            rules.media_type(),
            entity.about().unwrap_or("<unknown>"),
            tier
        );
        return TierClassification::without_resources(tier);
    }

    let candidates = entity.web_resource_wrappers(&CANDIDATE_LINK_TYPES);
    let has_landing_page = entity.has_landing_page();

    let mut resources: Vec<ResourceTierMetadata> = candidates
        .iter()
        .map(|resource| {
            let is_embeddable = embeddable.is_embeddable(resource);
            let tier = rules.classify_web_resource(resource, has_landing_page, is_embeddable);
            resource_metadata(resource, is_embeddable, tier)
        })
        .collect();
    // Stable: equal tiers keep input order.
    resources.sort_by(|a, b| b.media_tier.cmp(&a.media_tier));

    let tier = resources
        .first()
        .map(|r| r.media_tier)
        .unwrap_or(MediaTier::T0);

    log::debug!(
        "mediatier: {:?} record {} classified {} from {} candidate resource(s)",
        rules.media_type(),
        entity.about().unwrap_or("<unknown>"),
        tier,
        resources.len()
    );

    TierClassification {
        tier,
        breakdown: ContentTierBreakdown {
            media_type: Some(rules.media_type()),
            has_thumbnails: entity.has_thumbnails(),
            has_landing_page,
            has_embeddable_media: resources.iter().any(|r| r.embeddable),
            resources,
        },
    }
}

fn resource_metadata(
    resource: &WebResourceWrapper<'_>,
    embeddable: bool,
    media_tier: MediaTier,
) -> ResourceTierMetadata {
    ResourceTierMetadata {
        resource_url: resource.about().to_string(),
        media_type: resource.media_type(),
        mime_type: resource.mime_type().map(String::from),
        link_types: resource.link_types().iter().copied().collect(),
        size: resource.size(),
        height: resource.height(),
        spatial_resolution: resource.spatial_resolution(),
        embeddable,
        media_tier,
    }
}
