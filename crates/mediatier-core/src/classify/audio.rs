//! Sound records: the tier depends on the web resources alone.

use crate::models::{EdmType, MediaTier};
use crate::rdf::RdfWrapper;
use crate::web_resource::WebResourceWrapper;

use super::mime::has_audio_mime_type;
use super::MediaRules;

#[derive(Debug, Clone, Copy, Default)]
pub struct AudioClassifier;

impl MediaRules for AudioClassifier {
    fn media_type(&self) -> EdmType {
        EdmType::Sound
    }

    fn classify_entity(&self, _entity: &RdfWrapper<'_>) -> Option<MediaTier> {
        None
    }

    fn classify_web_resource(
        &self,
        resource: &WebResourceWrapper<'_>,
        has_landing_page: bool,
        has_embeddable_media: bool,
    ) -> MediaTier {
        if has_audio_mime_type(resource.mime_type()) || has_embeddable_media {
            MediaTier::T4
        } else if has_landing_page {
            MediaTier::T1
        } else {
            MediaTier::T0
        }
    }
}
