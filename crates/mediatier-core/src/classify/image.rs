//! Image records: graded by pixel count, in the same bands as text.

use crate::models::{EdmType, MediaTier};
use crate::rdf::RdfWrapper;
use crate::web_resource::WebResourceWrapper;

use super::mime::has_image_mime_type;
use super::text::{LARGE_RESOLUTION, MEDIUM_RESOLUTION, SMALL_RESOLUTION};
use super::MediaRules;

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageClassifier;

impl MediaRules for ImageClassifier {
    fn media_type(&self) -> EdmType {
        EdmType::Image
    }

    fn classify_entity(&self, _entity: &RdfWrapper<'_>) -> Option<MediaTier> {
        None
    }

    fn classify_web_resource(
        &self,
        resource: &WebResourceWrapper<'_>,
        has_landing_page: bool,
        _has_embeddable_media: bool,
    ) -> MediaTier {
        let resolution = if has_image_mime_type(resource.mime_type()) {
            resource.size()
        } else {
            0
        };

        if resolution >= LARGE_RESOLUTION {
            MediaTier::T4
        } else if resolution >= MEDIUM_RESOLUTION {
            MediaTier::T2
        } else if has_landing_page || resolution >= SMALL_RESOLUTION {
            MediaTier::T1
        } else {
            MediaTier::T0
        }
    }
}
