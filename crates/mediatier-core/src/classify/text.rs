//! Text records: PDFs are graded by spatial resolution, scanned pages by
//! pixel count.

use crate::models::{EdmType, MediaTier};
use crate::rdf::RdfWrapper;
use crate::web_resource::WebResourceWrapper;

use super::mime::{has_image_mime_type, has_pdf_mime_type};
use super::MediaRules;

pub const SMALL_RESOLUTION: u64 = 100_000;
pub const MEDIUM_RESOLUTION: u64 = 420_000;
pub const LARGE_RESOLUTION: u64 = 950_000;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextClassifier;

impl MediaRules for TextClassifier {
    fn media_type(&self) -> EdmType {
        EdmType::Text
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
        let mime_type = resource.mime_type();
        let is_image = has_image_mime_type(mime_type);
        let resolution = if has_pdf_mime_type(mime_type) {
            resource.spatial_resolution()
        } else if is_image {
            resource.size()
        } else {
            0
        };

        if resolution >= LARGE_RESOLUTION {
            MediaTier::T4
        } else if resolution >= MEDIUM_RESOLUTION {
            MediaTier::T2
        } else if has_landing_page || (is_image && resolution >= SMALL_RESOLUTION) {
            MediaTier::T1
        } else {
            MediaTier::T0
        }
    }
}
