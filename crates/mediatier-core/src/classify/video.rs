//! Video records.
//!
//! A video only qualifies when it has a thumbnail and a decent
//! representative image; then the best playable resource decides.

use crate::models::{EdmType, LinkType, MediaTier};
use crate::rdf::RdfWrapper;
use crate::web_resource::WebResourceWrapper;

use super::mime::{has_image_mime_type, has_video_mime_type};
use super::MediaRules;

/// Pixel count the `edm:object` image must reach.
pub const MIN_IMAGE_RESOLUTION: u64 = 100_000;
/// Heights above this count as large video.
pub const LARGE_VERTICAL_SIZE: u64 = 480;

#[derive(Debug, Clone, Copy, Default)]
pub struct VideoClassifier;

impl MediaRules for VideoClassifier {
    fn media_type(&self) -> EdmType {
        EdmType::Video
    }

    fn classify_entity(&self, entity: &RdfWrapper<'_>) -> Option<MediaTier> {
        if !entity.has_thumbnails() {
            return Some(MediaTier::T0);
        }
        let has_large_object_image = entity
            .web_resource_wrappers(&[LinkType::Object])
            .iter()
            .any(|r| has_image_mime_type(r.mime_type()) && r.size() >= MIN_IMAGE_RESOLUTION);
        if !has_large_object_image {
            return Some(MediaTier::T0);
        }
        None
    }

    fn classify_web_resource(
        &self,
        resource: &WebResourceWrapper<'_>,
        has_landing_page: bool,
        has_embeddable_media: bool,
    ) -> MediaTier {
        let is_video = has_video_mime_type(resource.mime_type());
        if (is_video && resource.height() > LARGE_VERTICAL_SIZE) || has_embeddable_media {
            MediaTier::T4
        } else if is_video || has_landing_page {
            MediaTier::T1
        } else {
            MediaTier::T0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::fixtures::{image, video, web_resource, RecordBuilder};
    use crate::classify::{classify_with, EmbeddableMedia, TierClassification};
    use crate::record::{Record, WebResource};

    fn classify(record: &Record) -> TierClassification {
        classify_with(&VideoClassifier, &RdfWrapper::new(record), &EmbeddableMedia::default())
    }

    /// Thumbnail plus a 500x300 object image.
    fn qualifying() -> RecordBuilder {
        RecordBuilder::new(Some(EdmType::Video))
            .thumbnail("http://thumb.jpg")
            .link(LinkType::Object, image("http://object.jpg", 500, 300))
    }

    fn with_video(resource: WebResource) -> Record {
        qualifying().link(LinkType::IsShownBy, resource).build()
    }

    #[test]
    fn no_thumbnail_is_t0_regardless_of_resources() {
        let record = RecordBuilder::new(Some(EdmType::Video))
            .link(LinkType::Object, image("http://object.jpg", 500, 300))
            .link(LinkType::IsShownBy, video("http://v.mp4", 1080))
            .build();
        let result = classify(&record);
        assert_eq!(result.tier, MediaTier::T0);
        assert!(result.breakdown.resources.is_empty());
    }

    #[test]
    fn small_or_missing_object_image_is_t0() {
        let small = RecordBuilder::new(Some(EdmType::Video))
            .thumbnail("http://thumb.jpg")
            .link(LinkType::Object, image("http://object.jpg", 300, 300))
            .link(LinkType::IsShownBy, video("http://v.mp4", 1080))
            .build();
        assert_eq!(classify(&small).tier, MediaTier::T0);

        let missing = RecordBuilder::new(Some(EdmType::Video))
            .thumbnail("http://thumb.jpg")
            .link(LinkType::IsShownBy, video("http://v.mp4", 1080))
            .build();
        assert_eq!(classify(&missing).tier, MediaTier::T0);
    }

    #[test]
    fn tall_video_is_t4() {
        assert_eq!(classify(&with_video(video("http://v.mp4", 600))).tier, MediaTier::T4);
    }

    #[test]
    fn short_video_is_t1() {
        assert_eq!(classify(&with_video(video("http://v.mp4", 300))).tier, MediaTier::T1);
        assert_eq!(classify(&with_video(video("http://v.mp4", 480))).tier, MediaTier::T1);
    }

    #[test]
    fn embeddable_player_is_t4() {
        let player = web_resource("https://www.youtube.com/watch?v=abc", None);
        assert_eq!(classify(&with_video(player)).tier, MediaTier::T4);
    }

    #[test]
    fn landing_page_without_video_is_t1() {
        let record = qualifying()
            .link(LinkType::HasView, web_resource("http://unknown", None))
            .link(LinkType::IsShownAt, web_resource("http://page", Some("text/html")))
            .build();
        assert_eq!(classify(&record).tier, MediaTier::T1);
    }

    #[test]
    fn qualifying_record_without_candidates_is_t0() {
        let result = classify(&qualifying().build());
        assert_eq!(result.tier, MediaTier::T0);
        assert!(result.breakdown.has_thumbnails);
        assert!(result.breakdown.resources.is_empty());
    }

    #[test]
    fn preview_without_base_mime_type_is_no_thumbnail() {
        let mut record = with_video(video("http://v.mp4", 1080));
        for resource in &mut record.web_resources {
            if resource.about.as_deref() == Some("http://thumb.jpg") {
                resource.mime_type = Some(";charset=x".into());
            }
        }
        let result = classify(&record);
        assert_eq!(result.tier, MediaTier::T0);
        assert!(result.breakdown.resources.is_empty());
    }
}
