//! Entry point: picks the rules for the record's declared EDM type.

use crate::models::{EdmType, MediaTier};
use crate::rdf::RdfWrapper;
use crate::record::Record;
use crate::settings::Settings;

use super::{
    classify_with, AudioClassifier, EmbeddableMedia, ImageClassifier, TextClassifier,
    TierClassification, VideoClassifier,
};

/// Media tier classifier for whole records.
///
/// Stateless apart from its settings; share it freely between threads.
#[derive(Debug, Clone, Default)]
pub struct MediaClassifier {
    embeddable: EmbeddableMedia,
}

impl MediaClassifier {
    pub fn new(settings: &Settings) -> Self {
        Self {
            embeddable: EmbeddableMedia::from_settings(settings),
        }
    }

    pub fn classify(&self, entity: &RdfWrapper<'_>) -> MediaTier {
        self.classify_with_breakdown(entity).tier
    }

    pub fn classify_record(&self, record: &Record) -> MediaTier {
        self.classify(&RdfWrapper::new(record))
    }

    /// Classify and keep the per-resource details.
    ///
    /// An untyped record gets `MIN` (nothing to classify against); a typed
    /// record without tier rules gets `T0`.
    pub fn classify_with_breakdown(&self, entity: &RdfWrapper<'_>) -> TierClassification {
        let Some(edm_type) = entity.edm_type() else {
            log::debug!(
                "mediatier: record {} has no single edm:type",
                entity.about().unwrap_or("<unknown>")
            );
            return TierClassification::without_resources(MediaTier::MIN);
        };

        match edm_type {
            EdmType::Sound => classify_with(&AudioClassifier, entity, &self.embeddable),
            EdmType::Image => classify_with(&ImageClassifier, entity, &self.embeddable),
            EdmType::Text => classify_with(&TextClassifier, entity, &self.embeddable),
            EdmType::Video => classify_with(&VideoClassifier, entity, &self.embeddable),
            EdmType::ThreeD => TierClassification::without_resources(MediaTier::T0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::fixtures::{image, pdf, video, web_resource, RecordBuilder};
    use crate::models::LinkType;

    #[test]
    fn untyped_record_is_min() {
        let record = RecordBuilder::new(None)
            .link(LinkType::IsShownBy, image("http://i.jpg", 2000, 2000))
            .build();
        assert_eq!(MediaClassifier::default().classify_record(&record), MediaTier::MIN);
    }

    #[test]
    fn conflicting_types_are_min() {
        let mut record = RecordBuilder::new(Some(EdmType::Image)).build();
        record.proxies.push(crate::record::Proxy {
            edm_type: Some(EdmType::Text),
            ..Default::default()
        });
        assert_eq!(MediaClassifier::default().classify_record(&record), MediaTier::MIN);
    }

    #[test]
    fn unsupported_type_is_t0() {
        let record = RecordBuilder::new(Some(EdmType::ThreeD))
            .link(
                LinkType::IsShownBy,
                web_resource("https://sketchfab.com/3d-models/1", None),
            )
            .build();
        assert_eq!(MediaClassifier::default().classify_record(&record), MediaTier::T0);
    }

    #[test]
    fn dispatches_by_type() {
        let classifier = MediaClassifier::default();

        let sound = RecordBuilder::new(Some(EdmType::Sound))
            .link(LinkType::IsShownBy, web_resource("http://a.mp3", Some("audio/mpeg")))
            .build();
        assert_eq!(classifier.classify_record(&sound), MediaTier::T4);

        let text = RecordBuilder::new(Some(EdmType::Text))
            .link(LinkType::IsShownBy, pdf("http://d.pdf", 500_000))
            .build();
        assert_eq!(classifier.classify_record(&text), MediaTier::T2);

        let picture = RecordBuilder::new(Some(EdmType::Image))
            .link(LinkType::IsShownBy, image("http://i.jpg", 500, 300))
            .build();
        assert_eq!(classifier.classify_record(&picture), MediaTier::T1);

        // Same audio file under a video type fails the thumbnail check.
        let mislabelled = RecordBuilder::new(Some(EdmType::Video))
            .link(LinkType::IsShownBy, web_resource("http://a.mp3", Some("audio/mpeg")))
            .build();
        assert_eq!(classifier.classify_record(&mislabelled), MediaTier::T0);
    }

    #[test]
    fn typed_record_without_resources_is_t0() {
        let classifier = MediaClassifier::default();
        for edm_type in [EdmType::Sound, EdmType::Image, EdmType::Text] {
            let record = RecordBuilder::new(Some(edm_type)).build();
            assert_eq!(classifier.classify_record(&record), MediaTier::T0);
        }
    }

    #[test]
    fn mixed_resources_reduce_to_the_best() {
        let record = RecordBuilder::new(Some(EdmType::Video))
            .thumbnail("http://thumb.jpg")
            .link(LinkType::Object, image("http://object.jpg", 500, 300))
            .link(LinkType::HasView, web_resource("http://notes.txt", Some("text/plain")))
            .link(LinkType::HasView, video("http://clip.mp4", 240))
            .link(LinkType::IsShownBy, video("http://full.mp4", 1080))
            .build();
        let result = MediaClassifier::default().classify_with_breakdown(&RdfWrapper::new(&record));
        let tiers: Vec<_> = result.breakdown.resources.iter().map(|r| r.media_tier).collect();
        assert_eq!(tiers, vec![MediaTier::T4, MediaTier::T1, MediaTier::T0]);
        assert_eq!(result.tier, MediaTier::T4);
    }

    #[test]
    fn custom_embeddable_prefixes() {
        let settings = Settings {
            embeddable_url_prefixes: vec!["https://player.example.org/".into()],
        };
        let record = RecordBuilder::new(Some(EdmType::Sound))
            .link(
                LinkType::IsShownBy,
                web_resource("https://player.example.org/embed/7", None),
            )
            .build();
        assert_eq!(MediaClassifier::new(&settings).classify_record(&record), MediaTier::T4);
        assert_eq!(MediaClassifier::default().classify_record(&record), MediaTier::T0);
    }

    #[test]
    fn classifies_across_threads() {
        let classifier = MediaClassifier::default();
        let records: Vec<_> = (0..8u64)
            .map(|i| {
                RecordBuilder::new(Some(EdmType::Text))
                    .link(LinkType::IsShownBy, pdf("http://d.pdf", i * 150_000))
                    .build()
            })
            .collect();
        let expected: Vec<_> = records.iter().map(|r| classifier.classify_record(r)).collect();

        let shared = &classifier;
        let parallel: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = records
                .iter()
                .map(|record| scope.spawn(move || shared.classify_record(record)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(parallel, expected);
    }
}
