//! Record builders for classifier tests.

use crate::models::{EdmType, LinkType};
use crate::record::{Aggregation, EuropeanaAggregation, Proxy, Record, WebResource};

pub(crate) fn web_resource(about: &str, mime_type: Option<&str>) -> WebResource {
    WebResource {
        about: Some(about.to_string()),
        mime_type: mime_type.map(String::from),
        ..Default::default()
    }
}

pub(crate) fn image(about: &str, width: u64, height: u64) -> WebResource {
    WebResource {
        width,
        height,
        ..web_resource(about, Some("image/jpeg"))
    }
}

pub(crate) fn video(about: &str, height: u64) -> WebResource {
    WebResource {
        height,
        ..web_resource(about, Some("video/mp4"))
    }
}

pub(crate) fn pdf(about: &str, spatial_resolution: u64) -> WebResource {
    WebResource {
        spatial_resolution,
        ..web_resource(about, Some("application/pdf"))
    }
}

/// Builds a record with a single provider aggregation.
pub(crate) struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub(crate) fn new(edm_type: Option<EdmType>) -> Self {
        Self {
            record: Record {
                about: Some("/test/record".into()),
                proxies: vec![Proxy {
                    edm_type,
                    ..Default::default()
                }],
                aggregations: vec![Aggregation::default()],
                ..Default::default()
            },
        }
    }

    /// Add a web resource linked under `link_type`.
    pub(crate) fn link(mut self, link_type: LinkType, resource: WebResource) -> Self {
        let url = resource.about.clone().unwrap_or_default();
        let aggregation = &mut self.record.aggregations[0];
        match link_type {
            LinkType::IsShownBy => aggregation.is_shown_by = Some(url),
            LinkType::IsShownAt => aggregation.is_shown_at = Some(url),
            LinkType::Object => aggregation.object = Some(url),
            LinkType::HasView => aggregation.has_view.push(url),
        }
        self.resource(resource)
    }

    pub(crate) fn resource(mut self, resource: WebResource) -> Self {
        if !self.record.web_resources.contains(&resource) {
            self.record.web_resources.push(resource);
        }
        self
    }

    /// Add a thumbnail: preview link plus a web resource with a mime type.
    pub(crate) fn thumbnail(mut self, url: &str) -> Self {
        self.record.europeana_aggregation = Some(EuropeanaAggregation {
            preview: Some(url.to_string()),
            ..Default::default()
        });
        self.resource(web_resource(url, Some("image/jpeg")))
    }

    pub(crate) fn build(self) -> Record {
        self.record
    }
}
