//! Read-only view over one web resource's technical metadata.

use std::collections::BTreeSet;

use crate::models::{LinkType, ResourceMediaType};
use crate::record::{is_blank, Record, WebResource};

/// A web resource together with the roles under which the record links it.
///
/// Only built for resources with a non-blank `about`.
#[derive(Debug, Clone)]
pub struct WebResourceWrapper<'a> {
    resource: &'a WebResource,
    about: &'a str,
    mime_type: Option<String>,
    link_types: BTreeSet<LinkType>,
}

impl<'a> WebResourceWrapper<'a> {
    /// Returns `None` when the resource has a blank `about`.
    pub fn new(resource: &'a WebResource, link_types: BTreeSet<LinkType>) -> Option<Self> {
        let about = resource.about.as_deref().filter(|a| !a.trim().is_empty())?;
        Some(Self {
            resource,
            about,
            mime_type: base_mime_type(resource.mime_type.as_deref()),
            link_types,
        })
    }

    pub fn about(&self) -> &'a str {
        self.about
    }

    /// Base mime type: parameters stripped, trimmed, lower-cased.
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn media_type(&self) -> ResourceMediaType {
        ResourceMediaType::from_mime_type(self.mime_type())
    }

    pub fn width(&self) -> u64 {
        self.resource.width
    }

    pub fn height(&self) -> u64 {
        self.resource.height
    }

    /// Pixel count, `width * height`.
    pub fn size(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    pub fn spatial_resolution(&self) -> u64 {
        self.resource.spatial_resolution
    }

    pub fn link_types(&self) -> &BTreeSet<LinkType> {
        &self.link_types
    }

    pub fn is_landing_page(&self) -> bool {
        self.link_types.contains(&LinkType::IsShownAt)
    }

    pub fn is_shown_by(&self) -> bool {
        self.link_types.contains(&LinkType::IsShownBy)
    }

    pub fn is_object_link(&self) -> bool {
        self.link_types.contains(&LinkType::Object)
    }

    pub fn has_view(&self) -> bool {
        self.link_types.contains(&LinkType::HasView)
    }
}

fn base_mime_type(raw: Option<&str>) -> Option<String> {
    if is_blank(raw) {
        return None;
    }
    let base = raw?.split(';').next()?.trim().to_ascii_lowercase();
    (!base.is_empty()).then_some(base)
}

/// All web resources of the record with a non-blank `about`, in input order.
pub fn extract_web_resources(record: &Record) -> Vec<&WebResource> {
    record
        .web_resources
        .iter()
        .filter(|r| !is_blank(r.about.as_deref()))
        .collect()
}
