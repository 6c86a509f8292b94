//! Read-only view over a whole record.
//!
//! Hides the aggregation structure: callers ask for the declared type,
//! the thumbnail and landing-page flags, or the web resources linked
//! under a set of roles.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{EdmType, LinkType};
use crate::record::{Aggregation, Record};
use crate::web_resource::{extract_web_resources, WebResourceWrapper};

#[derive(Debug, Clone, Copy)]
pub struct RdfWrapper<'a> {
    record: &'a Record,
}

impl<'a> RdfWrapper<'a> {
    pub fn new(record: &'a Record) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &'a Record {
        self.record
    }

    /// The record's `rdf:about`, if given.
    pub fn about(&self) -> Option<&'a str> {
        self.record.about.as_deref().filter(|a| !a.trim().is_empty())
    }

    /// The single EDM type declared across the proxies. `None` when no proxy
    /// declares a type or when proxies disagree.
    pub fn edm_type(&self) -> Option<EdmType> {
        let types: BTreeSet<EdmType> = self
            .record
            .proxies
            .iter()
            .filter_map(|proxy| proxy.edm_type)
            .collect();
        if types.len() == 1 {
            types.into_iter().next()
        } else {
            None
        }
    }

    /// The Europeana preview resolves to a web resource with technical metadata.
    pub fn has_thumbnails(&self) -> bool {
        let Some(preview) = self
            .record
            .europeana_aggregation
            .as_ref()
            .and_then(|agg| agg.preview.as_deref())
            .filter(|p| !p.trim().is_empty())
        else {
            return false;
        };
        self.all_web_resource_wrappers()
            .iter()
            .filter(|r| r.about() == preview)
            .any(|r| r.mime_type().is_some())
    }

    /// Some `isShownAt` web resource carries technical metadata.
    pub fn has_landing_page(&self) -> bool {
        self.web_resource_wrappers(&[LinkType::IsShownAt])
            .iter()
            .any(|r| r.mime_type().is_some())
    }

    /// Web resources linked under at least one of `types`, in input order.
    /// Each wrapper carries all of its roles, not only the requested ones.
    pub fn web_resource_wrappers(&self, types: &[LinkType]) -> Vec<WebResourceWrapper<'a>> {
        let links = self.links_by_url();
        extract_web_resources(self.record)
            .into_iter()
            .filter_map(|resource| {
                let roles = links.get(resource.about.as_deref()?)?;
                if !types.iter().any(|t| roles.contains(t)) {
                    return None;
                }
                WebResourceWrapper::new(resource, roles.clone())
            })
            .collect()
    }

    /// Every valid web resource, including those the aggregations never link.
    pub fn all_web_resource_wrappers(&self) -> Vec<WebResourceWrapper<'a>> {
        let links = self.links_by_url();
        extract_web_resources(self.record)
            .into_iter()
            .filter_map(|resource| {
                let roles = resource
                    .about
                    .as_deref()
                    .and_then(|about| links.get(about))
                    .cloned()
                    .unwrap_or_default();
                WebResourceWrapper::new(resource, roles)
            })
            .collect()
    }

    fn urls_of_type(&self, link_type: LinkType) -> impl Iterator<Item = &'a str> {
        let record = self.record;
        record
            .aggregations
            .iter()
            .flat_map(move |agg| links_of(agg, link_type))
            .filter(|url| !url.trim().is_empty())
    }

    fn links_by_url(&self) -> BTreeMap<&'a str, BTreeSet<LinkType>> {
        let mut links: BTreeMap<&str, BTreeSet<LinkType>> = BTreeMap::new();
        for link_type in LinkType::ALL {
            for url in self.urls_of_type(link_type) {
                links.entry(url).or_default().insert(link_type);
            }
        }
        links
    }
}

fn links_of(aggregation: &Aggregation, link_type: LinkType) -> Vec<&str> {
    match link_type {
        LinkType::IsShownBy => aggregation.is_shown_by.as_deref().into_iter().collect(),
        LinkType::IsShownAt => aggregation.is_shown_at.as_deref().into_iter().collect(),
        LinkType::Object => aggregation.object.as_deref().into_iter().collect(),
        LinkType::HasView => aggregation.has_view.iter().map(String::as_str).collect(),
    }
}
