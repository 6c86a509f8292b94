//! Parsed record input: the documents the extraction layer hands over.
//!
//! A record is plain JSON: proxies declaring the EDM type, aggregations
//! linking web resources by role, the Europeana aggregation with its
//! preview, and the technical metadata of each web resource.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::models::EdmType;

/// One metadata record as produced by the extraction layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub proxies: Vec<Proxy>,
    #[serde(default)]
    pub aggregations: Vec<Aggregation>,
    #[serde(default)]
    pub europeana_aggregation: Option<EuropeanaAggregation>,
    #[serde(default)]
    pub web_resources: Vec<WebResource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Proxy {
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub edm_type: Option<EdmType>,
}

/// Provider aggregation: carries the links to the record's web resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub is_shown_by: Option<String>,
    #[serde(default)]
    pub is_shown_at: Option<String>,
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub has_view: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EuropeanaAggregation {
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub preview: Option<String>,
}

/// Technical metadata of one web resource. Numbers default to 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebResource {
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default, deserialize_with = "non_negative")]
    pub width: u64,
    #[serde(default, deserialize_with = "non_negative")]
    pub height: u64,
    #[serde(default, deserialize_with = "non_negative")]
    pub spatial_resolution: u64,
}

/// Accepts any JSON number. Negatives clamp to 0, fractions truncate.
fn non_negative<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(0);
    };
    if let Some(value) = number.as_u64() {
        return Ok(value);
    }
    match number.as_f64() {
        Some(value) if value >= 0.0 => Ok(value as u64),
        _ => {
            log::warn!("mediatier: clamping negative technical metadata value {} to 0", number);
            Ok(0)
        }
    }
}

impl Record {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// A record file picked up by [`scan_directory`], with its load outcome.
#[derive(Debug)]
pub struct LoadedRecord {
    pub path: PathBuf,
    pub record: Result<Record>,
}

/// Read one JSON record from disk.
pub fn load_record(path: impl AsRef<Path>) -> Result<Record> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Record::from_json(&json)
}

/// Walk a directory tree and load every `*.json` record in it, sorted by path.
///
/// Unreadable or malformed files keep their error; one bad file does not
/// abort the batch.
pub fn scan_directory(dir_path: impl AsRef<Path>) -> Vec<LoadedRecord> {
    let mut found = Vec::new();
    collect_json_files(dir_path.as_ref(), 0, &mut found);
    found.sort();
    found
        .into_iter()
        .map(|path| {
            let record = load_record(&path);
            if let Err(e) = &record {
                log::warn!("mediatier: skipping {}: {}", path.display(), e);
            }
            LoadedRecord { path, record }
        })
        .collect()
}

const MAX_SCAN_DEPTH: usize = 32;

fn collect_json_files(path: &Path, depth: usize, found: &mut Vec<PathBuf>) {
    if depth > MAX_SCAN_DEPTH {
        log::warn!("mediatier: scan depth limit reached at {}", path.display());
        return;
    }
    if !path.is_dir() {
        return;
    }

    let Ok(entries) = std::fs::read_dir(path) else {
        log::warn!("mediatier: cannot list {}", path.display());
        return;
    };

    for entry in entries.flatten() {
        let entry_path = entry.path();

        // Skip directory symlinks to prevent loops
        let is_symlink = std::fs::symlink_metadata(&entry_path)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false);

        if entry_path.is_file() {
            let is_json = entry_path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("json"));
            if is_json {
                found.push(entry_path);
            }
        } else if entry_path.is_dir() && !is_symlink {
            collect_json_files(&entry_path, depth + 1, found);
        }
    }
}
