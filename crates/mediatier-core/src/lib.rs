//! mediatier-core — media tier classification for metadata records.
//!
//! A record's digital representation is graded `MIN < T0 < T1 < T2 < T4`
//! by rules specific to its declared EDM type.
//!
//! # Architecture
//!
//! ```text
//! Layer 0: Records (JSON documents from the extraction layer)
//! Layer 1: Views (RdfWrapper, WebResourceWrapper, read-only)
//! Layer 2: Rules (audio, image, text, video) over one shared algorithm
//! Layer 3: Agents (CLI, FFI: load records, report tiers)
//! ```

pub mod classify;
pub mod error;
pub mod models;
pub mod rdf;
pub mod record;
pub mod settings;
pub mod web_resource;

pub use classify::{MediaClassifier, TierClassification};
pub use error::{Error, Result};
pub use models::*;
pub use rdf::RdfWrapper;
pub use record::Record;
pub use settings::Settings;
pub use web_resource::WebResourceWrapper;
