//! Mediatier data models.
//!
//! Small closed enums: they exist for exhaustive matching in Rust and
//! serialize to the plain labels used in records and facet fields.

pub mod edm;
pub mod media;
pub mod tier;

pub use edm::{EdmType, LinkType};
pub use media::ResourceMediaType;
pub use tier::MediaTier;
