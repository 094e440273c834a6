//! Structural type descriptions for LiteMapper.
//!
//! Rust has no runtime reflection, so a mappable type is described through
//! its serde object representation:
//! - [`TypeKey`] — identity-based handle for a concrete type
//! - [`TypeDescriptor`] — a type's key plus how to build, name and validate its fields
//! - [`TypeUniverse`] — a named, ordered group of descriptors (e.g. "Domain", "DTO")
//! - [`Record`] — a dynamically typed instance (type key + field map)
//! - [`ValueKind`] — the coarse shape of a property value
//!
//! The properties of a type are the fields its `Deserialize` impl declares;
//! property values are `serde_json::Value`s.

mod descriptor;
mod fields;
mod key;
mod record;
mod universe;
mod value;

pub use descriptor::TypeDescriptor;
pub use key::TypeKey;
pub use record::Record;
pub use universe::TypeUniverse;
pub use value::ValueKind;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while describing or converting types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("type '{type_name}' has no default constructor")]
    NotConstructible { type_name: String },

    #[error("type '{type_name}' does not serialize to an object (found {found})")]
    NotStructured { type_name: String, found: ValueKind },
}
