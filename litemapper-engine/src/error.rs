//! Error types for the mapping engine.

use litemapper_types::ValueKind;
use thiserror::Error;

/// Mapping and configuration errors. None of them are retried.
#[derive(Debug, Error)]
pub enum MapError {
    /// The source type has no paired destination type.
    #[error("mapping for '{type_name}' is not configured")]
    ConfigurationMissing { type_name: String },

    /// A registration named a property the type does not declare.
    #[error("'{property}' is not a property of '{type_name}'")]
    PropertySelectorInvalid { type_name: String, property: String },

    /// The destination type cannot be default-constructed.
    #[error("cannot instantiate '{type_name}': {source}")]
    Instantiation {
        type_name: String,
        #[source]
        source: litemapper_types::Error,
    },

    /// A value does not fit the destination property's declared type.
    #[error("type mismatch on '{type_name}.{property}': {found} value rejected: {source}")]
    TypeMismatch {
        type_name: String,
        property: String,
        found: ValueKind,
        #[source]
        source: serde_json::Error,
    },

    /// The caller asked for a type other than the configured counterpart.
    #[error("'{requested}' was requested but the configured counterpart is '{paired}'")]
    UnexpectedDestination { requested: String, paired: String },

    /// A typed transform could not read its input.
    #[error("transform for '{type_name}.{property}' failed: {source}")]
    Transform {
        type_name: String,
        property: String,
        #[source]
        source: serde_json::Error,
    },

    /// The destination type rejected the populated values as a whole.
    #[error("'{type_name}' rejected the mapped values: {source}")]
    Deserialize {
        type_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid naming pattern: {0}")]
    InvalidPattern(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Types(#[from] litemapper_types::Error),
}

/// Result type for mapping operations.
pub type MapResult<T> = Result<T, MapError>;
