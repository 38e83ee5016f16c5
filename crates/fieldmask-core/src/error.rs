//! Error types for field mask computation.

use thiserror::Error;

/// Errors that can occur while computing field mask paths.
///
/// Only [`FieldMaskError::UnknownType`] is expected in normal operation. The
/// unknown field and unknown fragment variants describe documents that could
/// not have passed validation against the schema; they are reported instead
/// of being skipped so that no partial mask is ever produced.
#[derive(Debug, Error)]
pub enum FieldMaskError {
    /// The type name does not exist or is not an object type.
    #[error("Unknown object type: {name}")]
    UnknownType { name: String },

    /// A selected field is not defined on its parent type.
    #[error("Field {field_name} is not defined on type {type_name}")]
    UnknownField {
        type_name: String,
        field_name: String,
    },

    /// A fragment spread references a fragment missing from the document.
    #[error("Unknown fragment: {name}")]
    UnknownFragment { name: String },

    /// A fragment spreads itself, directly or through other fragments.
    #[error("Fragment {name} spreads itself")]
    FragmentCycle { name: String },

    /// The schema SDL could not be parsed.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// The query document could not be parsed or lacks the requested operation.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// A response path does not point at a field of the operation.
    #[error("No field at response path: {0}")]
    FieldNotFound(String),

    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FieldMaskError {
    /// Create a new UnknownType error
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType { name: name.into() }
    }

    /// Create a new UnknownField error
    pub fn unknown_field(type_name: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self::UnknownField {
            type_name: type_name.into(),
            field_name: field_name.into(),
        }
    }

    /// Create a new UnknownFragment error
    pub fn unknown_fragment(name: impl Into<String>) -> Self {
        Self::UnknownFragment { name: name.into() }
    }

    /// Returns the error code for GraphQL error extensions.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownType { .. } => "UNKNOWN_TYPE",
            Self::UnknownField { .. } => "UNKNOWN_FIELD",
            Self::UnknownFragment { .. } => "UNKNOWN_FRAGMENT",
            Self::FragmentCycle { .. } => "FRAGMENT_CYCLE",
            Self::InvalidSchema(_) => "INVALID_SCHEMA",
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::FieldNotFound(_) => "FIELD_NOT_FOUND",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

/// Result type for field mask operations.
pub type Result<T> = std::result::Result<T, FieldMaskError>;
