//! Error types for graph-tgf operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use thiserror::Error;

/// Result type alias for graph-tgf operations.
pub type Result<T> = std::result::Result<T, TgfError>;

/// Error type for graph construction and export.
///
/// Absent attributes are never errors; only broken graph invariants and
/// writer failures are reported here.
#[derive(Error, Debug)]
pub enum TgfError {
    /// An edge endpoint (or lookup) names a vertex the graph does not contain
    #[error("Vertex not found: {vertex_id}")]
    UnknownVertex {
        /// Display form of the missing vertex identifier
        vertex_id: String,
    },

    /// A vertex identifier was inserted twice
    #[error("Duplicate vertex: {vertex_id}")]
    DuplicateVertex {
        /// Display form of the duplicated vertex identifier
        vertex_id: String,
    },

    /// Writing exported text to the output sink failed
    #[error("I/O error: {message}")]
    Io {
        /// Detailed error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Formatting a line into the output buffer failed
    #[error("Format error: {message}")]
    Format {
        /// Error details
        message: String,
    },
}

impl TgfError {
    /// Create an unknown-vertex error from any displayable identifier.
    pub fn unknown_vertex(id: &impl std::fmt::Display) -> Self {
        Self::UnknownVertex {
            vertex_id: id.to_string(),
        }
    }

    /// Create a duplicate-vertex error from any displayable identifier.
    pub fn duplicate_vertex(id: &impl std::fmt::Display) -> Self {
        Self::DuplicateVertex {
            vertex_id: id.to_string(),
        }
    }

    /// Create an I/O error from a message and optional source.
    pub fn io<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Io {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}

impl From<std::fmt::Error> for TgfError {
    fn from(_: std::fmt::Error) -> Self {
        Self::Format {
            message: "failed to format TGF line".to_string(),
        }
    }
}
