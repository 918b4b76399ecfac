//! Unified error types for chatimport.
//!
//! This module provides a single [`ImportError`] enum that covers all error
//! cases in the library. The two variants the import pipeline itself produces
//! map onto the two ways an import can fail:
//!
//! - [`ImportError::UnrecognizedFormat`] - no registered format claimed the file
//! - [`ImportError::Format`] - a format claimed the file but could not convert it
//!
//! [`ImportError::Io`] and [`ImportError::Json`] exist for callers (such as
//! the bundled binary) that read files before handing their content to the
//! pipeline and serialize the result afterwards. Detection and parsing never
//! perform I/O themselves.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatimport operations.
///
/// # Example
///
/// ```rust
/// use chatimport::error::Result;
/// use chatimport::ParseResult;
///
/// fn my_function() -> Result<Option<ParseResult>> {
///     Ok(None)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ImportError>;

/// The error type for all chatimport operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ImportError {
    /// No registered format recognized the input.
    ///
    /// Carries the filename supplied by the caller for diagnostics.
    #[error("Unrecognized chat export format: {filename}")]
    UnrecognizedFormat {
        /// The filename the caller supplied
        filename: String,
    },

    /// A format recognized the input but failed to convert it.
    ///
    /// The dispatcher never retries another format after this error.
    #[error("Failed to parse {format} export ({filename}): {source}")]
    Format {
        /// Display name of the format that claimed the file (e.g., "ChatLab JSON")
        format: &'static str,
        /// The filename the caller supplied
        filename: String,
        /// The underlying cause
        #[source]
        source: FormatErrorKind,
    },

    /// An I/O error occurred while reading input outside the pipeline.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Serializing a [`ParseResult`](crate::ParseResult) to JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Kinds of format errors that can occur while parsing.
#[derive(Debug, Error)]
pub enum FormatErrorKind {
    /// The content is not valid JSON, or does not have the expected shape.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// A required field or section is absent.
    #[error("missing required {0}")]
    Missing(String),
    /// A field is present but holds an unusable value.
    #[error("{0}")]
    Invalid(String),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ImportError {
    /// Creates an unrecognized-format error for the given filename.
    pub fn unrecognized(filename: impl Into<String>) -> Self {
        ImportError::UnrecognizedFormat {
            filename: filename.into(),
        }
    }

    /// Creates a format error caused by JSON deserialization.
    pub fn json(
        format: &'static str,
        filename: impl Into<String>,
        source: serde_json::Error,
    ) -> Self {
        ImportError::Format {
            format,
            filename: filename.into(),
            source: FormatErrorKind::Json(source),
        }
    }

    /// Creates a format error for an absent required field.
    pub fn missing(
        format: &'static str,
        filename: impl Into<String>,
        what: impl Into<String>,
    ) -> Self {
        ImportError::Format {
            format,
            filename: filename.into(),
            source: FormatErrorKind::Missing(what.into()),
        }
    }

    /// Creates a format error for a field holding an unusable value.
    pub fn invalid(
        format: &'static str,
        filename: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ImportError::Format {
            format,
            filename: filename.into(),
            source: FormatErrorKind::Invalid(message.into()),
        }
    }

    /// Returns `true` if no registered format recognized the input.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, ImportError::UnrecognizedFormat { .. })
    }

    /// Returns `true` if a recognized input failed to parse.
    pub fn is_format(&self) -> bool {
        matches!(self, ImportError::Format { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ImportError::Io(_))
    }

    /// Returns the name of the format that failed, for [`ImportError::Format`].
    pub fn format_name(&self) -> Option<&'static str> {
        match self {
            ImportError::Format { format, .. } => Some(format),
            _ => None,
        }
    }
}
