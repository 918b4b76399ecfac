//! Ordered registry of import formats and the dispatch entry points.
//!
//! The registry tries formats in registration order and hands the file to
//! the first one whose detector accepts it. Order is the only conflict
//! resolution between formats: register strict, structured formats first and
//! permissive catch-alls last.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "chatlab")]
//! # fn main() -> chatimport::Result<()> {
//! use chatimport::registry::FormatRegistry;
//!
//! let registry = FormatRegistry::new();
//! let content = r#"{"chatlab":{"version":"1.0"},"meta":{"name":"Team"},"members":[],"messages":[]}"#;
//!
//! let format = registry.detect(content, "export.json").unwrap();
//! assert_eq!(format.name, "ChatLab JSON");
//!
//! let result = registry.parse(content, "export.json")?;
//! assert_eq!(result.meta.name.as_deref(), Some("Team"));
//!
//! let err = registry.parse(r#"{"foo":"bar"}"#, "export.json").unwrap_err();
//! assert!(err.is_unrecognized());
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "chatlab"))]
//! # fn main() {}
//! ```

use tracing::{debug, trace};

use crate::config::{QqJsonConfig, QqTxtConfig};
use crate::error::{ImportError, Result};
use crate::format::FormatDescriptor;
use crate::model::ParseResult;
use crate::parser::ChatFormat;

/// Ordered collection of formats, immutable once built.
///
/// Building happens by value ([`with_format`](Self::with_format) consumes and
/// returns the registry), so a constructed registry has no mutating API and
/// can be shared freely across threads.
pub struct FormatRegistry {
    formats: Vec<Box<dyn ChatFormat>>,
}

impl FormatRegistry {
    /// Creates a registry with no formats.
    pub fn empty() -> Self {
        Self {
            formats: Vec::new(),
        }
    }

    /// Creates the default registry: ChatLab JSON, QQ exporter JSON, QQ TXT.
    pub fn new() -> Self {
        Self::with_configs(QqJsonConfig::default(), QqTxtConfig::default())
    }

    /// Creates the default registry with explicit format configuration.
    #[allow(unused_variables, unused_mut)]
    pub fn with_configs(qq_json: QqJsonConfig, qq_txt: QqTxtConfig) -> Self {
        let mut registry = Self::empty();

        #[cfg(feature = "chatlab")]
        {
            registry = registry.with_format(crate::parsers::ChatLabJsonFormat::new());
        }
        #[cfg(feature = "qq-json")]
        {
            registry = registry.with_format(crate::parsers::QqJsonFormat::with_config(qq_json));
        }
        // Catch-all, must stay last
        #[cfg(feature = "qq-txt")]
        {
            registry = registry.with_format(crate::parsers::QqTxtFormat::with_config(qq_txt));
        }

        registry
    }

    /// Appends a format after every format registered so far.
    #[must_use]
    pub fn with_format(mut self, format: impl ChatFormat + 'static) -> Self {
        self.formats.push(Box::new(format));
        self
    }

    /// Returns the first format whose detector accepts the input.
    pub fn resolve(&self, content: &str, filename: &str) -> Option<&dyn ChatFormat> {
        let found = self
            .formats
            .iter()
            .map(|format| &**format)
            .find(|format| {
                let accepted = format.detect(content, filename);
                if !accepted {
                    trace!(format = format.name(), filename, "detector rejected input");
                }
                accepted
            });

        match found {
            Some(format) => debug!(format = format.name(), filename, "format detected"),
            None => debug!(filename, "no format detected"),
        }
        found
    }

    /// Detect-only entry point: identifies the format without parsing.
    pub fn detect(&self, content: &str, filename: &str) -> Option<FormatDescriptor> {
        self.resolve(content, filename).map(|format| format.descriptor())
    }

    /// Detects the format and parses the input with it.
    ///
    /// The chosen format's parser runs exactly once. Its error is returned
    /// unchanged; no other format is tried after a parse failure.
    ///
    /// # Errors
    ///
    /// - [`ImportError::UnrecognizedFormat`] if no detector accepts the input
    /// - [`ImportError::Format`] if the detected format fails to parse it
    pub fn parse(&self, content: &str, filename: &str) -> Result<ParseResult> {
        let format = self
            .resolve(content, filename)
            .ok_or_else(|| ImportError::unrecognized(filename))?;
        format.parse(content, filename)
    }

    /// Lists registered formats in priority order.
    pub fn supported_formats(&self) -> Vec<FormatDescriptor> {
        self.formats.iter().map(|f| f.descriptor()).collect()
    }

    /// Number of registered formats.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Returns `true` if no formats are registered.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.supported_formats())
            .finish()
    }
}
