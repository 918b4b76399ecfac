//! # chatimport
//!
//! A Rust library for recognizing exported chat logs and normalizing them
//! into one shared model.
//!
//! ## Overview
//!
//! chatimport takes the decoded text of an exported chat file plus its
//! filename, figures out which known export format it is, and converts it
//! into a [`ParseResult`]: conversation metadata, a member roster and an
//! ordered message list. Supported formats:
//! - **ChatLab JSON** - ChatLab's own unified export
//! - **QQ Chat Exporter JSON** - JSON written by the QQ chat exporter tool
//! - **QQ TXT** - plain-text export of the QQ desktop client
//!
//! Formats are tried in a fixed priority order and the first one whose
//! detector accepts the file parses it. Detection never fails; parsing is
//! strict and reports [`ImportError::Format`] instead of guessing.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "chatlab")]
//! # fn main() -> chatimport::Result<()> {
//! use chatimport::prelude::*;
//!
//! let registry = FormatRegistry::new();
//! let content = r#"{
//!     "chatlab": {"version": "1.0"},
//!     "meta": {"name": "Team", "platform": "qq", "type": "group"},
//!     "members": [{"platformId": "u1", "name": "Alice"}],
//!     "messages": [
//!         {"sender": "u1", "name": "Alice", "timestamp": 1700000000, "type": "text", "content": "hi"}
//!     ]
//! }"#;
//!
//! let result = registry.parse(content, "export.json")?;
//! assert_eq!(result.meta.platform, ChatPlatform::Qq);
//! assert_eq!(result.messages[0].content.as_deref(), Some("hi"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "chatlab"))]
//! # fn main() {}
//! ```
//!
//! ## Detect Without Parsing
//!
//! ```rust
//! use chatimport::FormatRegistry;
//!
//! let registry = FormatRegistry::new();
//! assert!(registry.detect(r#"{"foo":"bar"}"#, "export.json").is_none());
//! ```
//!
//! ## Module Structure
//!
//! - [`model`] - Normalized output: [`ParseResult`], [`Message`](model::Message), [`Member`](model::Member)
//! - [`parser`] - The [`ChatFormat`] trait every format implements
//! - [`format`] - [`FormatDescriptor`] identifying a format
//! - [`parsers`] - Built-in formats
//! - [`registry`] - [`FormatRegistry`], the ordered dispatcher
//! - [`config`] - Per-format options
//! - [`parsing`] - Probing helpers shared by detectors and parsers
//! - [`error`] - [`ImportError`] and [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod parser;
pub mod parsers;
pub mod parsing;
pub mod registry;

// Re-export the main types at the crate root for convenience
pub use error::{ImportError, Result};
pub use format::FormatDescriptor;
pub use model::ParseResult;
pub use parser::ChatFormat;
pub use registry::FormatRegistry;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatimport::prelude::*;
/// ```
pub mod prelude {
    // Pipeline
    pub use crate::format::FormatDescriptor;
    pub use crate::parser::ChatFormat;
    pub use crate::registry::FormatRegistry;

    // Normalized model
    pub use crate::model::{ChatPlatform, ChatType, ConversationMeta, Member, Message, ParseResult};

    // Configuration
    pub use crate::config::{QqJsonConfig, QqTxtConfig};

    // Errors
    pub use crate::error::{FormatErrorKind, ImportError, Result};

    // Built-in formats
    #[cfg(feature = "chatlab")]
    pub use crate::parsers::ChatLabJsonFormat;
    #[cfg(feature = "qq-json")]
    pub use crate::parsers::QqJsonFormat;
    #[cfg(feature = "qq-txt")]
    pub use crate::parsers::QqTxtFormat;
}
