//! The trait every import format implements.
//!
//! A format is a pair of operations over raw text:
//!
//! - [`detect`](ChatFormat::detect) - a cheap, total predicate: "does this look like me?"
//! - [`parse`](ChatFormat::parse) - a strict conversion into [`ParseResult`]
//!
//! The two are implemented independently. A detector only has to be
//! conservative enough not to steal files from formats registered after it;
//! a parser re-validates everything it needs and fails with
//! [`ImportError::Format`](crate::ImportError::Format) on any deviation.
//!
//! # Example Implementation
//!
//! ```rust
//! use chatimport::format::FormatDescriptor;
//! use chatimport::model::{ChatPlatform, ConversationMeta, ParseResult};
//! use chatimport::parser::ChatFormat;
//! use chatimport::Result;
//!
//! struct EmptyLog;
//!
//! impl ChatFormat for EmptyLog {
//!     fn descriptor(&self) -> FormatDescriptor {
//!         FormatDescriptor::new("Empty log", ChatPlatform::Unknown)
//!     }
//!
//!     fn detect(&self, content: &str, filename: &str) -> bool {
//!         filename.ends_with(".log") && content.trim().is_empty()
//!     }
//!
//!     fn parse(&self, _content: &str, _filename: &str) -> Result<ParseResult> {
//!         Ok(ParseResult::new(ConversationMeta::default(), vec![], vec![]))
//!     }
//! }
//!
//! assert!(EmptyLog.detect("", "a.log"));
//! assert_eq!(EmptyLog.name(), "Empty log");
//! ```

use crate::error::Result;
use crate::format::FormatDescriptor;
use crate::model::{ChatPlatform, ParseResult};

/// One supported chat export format.
///
/// Implementations must be stateless with respect to calls: detecting or
/// parsing the same input twice yields the same answer.
pub trait ChatFormat: Send + Sync {
    /// Returns the descriptor identifying this format.
    fn descriptor(&self) -> FormatDescriptor;

    /// Returns `true` if `content` (read from a file named `filename`) is an
    /// instance of this format.
    ///
    /// Must never panic and never fail: any internal error is a `false`.
    fn detect(&self, content: &str, filename: &str) -> bool;

    /// Converts content into the normalized model.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Format`](crate::ImportError::Format) if the
    /// content cannot be deserialized or lacks required fields.
    fn parse(&self, content: &str, filename: &str) -> Result<ParseResult>;

    /// Returns the human-readable name of this format.
    fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// Returns the platform this format's exports come from.
    fn platform(&self) -> ChatPlatform {
        self.descriptor().platform
    }
}
