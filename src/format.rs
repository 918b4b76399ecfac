//! Descriptors identifying supported import formats.
//!
//! A [`FormatDescriptor`] is what the registry hands back for introspection
//! and detect-only calls: a display name plus the platform that produced the
//! export. Descriptors are plain constants owned by each format.
//!
//! # Example
//!
//! ```rust
//! use chatimport::format::FormatDescriptor;
//! use chatimport::model::ChatPlatform;
//!
//! const MY_FORMAT: FormatDescriptor = FormatDescriptor::new("My JSON", ChatPlatform::Unknown);
//!
//! assert_eq!(MY_FORMAT.name, "My JSON");
//! assert_eq!(MY_FORMAT.to_string(), "My JSON (unknown)");
//! ```

use serde::Serialize;

use crate::model::ChatPlatform;

/// Identifies one supported source format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FormatDescriptor {
    /// Human-readable format name (e.g., "ChatLab JSON").
    pub name: &'static str,

    /// Platform the format's exports come from.
    pub platform: ChatPlatform,
}

impl FormatDescriptor {
    /// Creates a descriptor. Usable in `const` context.
    pub const fn new(name: &'static str, platform: ChatPlatform) -> Self {
        Self { name, platform }
    }
}

impl std::fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.platform)
    }
}
