//! Configuration types for import formats.
//!
//! Formats that expose choices take a config struct at construction. The
//! registry is built once from these and never reconfigured afterwards.
//!
//! - [`QqJsonConfig`] - QQ chat exporter JSON settings
//! - [`QqTxtConfig`] - QQ desktop TXT settings
//!
//! # Example
//!
//! ```rust
//! use chatimport::config::{QqJsonConfig, QqTxtConfig};
//! use chatimport::registry::FormatRegistry;
//!
//! let registry = FormatRegistry::with_configs(
//!     QqJsonConfig::new().with_prefer_group_card(true),
//!     QqTxtConfig::new().with_skip_system_messages(true),
//! );
//! assert_eq!(registry.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for QQ chat exporter JSON parsing.
///
/// # Example
///
/// ```rust
/// use chatimport::config::QqJsonConfig;
///
/// let config = QqJsonConfig::new().with_prefer_group_card(true);
/// assert!(config.prefer_group_card);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QqJsonConfig {
    /// Use the sender's group card (group nickname) as display name when
    /// present (default: false)
    pub prefer_group_card: bool,
}

impl QqJsonConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether group cards take precedence over account names.
    #[must_use]
    pub fn with_prefer_group_card(mut self, prefer: bool) -> Self {
        self.prefer_group_card = prefer;
        self
    }
}

/// Configuration for QQ desktop TXT parsing.
///
/// # Example
///
/// ```rust
/// use chatimport::config::QqTxtConfig;
///
/// let config = QqTxtConfig::new().with_sample_lines(50);
/// assert_eq!(config.sample_lines, 50);
/// assert!(!config.skip_system_messages);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QqTxtConfig {
    /// Number of non-empty lines the detector inspects for a message header
    /// (default: 20)
    pub sample_lines: usize,

    /// Drop messages sent by the QQ system account instead of importing them
    /// with type `"system"` (default: false)
    pub skip_system_messages: bool,
}

impl Default for QqTxtConfig {
    fn default() -> Self {
        Self {
            sample_lines: 20,
            skip_system_messages: false,
        }
    }
}

impl QqTxtConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many non-empty lines the detector samples.
    #[must_use]
    pub fn with_sample_lines(mut self, lines: usize) -> Self {
        self.sample_lines = lines;
        self
    }

    /// Sets whether system messages are dropped.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }
}
