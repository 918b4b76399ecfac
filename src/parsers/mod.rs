//! Built-in import formats.
//!
//! Each format implements [`ChatFormat`](crate::parser::ChatFormat).
//!
//! # Available Formats
//!
//! Listed in the order the default registry tries them:
//!
//! - [`ChatLabJsonFormat`] - ChatLab's own JSON export
//! - [`QqJsonFormat`] - JSON from the QQ chat exporter tool
//! - [`QqTxtFormat`] - QQ desktop client TXT export (catch-all)
//!
//! # Example
//!
//! ```rust
//! use chatimport::parser::ChatFormat;
//! use chatimport::parsers::QqTxtFormat;
//!
//! let format = QqTxtFormat::new();
//! assert_eq!(format.name(), "QQ TXT");
//! ```

#[cfg(feature = "chatlab")]
mod chatlab;
#[cfg(feature = "qq-json")]
mod qq_json;
#[cfg(feature = "qq-txt")]
mod qq_txt;

#[cfg(feature = "chatlab")]
pub use chatlab::ChatLabJsonFormat;
#[cfg(feature = "qq-json")]
pub use qq_json::QqJsonFormat;
#[cfg(feature = "qq-txt")]
pub use qq_txt::QqTxtFormat;
