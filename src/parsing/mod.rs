//! Shared parsing utilities for all formats.
//!
//! Detectors and parsers of different formats never call each other; the
//! helpers here are the only code they share.

pub mod probe;
pub mod roster;

pub use probe::{file_stem, has_extension, probe_json, strip_bom};
pub use roster::RosterBuilder;
