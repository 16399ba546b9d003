//! Translation source files.

/// Translation trees parsed from JSON
pub mod translation;
