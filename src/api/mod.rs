//! OSIS conversion WASM API
//!
//! This module provides the JavaScript-facing API for the conversions.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `convert`: Conversion entry points (HTML, canonical text, copy text, speech, references)

pub mod helpers;
pub mod convert;

// Re-export all public functions to keep a flat API
pub use convert::*;
