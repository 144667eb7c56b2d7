//! Utility modules for the OSIS conversions
//!
//! This module contains HTML fragment constants and small text helpers.

pub mod html;

// Re-export commonly used types
pub use html::*;
