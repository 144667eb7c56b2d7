//! Error types for OSIS conversion
//!
//! Only conditions that stop a conversion are errors. Malformed milestones,
//! unsupported tags and unresolvable references are recovered from inside the
//! handlers and logged instead.

use thiserror::Error;

/// Top-level conversion error type
#[derive(Debug, Clone, Error)]
pub enum ConversionError {
    /// Fatal XML parsing error
    #[error("OSIS parsing failed: {0}")]
    Parse(#[from] ParseError),

    /// A streaming parser could not be obtained for this conversion
    #[error("Parser unavailable: {0}")]
    ParserUnavailable(String),

    /// Internal conversion error (should be rare, indicates a bug)
    #[error("Internal conversion error: {0}")]
    Internal(String),
}

/// Fatal XML parsing errors
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Markup the reader cannot continue past
    #[error("Invalid XML at position {position}: {message}")]
    InvalidXml { position: usize, message: String },

    /// Element or attribute names that are not UTF-8
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
