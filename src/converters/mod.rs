//! Format converters
//!
//! This module contains the conversions from OSIS to the formats the reader
//! displays, indexes and speaks.

pub mod errors;
pub mod osis_to_html;
pub mod osis_to_speak;
pub mod osis_to_text;

// Re-export for convenience
pub use errors::{ConversionError, ParseError, Result};
pub use osis_to_html::{convert_osis_to_html, convert_osis_to_html_with_pool, HtmlConversion, OsisToHtml};
pub use osis_to_speak::{convert_to_speak_commands, convert_to_speak_commands_with_pool, OsisToBibleSpeak};
pub use osis_to_text::{
    convert_to_canonical_text,
    convert_to_canonical_text_with_pool,
    convert_to_copy_text,
    convert_to_copy_text_with_pool,
    OsisToCanonicalText,
    OsisToCopyText,
};
