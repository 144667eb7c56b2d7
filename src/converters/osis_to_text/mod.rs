//! OSIS to plain text
//!
//! - `canonical`: scripture words only, used to build search indexes
//! - `copy_text`: canonical text for the clipboard, optionally numbered

pub mod canonical;
pub mod copy_text;

pub use canonical::OsisToCanonicalText;
pub use copy_text::OsisToCopyText;

use crate::converters::errors::Result;
use crate::parse::{shared_pool, ParserPool};

pub fn convert_to_canonical_text(xml: &str) -> Result<String> {
    convert_to_canonical_text_with_pool(xml, shared_pool())
}

pub fn convert_to_canonical_text_with_pool(xml: &str, pool: &ParserPool) -> Result<String> {
    let mut handler = OsisToCanonicalText::new();
    pool.with_parser(|parser| parser.parse(xml, &mut handler))?;
    Ok(handler.text())
}

pub fn convert_to_copy_text(xml: &str, show_verse_numbers: bool) -> Result<String> {
    convert_to_copy_text_with_pool(xml, show_verse_numbers, shared_pool())
}

pub fn convert_to_copy_text_with_pool(xml: &str, show_verse_numbers: bool, pool: &ParserPool) -> Result<String> {
    let mut handler = OsisToCopyText::new(show_verse_numbers);
    pool.with_parser(|parser| parser.parse(xml, &mut handler))?;
    Ok(handler.text())
}
