//! OSIS to speech
//!
//! Produces the [`SpeakCommand`]s a text-to-speech engine plays for a
//! passage: text to read, titles, paragraph changes and pauses.

pub mod bible_speak;
pub mod commands;

pub use bible_speak::OsisToBibleSpeak;
pub use commands::SpeakCommandList;

use crate::converters::errors::Result;
use crate::models::{SpeakCommand, SpeakSettings};
use crate::parse::{shared_pool, ParserPool};

pub fn convert_to_speak_commands(xml: &str, settings: &SpeakSettings) -> Result<Vec<SpeakCommand>> {
    convert_to_speak_commands_with_pool(xml, settings, shared_pool())
}

pub fn convert_to_speak_commands_with_pool(
    xml: &str,
    settings: &SpeakSettings,
    pool: &ParserPool,
) -> Result<Vec<SpeakCommand>> {
    let mut handler = OsisToBibleSpeak::new(settings);
    pool.with_parser(|parser| parser.parse(xml, &mut handler))?;
    Ok(handler.into_commands())
}
