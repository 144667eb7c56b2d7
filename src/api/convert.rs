//! Conversion operations for the WASM API
//!
//! - `convertOsisToHtml`: HTML fragment plus notes for the reading view
//! - `convertOsisToCanonicalText`: scripture words only, for the search index
//! - `convertOsisToCopyText`: clipboard text
//! - `convertOsisToSpeakCommands`: commands for text-to-speech
//! - `parseReference`: resolve a reference to OSIS ranges and a display name

use wasm_bindgen::prelude::*;

use crate::api::helpers::{conversion_error, deserialize_or_default, serialize};
use crate::converters::{convert_osis_to_html, convert_to_canonical_text, convert_to_copy_text, convert_to_speak_commands};
use crate::models::{OsisToHtmlParameters, SpeakSettings};
use crate::references::{OsisReferenceResolver, ReferenceResolver};
use crate::{wasm_info, wasm_log};

/// Convert an OSIS document to HTML
///
/// # Parameters
/// * `xml` - OSIS markup of one chapter, passage or dictionary entry
/// * `params` - `OsisToHtmlParameters` as a JS object (camelCase); `undefined` for defaults
///
/// # Returns
/// `{ html: string, notes: Note[] }`
#[wasm_bindgen(js_name = convertOsisToHtml)]
pub fn convert_osis_to_html_js(xml: &str, params: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("convertOsisToHtml called: {} bytes", xml.len());

    let params: OsisToHtmlParameters = deserialize_or_default(params, "Invalid conversion parameters")?;
    let conversion = convert_osis_to_html(xml, &params, &OsisReferenceResolver)
        .map_err(|e| conversion_error(e, "OSIS to HTML conversion failed"))?;

    wasm_log!("  html: {} bytes, notes: {}", conversion.html.len(), conversion.notes.len());
    serialize(&conversion, "Failed to serialize conversion result")
}

#[wasm_bindgen(js_name = convertOsisToCanonicalText)]
pub fn convert_osis_to_canonical_text_js(xml: &str) -> Result<String, JsValue> {
    wasm_info!("convertOsisToCanonicalText called: {} bytes", xml.len());
    convert_to_canonical_text(xml).map_err(|e| conversion_error(e, "Canonical text conversion failed"))
}

#[wasm_bindgen(js_name = convertOsisToCopyText)]
pub fn convert_osis_to_copy_text_js(xml: &str, show_verse_numbers: bool) -> Result<String, JsValue> {
    wasm_info!("convertOsisToCopyText called: {} bytes", xml.len());
    convert_to_copy_text(xml, show_verse_numbers).map_err(|e| conversion_error(e, "Copy text conversion failed"))
}

/// Convert an OSIS document to speak commands
///
/// # Returns
/// Array of `{ type: "text" | "paragraphChange" | ..., ... }`
#[wasm_bindgen(js_name = convertOsisToSpeakCommands)]
pub fn convert_osis_to_speak_commands_js(xml: &str, settings: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("convertOsisToSpeakCommands called: {} bytes", xml.len());

    let settings: SpeakSettings = deserialize_or_default(settings, "Invalid speak settings")?;
    let commands = convert_to_speak_commands(xml, &settings)
        .map_err(|e| conversion_error(e, "Speak conversion failed"))?;

    wasm_log!("  {} speak commands", commands.len());
    serialize(&commands, "Failed to serialize speak commands")
}

/// Resolve a reference such as `Gen.1.1-Gen.1.3` or `John 3:16`
///
/// # Returns
/// The resolved passage, or `null` when the reference is not understood
#[wasm_bindgen(js_name = parseReference)]
pub fn parse_reference_js(reference: &str) -> Result<JsValue, JsValue> {
    match OsisReferenceResolver.resolve(reference) {
        Some(passage) => serialize(&passage, "Failed to serialize passage"),
        None => {
            wasm_log!("parseReference: '{}' not understood", reference);
            Ok(JsValue::NULL)
        }
    }
}
