//! OSIS conversion WASM module
//!
//! Converts OSIS scripture markup into the HTML fragments a Bible reader
//! displays, the plain text it indexes, and the commands it speaks.
//! It is usable natively as a library and from JavaScript through `api`.

pub mod models;
pub mod parse;
pub mod references;
pub mod converters;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use converters::{
    convert_osis_to_html,
    convert_to_canonical_text,
    convert_to_copy_text,
    convert_to_speak_commands,
    ConversionError,
    HtmlConversion,
};
pub use models::*;
pub use parse::ParserPool;
pub use references::{OsisReferenceResolver, ReferenceResolver, ResolvedPassage};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            wasm_warn!("Logger already initialized: {}", e);
        }
    }

    log::info!("OSIS conversion WASM module initialized");
}
