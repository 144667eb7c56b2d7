//! TEI elements used by dictionary modules
//!
//! These reuse the OSIS handlers with TEI tag and attribute names.

use crate::converters::osis_to_html::handlers::hi::HiHandler;
use crate::converters::osis_to_html::handlers::reference::ReferenceHandler;
use crate::parse::osis;

/// Headword spelling, bold unless `rend` says otherwise
pub fn orth() -> HiHandler {
    HiHandler::new(osis::TEI_ORTH, osis::TEI_ATTR_REND, "bold")
}

/// Pronunciation, italic unless `rend` says otherwise
pub fn pron() -> HiHandler {
    HiHandler::new(osis::TEI_PRON, osis::TEI_ATTR_REND, "italic")
}

/// `<ref target="...">`
pub fn reference() -> ReferenceHandler {
    ReferenceHandler::new(osis::TEI_REF, osis::TEI_ATTR_TARGET)
}
