//! Push interface between the parser and a conversion

use crate::parse::Attributes;

/// Receives the events of one document, in order.
///
/// Every conversion (HTML, canonical text, speak) implements this trait; the
/// parser drives it. Callers may also drive it by hand when events come from
/// somewhere other than an XML string.
pub trait OsisContentHandler {
    fn start_document(&mut self) {}

    fn start_element(&mut self, name: &str, attrs: &Attributes);

    fn characters(&mut self, text: &str);

    fn end_element(&mut self, name: &str);

    fn end_document(&mut self) {}
}
