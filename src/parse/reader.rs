//! Streaming OSIS reader built on quick-xml
//!
//! Turns an XML string into [`OsisContentHandler`] calls. Empty elements are
//! reported as a start immediately followed by an end, so milestone tags such
//! as `<div sID="p1" type="paragraph"/>` reach handlers the same way a
//! streaming SAX parser would deliver them.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::converters::errors::{ParseError, Result};
use crate::parse::{Attributes, OsisContentHandler};

/// A reusable parser. Holds the event buffer between documents.
///
/// Not shareable between threads while in use; obtain one per conversion from
/// a [`crate::parse::ParserPool`].
#[derive(Debug, Default)]
pub struct OsisParser {
    buf: Vec<u8>,
    documents_parsed: usize,
}

impl OsisParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents this instance has parsed
    pub fn documents_parsed(&self) -> usize {
        self.documents_parsed
    }

    /// Parse one document, pushing its events into `handler`.
    ///
    /// End tags are not required to match their start tags; OSIS fragments
    /// cut out of a larger document are common.
    pub fn parse<H>(&mut self, xml: &str, handler: &mut H) -> Result<()>
    where
        H: OsisContentHandler + ?Sized,
    {
        let mut reader = Reader::from_reader(xml.as_bytes());
        reader.trim_text(false);
        reader.check_end_names(false);
        reader.expand_empty_elements(false);

        self.buf.clear();
        self.documents_parsed += 1;
        handler.start_document();

        loop {
            match reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(ref e)) => {
                    let name = element_name(e)?;
                    let attrs = read_attributes(e);
                    handler.start_element(&name, &attrs);
                }
                Ok(Event::Empty(ref e)) => {
                    let name = element_name(e)?;
                    let attrs = read_attributes(e);
                    handler.start_element(&name, &attrs);
                    handler.end_element(&name);
                }
                Ok(Event::End(ref e)) => {
                    let name = std::str::from_utf8(e.local_name().as_ref())
                        .map_err(|err| ParseError::InvalidEncoding(err.to_string()))?
                        .to_string();
                    handler.end_element(&name);
                }
                Ok(Event::Text(ref t)) => {
                    let text = t
                        .unescape_with(resolve_html_entity)
                        .unwrap_or_else(|_| String::from_utf8_lossy(t).into_owned().into());
                    if !text.is_empty() {
                        handler.characters(&text);
                    }
                }
                Ok(Event::CData(ref c)) => {
                    let text = String::from_utf8_lossy(c);
                    handler.characters(&text);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ParseError::InvalidXml {
                        position: reader.buffer_position(),
                        message: e.to_string(),
                    }
                    .into())
                }
                _ => {}
            }
            self.buf.clear();
        }

        handler.end_document();
        Ok(())
    }
}

fn element_name(e: &BytesStart) -> Result<String> {
    std::str::from_utf8(e.local_name().as_ref())
        .map(str::to_string)
        .map_err(|err| ParseError::InvalidEncoding(err.to_string()).into())
}

/// Collect attributes by local name. Unreadable attributes are skipped.
fn read_attributes(e: &BytesStart) -> Attributes {
    let mut attrs = Attributes::new();
    for attr in e.attributes().with_checks(false) {
        match attr {
            Ok(attr) => {
                let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
                let value = attr
                    .unescape_value()
                    .map(Cow::into_owned)
                    .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned());
                attrs.insert(key, value);
            }
            Err(err) => log::debug!("Skipping unreadable attribute: {}", err),
        }
    }
    attrs
}

/// XML entities plus the HTML ones that turn up in OSIS text
fn resolve_html_entity(entity: &str) -> Option<&'static str> {
    match entity {
        "amp" => Some("&"),
        "lt" => Some("<"),
        "gt" => Some(">"),
        "quot" => Some("\""),
        "apos" => Some("'"),
        "nbsp" => Some("\u{a0}"),
        "ndash" => Some("\u{2013}"),
        "mdash" => Some("\u{2014}"),
        "lsquo" => Some("\u{2018}"),
        "rsquo" => Some("\u{2019}"),
        "ldquo" => Some("\u{201c}"),
        "rdquo" => Some("\u{201d}"),
        "hellip" => Some("\u{2026}"),
        _ => None,
    }
}
