//! Plain text for the clipboard

use crate::parse::osis;
use crate::parse::{Attributes, OsisContentHandler};

use super::canonical::OsisToCanonicalText;

/// Canonical text with an optional `N. ` in front of each verse
#[derive(Debug, Default)]
pub struct OsisToCopyText {
    canonical: OsisToCanonicalText,
    show_verse_numbers: bool,
}

impl OsisToCopyText {
    pub fn new(show_verse_numbers: bool) -> Self {
        Self {
            canonical: OsisToCanonicalText::new(),
            show_verse_numbers,
        }
    }

    pub fn text(&self) -> String {
        self.canonical.text()
    }
}

impl OsisContentHandler for OsisToCopyText {
    fn start_document(&mut self) {
        self.canonical.start_document();
    }

    fn start_element(&mut self, name: &str, attrs: &Attributes) {
        self.canonical.start_element(name, attrs);

        if name == osis::VERSE && self.show_verse_numbers && attrs.is_present(osis::ATTR_OSIS_ID) {
            let verse_no = self.canonical.current_verse_no();
            self.canonical.write(&format!("{}. ", verse_no));
        }
    }

    fn characters(&mut self, text: &str) {
        self.canonical.characters(text);
    }

    fn end_element(&mut self, name: &str) {
        self.canonical.end_element(name);
    }

    fn end_document(&mut self) {
        self.canonical.end_document();
    }
}
