//! Canonical text: the words of scripture only, for search indexing

use crate::parse::osis::{self, osis_id_to_verse_number};
use crate::parse::{Attributes, OsisContentHandler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentState {
    Write,
    Ignore,
}

/// Collects canonical text.
///
/// Notes and titles are dropped, verses and anything marked
/// `canonical="true"` are kept, and every other element inherits the state
/// of its parent, so an `<hi>` in a verse is kept and one in a note is not.
#[derive(Debug, Default)]
pub struct OsisToCanonicalText {
    states: Vec<ContentState>,
    text: String,
    current_verse_no: u32,
}

impl OsisToCanonicalText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text collected so far with whitespace runs collapsed
    pub fn text(&self) -> String {
        self.text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    pub fn current_verse_no(&self) -> u32 {
        self.current_verse_no
    }

    pub(crate) fn is_writing(&self) -> bool {
        self.states.last().copied().unwrap_or(ContentState::Write) == ContentState::Write
    }

    pub(crate) fn write(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn inherit(&mut self) {
        let state = self.states.last().copied().unwrap_or(ContentState::Write);
        self.states.push(state);
    }
}

impl OsisContentHandler for OsisToCanonicalText {
    fn start_document(&mut self) {
        self.states.clear();
        self.text.clear();
        self.current_verse_no = 0;
        self.states.push(ContentState::Write);
    }

    fn start_element(&mut self, name: &str, attrs: &Attributes) {
        if attrs.is_true(osis::ATTR_CANONICAL) {
            self.states.push(ContentState::Write);
            return;
        }
        match name {
            osis::VERSE => {
                if let Some(verse_no) = attrs.non_empty(osis::ATTR_OSIS_ID).and_then(osis_id_to_verse_number) {
                    self.current_verse_no = verse_no;
                }
                self.states.push(ContentState::Write);
            }
            osis::NOTE | osis::TITLE => self.states.push(ContentState::Ignore),
            // line and paragraph boundaries in poetry would otherwise glue words together
            osis::L | osis::LB | osis::P => {
                self.write(" ");
                self.inherit();
            }
            _ => self.inherit(),
        }
    }

    fn characters(&mut self, text: &str) {
        if self.is_writing() {
            self.write(text);
        }
    }

    fn end_element(&mut self, name: &str) {
        if name == osis::VERSE {
            self.write(" ");
        }
        self.states.pop();
    }

    fn end_document(&mut self) {
        self.states.pop();
        if !self.states.is_empty() {
            log::warn!("Canonical text state stack not empty at end of document: {}", self.states.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::OsisParser;

    fn canonical(xml: &str) -> String {
        let mut handler = OsisToCanonicalText::new();
        OsisParser::new().parse(xml, &mut handler).expect("valid xml");
        handler.text()
    }

    #[test]
    fn test_notes_and_titles_are_dropped() {
        let xml = "<title>The Creation</title><verse osisID='Gen.1.1'>In the beginning\
                   <note n='a'>Or, when God began</note> God created</verse>";
        assert_eq!(canonical(xml), "In the beginning God created");
    }

    #[test]
    fn test_canonical_title_is_kept() {
        let xml = "<title canonical='true'>A Psalm of David.</title><verse osisID='Ps.3.1'>Lord</verse>";
        assert_eq!(canonical(xml), "A Psalm of David. Lord");
    }

    #[test]
    fn test_verses_and_lines_are_separated() {
        let xml = "<verse osisID='Ps.23.1'><l>The LORD is my shepherd;</l><l>I shall not want.</l></verse>\
                   <verse osisID='Ps.23.2'>He maketh</verse>";
        assert_eq!(
            canonical(xml),
            "The LORD is my shepherd; I shall not want. He maketh"
        );
    }

    #[test]
    fn test_nested_formatting_inherits() {
        let xml = "<verse osisID='Gen.1.1'>God <hi type='italic'>created</hi></verse>\
                   <note>see <hi type='bold'>elsewhere</hi></note>";
        assert_eq!(canonical(xml), "God created");
    }

    #[test]
    fn test_tracks_verse_number() {
        let mut handler = OsisToCanonicalText::new();
        OsisParser::new()
            .parse("<verse osisID='Rom.8.28'>And we know</verse>", &mut handler)
            .expect("valid xml");
        assert_eq!(handler.current_verse_no(), 28);
    }
}
