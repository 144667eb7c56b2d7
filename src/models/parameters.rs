//! Options controlling an OSIS to HTML conversion

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::BookmarkStyle;

/// How verse numbers are drawn at the start of each verse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerseNumberStyle {
    /// Zero-width marker only, still usable as a scroll target
    Hidden,
    Inline,
    Superscript,
}

/// Configuration for a single conversion.
///
/// Built once by the caller and passed by reference; handlers only read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OsisToHtmlParameters {
    /// Language of the module, e.g. "he" selects the Hebrew preprocessor
    pub language_code: String,
    pub is_left_to_right: bool,

    /// Commentaries and dictionaries get no verse markers
    pub is_bible: bool,

    /// Emit a bare fragment instead of a full html document
    pub is_as_fragment: bool,

    /// OSIS id of the passage being converted, used in note links
    pub basis_ref: Option<String>,
    pub chapter: Option<u32>,
    pub show_chapter_divider: bool,

    pub show_titles: bool,
    pub show_verse_numbers: bool,
    pub verse_number_style: VerseNumberStyle,
    pub is_verse_per_line: bool,
    /// Number of non-breaking spaces per poetry indent level
    pub indent_depth: usize,

    pub show_notes: bool,
    pub auto_wrap_unwrapped_refs_in_note: bool,
    /// Note text longer than this is shortened; 0 keeps the full text
    pub max_note_text_length: usize,

    pub show_strongs: bool,
    pub show_morphology: bool,
    pub convert_strongs_refs_to_links: bool,

    pub red_letter: bool,

    pub show_bookmarks: bool,
    pub default_bookmark_style: BookmarkStyle,
    pub bookmark_styles_by_verse: HashMap<u32, BTreeSet<BookmarkStyle>>,
    pub show_my_notes: bool,
    pub verses_with_notes: HashSet<u32>,

    pub module_base_path: Option<String>,
    pub css_stylesheets: Vec<String>,
    pub extra_footer: Option<String>,
}

impl Default for OsisToHtmlParameters {
    fn default() -> Self {
        Self {
            language_code: "en".to_string(),
            is_left_to_right: true,
            is_bible: true,
            is_as_fragment: true,
            basis_ref: None,
            chapter: None,
            show_chapter_divider: false,
            show_titles: true,
            show_verse_numbers: true,
            verse_number_style: VerseNumberStyle::Inline,
            is_verse_per_line: false,
            indent_depth: 2,
            show_notes: false,
            auto_wrap_unwrapped_refs_in_note: false,
            max_note_text_length: 0,
            show_strongs: false,
            show_morphology: false,
            convert_strongs_refs_to_links: false,
            red_letter: false,
            show_bookmarks: false,
            default_bookmark_style: BookmarkStyle::default(),
            bookmark_styles_by_verse: HashMap::new(),
            show_my_notes: false,
            verses_with_notes: HashSet::new(),
            module_base_path: None,
            css_stylesheets: Vec::new(),
            extra_footer: None,
        }
    }
}

impl OsisToHtmlParameters {
    /// Parse parameters from a JSON object; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Verse-number style actually in effect
    pub fn effective_verse_number_style(&self) -> VerseNumberStyle {
        if self.show_verse_numbers {
            self.verse_number_style
        } else {
            VerseNumberStyle::Hidden
        }
    }

    /// Styles of bookmarks on a verse, empty unless bookmarks are shown
    pub fn bookmark_styles(&self, verse: u32) -> Vec<BookmarkStyle> {
        if !self.show_bookmarks {
            return Vec::new();
        }
        match self.bookmark_styles_by_verse.get(&verse) {
            Some(styles) if !styles.is_empty() => styles.iter().copied().collect(),
            Some(_) => vec![self.default_bookmark_style],
            None => Vec::new(),
        }
    }

    pub fn has_my_note(&self, verse: u32) -> bool {
        self.show_my_notes && self.verses_with_notes.contains(&verse)
    }
}
