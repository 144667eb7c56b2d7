//! Notes extracted from the text during conversion
//!
//! Footnotes and cross-references never appear inline in the HTML. They are
//! collected as [`Note`] records and handed back next to the HTML so that a
//! footnotes screen can list them.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Kind of note, serialized as a small integer for the JS side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum NoteType {
    General = 0,
    CrossReference = 1,
}

/// A footnote or cross-reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Verse that was open when the note was found
    pub verse_number: u32,

    /// Label shown in the body text, e.g. "1a"
    pub reference: String,

    /// Note text, or the display name of the target for cross-references
    pub body_text: String,

    pub kind: NoteType,

    /// OSIS reference a cross-reference navigates to
    pub target_key: Option<String>,
}

impl Note {
    pub fn general(verse_number: u32, reference: impl Into<String>, body_text: impl Into<String>) -> Self {
        Self {
            verse_number,
            reference: reference.into(),
            body_text: body_text.into(),
            kind: NoteType::General,
            target_key: None,
        }
    }

    pub fn cross_reference(
        verse_number: u32,
        reference: impl Into<String>,
        body_text: impl Into<String>,
        target_key: Option<String>,
    ) -> Self {
        Self {
            verse_number,
            reference: reference.into(),
            body_text: body_text.into(),
            kind: NoteType::CrossReference,
            target_key,
        }
    }

    /// Reference to navigate to when the note is selected.
    ///
    /// Cross-references without a resolvable key fall back to their own text.
    pub fn navigation_target(&self) -> Option<&str> {
        match self.kind {
            NoteType::General => None,
            NoteType::CrossReference => Some(self.target_key.as_deref().unwrap_or(&self.body_text)),
        }
    }

    pub fn is_navigable(&self) -> bool {
        self.kind == NoteType::CrossReference
    }
}
