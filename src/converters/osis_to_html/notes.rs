//! Side-channel collection of notes found during a conversion

use crate::models::Note;
use crate::utils::html::ELLIPSIS;

#[derive(Debug, Default)]
pub struct NoteCollector {
    notes: Vec<Note>,
    in_note: bool,
    current_note_ref: String,
    /// Generated refs are counted per verse
    generated_count: usize,
    generated_for_verse: u32,
    max_text_length: usize,
}

impl NoteCollector {
    pub fn new(max_text_length: usize) -> Self {
        Self {
            max_text_length,
            ..Self::default()
        }
    }

    /// Enter a note and work out its label: the `n` attribute when given,
    /// otherwise the verse number followed by a, b, c...
    pub fn begin_note(&mut self, n: Option<&str>, verse_no: u32) -> String {
        self.in_note = true;
        self.current_note_ref = match n.map(str::trim).filter(|n| !n.is_empty()) {
            Some(n) => n.to_string(),
            None => self.next_generated_ref(verse_no),
        };
        self.current_note_ref.clone()
    }

    pub fn end_note(&mut self) {
        self.in_note = false;
    }

    pub fn is_in_note(&self) -> bool {
        self.in_note
    }

    pub fn current_note_ref(&self) -> &str {
        &self.current_note_ref
    }

    /// Label for a note that has no note element of its own
    pub fn next_generated_ref(&mut self, verse_no: u32) -> String {
        if verse_no != self.generated_for_verse {
            self.generated_for_verse = verse_no;
            self.generated_count = 0;
        }
        let label = format!("{}{}", verse_no, letters(self.generated_count));
        self.generated_count += 1;
        label
    }

    pub fn add_general(&mut self, verse_no: u32, note_ref: &str, text: &str) {
        let text = self.shorten(text);
        self.notes.push(Note::general(verse_no, note_ref, text));
    }

    pub fn add_cross_reference(&mut self, verse_no: u32, note_ref: &str, text: &str, target: Option<String>) {
        let text = self.shorten(text);
        self.notes.push(Note::cross_reference(verse_no, note_ref, text, target));
    }

    fn shorten(&self, text: &str) -> String {
        let text = text.trim();
        if self.max_text_length == 0 || text.chars().count() <= self.max_text_length {
            return text.to_string();
        }
        let mut shortened: String = text.chars().take(self.max_text_length).collect();
        shortened.push_str(ELLIPSIS);
        shortened
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn into_notes(self) -> Vec<Note> {
        self.notes
    }
}

/// 0 -> a, 25 -> z, 26 -> aa
fn letters(mut index: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push((b'a' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    out.iter().rev().collect()
}
