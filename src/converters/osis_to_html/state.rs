//! Verse and passage state threaded through every handler

/// The verse currently open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerseInfo {
    pub current_verse_no: u32,
    /// Offset just before the verse marker; pre-verse content is inserted here
    pub position_to_insert_before_verse: usize,
    pub is_text_since_verse: bool,
    pub is_verse_open: bool,
}

impl VerseInfo {
    pub fn open(&mut self, verse_no: u32, position_to_insert_before_verse: usize) {
        self.current_verse_no = verse_no;
        self.position_to_insert_before_verse = position_to_insert_before_verse;
        self.is_text_since_verse = false;
        self.is_verse_open = true;
    }

    pub fn close(&mut self) {
        self.is_verse_open = false;
    }
}

/// Passage-wide flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassageInfo {
    pub is_any_text_written: bool,
    /// Count of text runs written so far, used to tell whether a span had content
    pub text_runs: u64,
}

impl PassageInfo {
    pub fn record_text(&mut self) {
        self.is_any_text_written = true;
        self.text_runs += 1;
    }

    /// Marker to compare against later with [`has_text_since`](Self::has_text_since)
    pub fn text_mark(&self) -> u64 {
        self.text_runs
    }

    pub fn has_text_since(&self, mark: u64) -> bool {
        self.text_runs > mark
    }
}
