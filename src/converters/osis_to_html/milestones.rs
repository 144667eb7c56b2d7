//! Correlation of start and end milestones
//!
//! A milestone start (`sID`) registers a pending span under its id; the end
//! (`eID`) with the same id takes it back out. Ends whose id was never
//! opened, or was already closed, find nothing and are ignored.

/// What a pending milestone will do when it closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingSpan {
    /// Paragraph opened when `text_mark` text runs had been written
    Paragraph { text_mark: u64 },
    /// Pre-verse content being inserted before the verse marker
    PreVerse { inserting: bool },
}

#[derive(Debug, Default)]
pub struct MilestoneRegistry {
    // Kept in open order so that flushing is deterministic
    open: Vec<(String, PendingSpan)>,
}

impl MilestoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a start milestone. Reopening an id that is still open replaces it.
    pub fn open(&mut self, id: &str, span: PendingSpan) {
        if let Some(entry) = self.open.iter_mut().find(|(open_id, _)| open_id == id) {
            log::debug!("Milestone {} opened twice", id);
            entry.1 = span;
            return;
        }
        self.open.push((id.to_string(), span));
    }

    /// Remove and return the span for an end milestone
    pub fn close(&mut self, id: &str) -> Option<PendingSpan> {
        let index = self.open.iter().position(|(open_id, _)| open_id == id);
        match index {
            Some(index) => Some(self.open.remove(index).1),
            None => {
                log::debug!("End milestone {} has no open start", id);
                None
            }
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.iter().any(|(open_id, _)| open_id == id)
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Remove every still-open span, oldest first
    pub fn drain(&mut self) -> Vec<(String, PendingSpan)> {
        std::mem::take(&mut self.open)
    }
}
