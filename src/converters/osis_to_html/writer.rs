//! Output buffer with retroactive insertion
//!
//! Text is appended to a base buffer. Offsets handed out by [`HtmlTextWriter::write`]
//! and [`HtmlTextWriter::position`] are positions in that base buffer and stay
//! valid however many insertions are registered afterwards. Insertions are
//! kept as `(offset, fragment)` records and only spliced in when the final
//! string is requested.
//!
//! Several insertions at the same offset stack: the one registered last ends
//! up at the offset itself and earlier ones are pushed after it.
//!
//! Spans can be cut out of the base buffer with [`HtmlTextWriter::remove_range`].
//! They are skipped when the final string is built, so later offsets do not move.
//!
//! Two diversions exist besides insertion:
//! - the temp store, used to collect note and reference text out of band
//! - suppression, used for content that must not be shown at all

#[derive(Debug, Clone, PartialEq, Eq)]
struct Insertion {
    offset: usize,
    text: String,
}

#[derive(Debug, Default)]
pub struct HtmlTextWriter {
    base: String,
    insertions: Vec<Insertion>,
    /// Base spans left out of the output, sorted by start
    removed: Vec<(usize, usize)>,

    /// Fragment being collected by `begin_insert_at`
    pending: Option<Insertion>,
    insert_depth: usize,

    temp_store: String,
    temp_store_depth: usize,

    dont_write: bool,
}

impl HtmlTextWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `text` wherever output is currently routed.
    ///
    /// Returns the base offset at which the text landed: the append position
    /// normally, the recorded insertion offset while inserting.
    pub fn write(&mut self, text: &str) -> usize {
        if self.dont_write || text.is_empty() {
            return self.base.len();
        }
        if self.temp_store_depth > 0 {
            self.temp_store.push_str(text);
            return self.base.len();
        }
        if let Some(pending) = self.pending.as_mut() {
            pending.text.push_str(text);
            return pending.offset;
        }
        let offset = self.base.len();
        self.base.push_str(text);
        offset
    }

    /// Register `text` to appear at a previously returned offset
    pub fn insert_at(&mut self, offset: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let offset = self.clamp(offset);
        self.insertions.push(Insertion {
            offset,
            text: text.to_string(),
        });
    }

    /// Current append position in base coordinates
    pub fn position(&self) -> usize {
        self.base.len()
    }

    /// Route writes to `offset` until [`finish_inserting`](Self::finish_inserting).
    ///
    /// Nested calls only count depth; the outermost offset is kept.
    pub fn begin_insert_at(&mut self, offset: usize) {
        self.insert_depth += 1;
        if self.pending.is_none() {
            let offset = self.clamp(offset);
            self.pending = Some(Insertion {
                offset,
                text: String::new(),
            });
        }
    }

    pub fn finish_inserting(&mut self) {
        if self.insert_depth == 0 {
            return;
        }
        self.insert_depth -= 1;
        if self.insert_depth == 0 {
            self.commit_pending();
        }
    }

    /// Commit any open insertion and go back to appending
    pub fn abort_any_unterminated_insertion(&mut self) {
        if self.insert_depth > 0 {
            log::debug!("Closing unterminated insertion");
            self.insert_depth = 0;
            self.commit_pending();
        }
    }

    pub fn is_inserting(&self) -> bool {
        self.pending.is_some()
    }

    fn commit_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            if !pending.text.is_empty() {
                self.insertions.push(pending);
            }
        }
    }

    fn clamp(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.base.len());
        while !self.base.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    /// Drop everything written at or after `offset`, including insertions
    /// registered beyond it
    pub fn remove_after(&mut self, offset: usize) {
        let offset = self.clamp(offset);
        self.base.truncate(offset);
        self.insertions.retain(|i| i.offset <= offset);
        self.removed.retain(|&(start, _)| start < offset);
        for range in self.removed.iter_mut() {
            range.1 = range.1.min(offset);
        }
        if let Some(pending) = self.pending.as_mut() {
            pending.offset = pending.offset.min(offset);
        }
    }

    /// Leave the base span `start..end` out of the output.
    ///
    /// Offsets after the span stay valid. Insertions strictly inside it are
    /// dropped; those at either edge are kept.
    pub fn remove_range(&mut self, start: usize, end: usize) {
        let start = self.clamp(start);
        let end = self.clamp(end);
        if start >= end {
            return;
        }
        self.insertions.retain(|i| i.offset <= start || i.offset >= end);
        self.removed.push((start, end));
        self.removed.sort_unstable();
    }

    /// Append `base[from..to]` minus removed spans
    fn push_base(&self, out: &mut String, from: usize, to: usize) {
        let mut cursor = from;
        for &(start, end) in &self.removed {
            if end <= cursor || start >= to {
                continue;
            }
            if start > cursor {
                out.push_str(&self.base[cursor..start]);
            }
            cursor = end.min(to);
        }
        if cursor < to {
            out.push_str(&self.base[cursor..to]);
        }
    }

    // ========================================================================
    // Temp store
    // ========================================================================

    pub fn write_to_temp_store(&mut self) {
        self.temp_store_depth += 1;
    }

    pub fn finish_writing_to_temp_store(&mut self) {
        self.temp_store_depth = self.temp_store_depth.saturating_sub(1);
    }

    pub fn is_writing_to_temp_store(&self) -> bool {
        self.temp_store_depth > 0
    }

    pub fn temp_store_string(&self) -> &str {
        &self.temp_store
    }

    pub fn clear_temp_store(&mut self) {
        self.temp_store.clear();
    }

    // ========================================================================
    // Suppression
    // ========================================================================

    pub fn set_dont_write(&mut self, dont_write: bool) {
        self.dont_write = dont_write;
    }

    pub fn is_dont_write(&self) -> bool {
        self.dont_write
    }

    /// True when a write right now would reach the visible output
    /// at the current append position
    pub fn is_writing_to_main_flow(&self) -> bool {
        !self.dont_write && self.temp_store_depth == 0 && self.pending.is_none()
    }

    /// Final output with all insertions spliced in
    pub fn html(&self) -> String {
        let mut records: Vec<(usize, usize, &str)> = self
            .insertions
            .iter()
            .chain(self.pending.iter())
            .enumerate()
            .map(|(seq, i)| (i.offset, seq, i.text.as_str()))
            .collect();
        // Same offset: latest registration first
        records.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        let extra: usize = records.iter().map(|r| r.2.len()).sum();
        let mut out = String::with_capacity(self.base.len() + extra);
        let mut cursor = 0;
        for (offset, _, text) in records {
            self.push_base(&mut out, cursor, offset);
            out.push_str(text);
            cursor = offset;
        }
        self.push_base(&mut out, cursor, self.base.len());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_returns_offset() {
        let mut writer = HtmlTextWriter::new();
        assert_eq!(writer.write("abc"), 0);
        assert_eq!(writer.write("de"), 3);
        assert_eq!(writer.position(), 5);
        assert_eq!(writer.html(), "abcde");
    }

    #[test]
    fn test_insert_at_remembered_offset() {
        let mut writer = HtmlTextWriter::new();
        writer.write("Hello ");
        let mark = writer.write("world");
        writer.write("!");
        writer.insert_at(mark, "big ");
        assert_eq!(writer.html(), "Hello big world!");
    }

    #[test]
    fn test_inserts_at_same_offset_stack() {
        let mut writer = HtmlTextWriter::new();
        let mark = writer.write("X");
        writer.insert_at(mark, "A");
        writer.insert_at(mark, "B");
        assert_eq!(writer.html(), "BAX", "last registered insert sits nearest the mark");
    }

    #[test]
    fn test_offsets_stay_valid_after_insertions() {
        let mut writer = HtmlTextWriter::new();
        writer.write("one ");
        let second = writer.write("two ");
        writer.insert_at(0, "zero ");
        let third = writer.write("three");
        writer.insert_at(second, "one-and-a-half ");
        writer.insert_at(third, "two-and-a-half ");
        assert_eq!(writer.html(), "zero one one-and-a-half two two-and-a-half three");
    }

    #[test]
    fn test_begin_insert_collects_sequential_writes() {
        let mut writer = HtmlTextWriter::new();
        writer.write("v1");
        writer.begin_insert_at(0);
        writer.write("Preverse ");
        writer.write("text");
        writer.finish_inserting();
        writer.write("Verse content");
        assert_eq!(writer.html(), "Preverse textv1Verse content");
    }

    #[test]
    fn test_abort_keeps_collected_text_and_resumes_appending() {
        let mut writer = HtmlTextWriter::new();
        writer.write("v1");
        writer.begin_insert_at(0);
        writer.write("T");
        writer.abort_any_unterminated_insertion();
        writer.write("Verse content");
        assert!(!writer.is_inserting());
        assert_eq!(writer.html(), "Tv1Verse content");
    }

    #[test]
    fn test_temp_store_diverts_until_finished() {
        let mut writer = HtmlTextWriter::new();
        writer.write("a");
        writer.write_to_temp_store();
        writer.write_to_temp_store();
        writer.write("note");
        writer.finish_writing_to_temp_store();
        writer.write(" more");
        writer.finish_writing_to_temp_store();
        writer.write("b");
        assert_eq!(writer.temp_store_string(), "note more");
        assert_eq!(writer.html(), "ab");
    }

    #[test]
    fn test_remove_after_drops_later_insertions() {
        let mut writer = HtmlTextWriter::new();
        writer.write("keep");
        let rollback = writer.position();
        writer.write(" drop");
        writer.insert_at(rollback + 2, "xx");
        writer.insert_at(rollback, "edge");
        writer.remove_after(rollback);
        assert_eq!(writer.html(), "keepedge");
    }

    #[test]
    fn test_remove_range_keeps_later_offsets() {
        let mut writer = HtmlTextWriter::new();
        writer.write("a");
        let start = writer.position();
        writer.write("[marker]");
        let end = writer.position();
        let after = writer.write("<p />");
        writer.insert_at(start + 3, "lost");
        writer.insert_at(start, "kept");
        writer.remove_range(start, end);
        writer.write("b");
        writer.insert_at(after, "|");
        assert_eq!(writer.html(), "akept|<p />b");
    }

    #[test]
    fn test_remove_after_trims_removed_ranges() {
        let mut writer = HtmlTextWriter::new();
        writer.write("abc");
        writer.write("def");
        writer.remove_range(2, 5);
        writer.remove_after(4);
        writer.write("xy");
        assert_eq!(writer.html(), "abxy");
    }

    #[test]
    fn test_dont_write_suppresses_output() {
        let mut writer = HtmlTextWriter::new();
        writer.set_dont_write(true);
        writer.write("hidden");
        writer.set_dont_write(false);
        writer.write("shown");
        assert_eq!(writer.html(), "shown");
    }

    #[test]
    fn test_insert_offset_is_clamped_to_char_boundary() {
        let mut writer = HtmlTextWriter::new();
        writer.write("é");
        writer.insert_at(1, "x");
        assert_eq!(writer.html(), "xé");
    }
}
