//! Per-conversion state shared by all tag handlers

use std::borrow::Cow;

use crate::converters::osis_to_html::milestones::MilestoneRegistry;
use crate::converters::osis_to_html::notes::NoteCollector;
use crate::converters::osis_to_html::preprocess::{select_preprocessors, TextPreprocessor};
use crate::converters::osis_to_html::state::{PassageInfo, VerseInfo};
use crate::converters::osis_to_html::writer::HtmlTextWriter;
use crate::models::OsisToHtmlParameters;
use crate::references::ReferenceResolver;
use crate::utils::html::{self, PARAGRAPH_BREAK};

/// Everything a handler may read or change.
///
/// Created fresh for each conversion and dropped at its end.
pub struct RenderContext<'a> {
    pub params: &'a OsisToHtmlParameters,
    pub resolver: &'a dyn ReferenceResolver,
    pub writer: HtmlTextWriter,
    pub verse: VerseInfo,
    pub passage: PassageInfo,
    pub milestones: MilestoneRegistry,
    pub notes: NoteCollector,
    preprocessors: Vec<Box<dyn TextPreprocessor>>,
    /// Text mark at the last paragraph break written
    last_break_mark: Option<u64>,
}

impl<'a> RenderContext<'a> {
    pub fn new(params: &'a OsisToHtmlParameters, resolver: &'a dyn ReferenceResolver) -> Self {
        Self {
            params,
            resolver,
            writer: HtmlTextWriter::new(),
            verse: VerseInfo::default(),
            passage: PassageInfo::default(),
            milestones: MilestoneRegistry::new(),
            notes: NoteCollector::new(params.max_note_text_length),
            preprocessors: select_preprocessors(params),
            last_break_mark: None,
        }
    }

    /// Character data from the document: escaped, preprocessed, written,
    /// and recorded in the verse and passage state
    pub fn write_text(&mut self, text: &str) {
        let mut processed = html::escape_text(text).into_owned();
        for preprocessor in &self.preprocessors {
            let changed = match preprocessor.process(&processed) {
                Cow::Owned(changed) => Some(changed),
                Cow::Borrowed(_) => None,
            };
            if let Some(changed) = changed {
                processed = changed;
            }
        }

        let has_text = !processed.trim().is_empty();
        self.write_content(&processed, has_text);
    }

    /// Write markup that carries document text, such as a finished link,
    /// and record that text was written
    pub fn write_content(&mut self, html: &str, has_text: bool) {
        let visible = !self.writer.is_dont_write() && !self.writer.is_writing_to_temp_store();
        let main_flow = self.writer.is_writing_to_main_flow();
        self.writer.write(html);
        if visible && has_text {
            self.passage.record_text();
            if main_flow {
                self.verse.is_text_since_verse = true;
            }
        }
    }

    /// Write `<p />` unless nothing has been written yet or the last thing
    /// written was already a paragraph break
    pub fn write_paragraph_break(&mut self) {
        if !self.passage.is_any_text_written {
            return;
        }
        let mark = self.passage.text_mark();
        if self.last_break_mark == Some(mark) {
            return;
        }
        self.writer.write(PARAGRAPH_BREAK);
        self.last_break_mark = Some(mark);
    }

    /// OSIS id notes and links are anchored to
    pub fn basis_ref(&self) -> String {
        match &self.params.basis_ref {
            Some(basis) => basis.clone(),
            None => self.verse.current_verse_no.to_string(),
        }
    }
}
