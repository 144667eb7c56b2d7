//! Footnotes and cross-reference notes
//!
//! The note body never reaches the HTML. It is diverted to the writer's temp
//! store and turned into a [`Note`](crate::models::Note) when the note closes.
//! References inside the note record their own cross-reference notes.

use crate::converters::osis_to_html::context::RenderContext;
use crate::converters::osis_to_html::handlers::note_marker::write_note_marker;
use crate::converters::osis_to_html::tags::TagHandler;
use crate::parse::osis;
use crate::parse::Attributes;
use crate::utils::html::consists_only_of;

/// Characters left over between references that do not make a note
const SEPARATOR_CHARS: &str = "[];().,";

#[derive(Debug, Clone, PartialEq, Eq)]
enum OpenNote {
    General,
    CrossReference { target: String },
    /// Note inside a note; its text belongs to the outer one
    Nested,
}

#[derive(Debug, Default)]
pub struct NoteHandler {
    open: Vec<OpenNote>,
}

impl NoteHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TagHandler for NoteHandler {
    fn tag_name(&self) -> &'static str {
        osis::NOTE
    }

    fn start(&mut self, attrs: &Attributes, cx: &mut RenderContext<'_>) {
        if cx.notes.is_in_note() {
            self.open.push(OpenNote::Nested);
            return;
        }

        let note_ref = cx.notes.begin_note(attrs.get(osis::ATTR_N), cx.verse.current_verse_no);
        write_note_marker(&note_ref, cx);

        let is_cross_reference = attrs.get(osis::ATTR_TYPE) == Some(osis::NOTE_TYPE_CROSS_REFERENCE);
        let note = match attrs.non_empty(osis::ATTR_OSIS_REF) {
            Some(target) if is_cross_reference => OpenNote::CrossReference {
                target: target.to_string(),
            },
            _ => OpenNote::General,
        };
        self.open.push(note);

        cx.writer.clear_temp_store();
        cx.writer.write_to_temp_store();
    }

    fn end(&mut self, cx: &mut RenderContext<'_>) {
        let note = match self.open.pop() {
            Some(OpenNote::Nested) | None => return,
            Some(note) => note,
        };

        cx.writer.finish_writing_to_temp_store();
        let text = cx.writer.temp_store_string().to_string();
        cx.writer.clear_temp_store();

        let verse_no = cx.verse.current_verse_no;
        let note_ref = cx.notes.current_note_ref().to_string();
        if !consists_only_of(&text, SEPARATOR_CHARS) {
            match note {
                OpenNote::CrossReference { target } => {
                    let body = cx
                        .resolver
                        .resolve(&target)
                        .map(|passage| passage.display_name())
                        .unwrap_or(text);
                    cx.notes.add_cross_reference(verse_no, &note_ref, &body, Some(target));
                }
                _ => cx.notes.add_general(verse_no, &note_ref, &text),
            }
        }
        cx.notes.end_note();
    }
}
