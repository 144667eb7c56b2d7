//! Footnote marker written in the body text where a note was found

use crate::converters::osis_to_html::context::RenderContext;
use crate::utils::html::{escape_attribute, escape_text};

/// Writes `<a href='note:BASIS/REF' class='noteRef'>REF</a> ` when notes are shown
pub fn write_note_marker(note_ref: &str, cx: &mut RenderContext<'_>) {
    if !cx.params.show_notes {
        return;
    }
    let basis = cx.basis_ref();
    cx.writer.write(&format!(
        "<a href='note:{}/{}' class='noteRef'>{}</a> ",
        escape_attribute(&basis),
        escape_attribute(note_ref),
        escape_text(note_ref)
    ));
}
