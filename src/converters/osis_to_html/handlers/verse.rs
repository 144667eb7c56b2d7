//! Verse boundaries and verse-number markers

use crate::converters::osis_to_html::context::RenderContext;
use crate::converters::osis_to_html::tags::TagHandler;
use crate::models::VerseNumberStyle;
use crate::parse::osis::{self, osis_id_to_chapter_number, osis_id_to_verse_number};
use crate::parse::Attributes;
use crate::utils::html::{NBSP, ZERO_WIDTH_SPACE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VerseAction {
    /// Container verse: close on the end tag
    Close,
    /// Milestone or ignored verse: the end tag does nothing
    Nothing,
}

#[derive(Debug, Default)]
pub struct VerseHandler {
    actions: Vec<VerseAction>,
    /// Where the open verse started, to remove it again if it stays empty
    rollback: usize,
    /// End of the verse marker, so an empty verse can drop just its marker
    marker_end: usize,
    text_mark_at_open: u64,
    notes_at_open: usize,
    is_line_div_open: bool,
}

impl VerseHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn open_verse(&mut self, attrs: &Attributes, cx: &mut RenderContext<'_>) {
        self.close_verse(cx);

        let osis_id = attrs
            .non_empty(osis::ATTR_OSIS_ID)
            .or_else(|| attrs.non_empty(osis::ATTR_SID));
        let verse_no = osis_id
            .and_then(osis_id_to_verse_number)
            .unwrap_or(cx.verse.current_verse_no + 1);
        let chapter = cx.params.chapter.or_else(|| osis_id.and_then(osis_id_to_chapter_number));

        self.rollback = cx.writer.position();
        self.text_mark_at_open = cx.passage.text_mark();
        self.notes_at_open = cx.notes.notes().len();

        if cx.params.is_verse_per_line {
            cx.writer.write("<div>");
            self.is_line_div_open = true;
        } else if cx.passage.is_any_text_written {
            cx.writer.write(" ");
        }

        let position = cx.writer.position();
        cx.verse.open(verse_no, position);
        let marker = verse_marker(cx, chapter, verse_no);
        cx.writer.write(&marker);
        self.marker_end = cx.writer.position();
    }

    /// Close the open verse.
    ///
    /// A verse with no text and no notes loses its marker. Anything else
    /// written inside it, such as a paragraph break, stays.
    pub fn close_verse(&mut self, cx: &mut RenderContext<'_>) {
        if !cx.verse.is_verse_open {
            return;
        }
        // unclosed pre-verse content must not swallow the following verses
        cx.writer.abort_any_unterminated_insertion();

        let has_text = cx.verse.is_text_since_verse || cx.passage.has_text_since(self.text_mark_at_open);
        let has_notes = cx.notes.notes().len() > self.notes_at_open;
        if has_text || has_notes {
            cx.writer.write("</span>");
            if self.is_line_div_open {
                cx.writer.write("</div>");
            }
        } else if cx.writer.position() > self.marker_end {
            log::debug!("Removing marker of empty verse {}", cx.verse.current_verse_no);
            cx.writer.remove_range(self.rollback, self.marker_end);
        } else {
            log::debug!("Removing empty verse {}", cx.verse.current_verse_no);
            cx.writer.remove_after(self.rollback);
        }
        self.is_line_div_open = false;
        cx.verse.close();
    }
}

fn verse_marker(cx: &RenderContext<'_>, chapter: Option<u32>, verse_no: u32) -> String {
    let params = cx.params;

    let mut classes = String::from("verse");
    for style in params.bookmark_styles(verse_no) {
        classes.push(' ');
        classes.push_str(style.css_class());
    }

    let id = match chapter {
        Some(chapter) => format!("{}.{}", chapter, verse_no),
        None => verse_no.to_string(),
    };

    let number = match params.effective_verse_number_style() {
        VerseNumberStyle::Hidden => {
            format!("<span class='verseNo position-marker'>{}</span>", ZERO_WIDTH_SPACE)
        }
        VerseNumberStyle::Inline => format!("<span class='verseNo'>{}</span>{}", verse_no, NBSP),
        VerseNumberStyle::Superscript => format!("<sup class='verseNo'>{}</sup>{}", verse_no, NBSP),
    };

    let my_note = if params.has_my_note(verse_no) {
        "<span class='myNoteImg'></span>"
    } else {
        ""
    };

    format!("<span class='{}' id='{}'>{}{}", classes, id, number, my_note)
}

impl TagHandler for VerseHandler {
    fn tag_name(&self) -> &'static str {
        osis::VERSE
    }

    fn start(&mut self, attrs: &Attributes, cx: &mut RenderContext<'_>) {
        if !cx.params.is_bible {
            if let Some(verse_no) = attrs.non_empty(osis::ATTR_OSIS_ID).and_then(osis_id_to_verse_number) {
                cx.verse.current_verse_no = verse_no;
            }
            self.actions.push(VerseAction::Nothing);
            return;
        }

        if attrs.is_present(osis::ATTR_EID) {
            self.close_verse(cx);
            self.actions.push(VerseAction::Nothing);
        } else if attrs.is_present(osis::ATTR_SID) {
            self.open_verse(attrs, cx);
            self.actions.push(VerseAction::Nothing);
        } else {
            self.open_verse(attrs, cx);
            self.actions.push(VerseAction::Close);
        }
    }

    fn end(&mut self, cx: &mut RenderContext<'_>) {
        if let Some(VerseAction::Close) = self.actions.pop() {
            self.close_verse(cx);
        }
    }
}
