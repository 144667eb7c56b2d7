//! Divisions: paragraphs and pre-verse sections
//!
//! A division comes either as a container (`<div type="paragraph">...</div>`)
//! or as a pair of empty milestones sharing an id (`<div sID="p1"/>` ...
//! `<div eID="p1"/>`). Both shapes give the same output. Milestone pairs are
//! correlated through the [`MilestoneRegistry`](crate::converters::osis_to_html::milestones::MilestoneRegistry).

use crate::converters::osis_to_html::context::RenderContext;
use crate::converters::osis_to_html::milestones::PendingSpan;
use crate::converters::osis_to_html::tags::TagHandler;
use crate::parse::osis;
use crate::parse::Attributes;

const PARAGRAPH_TYPES: &[&str] = &[osis::DIV_TYPE_PARAGRAPH, osis::DIV_TYPE_PARAGRAPH_LEGACY];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DivAction {
    Paragraph { text_mark: u64 },
    PreVerse { inserting: bool },
    Ignore,
}

#[derive(Debug, Default)]
pub struct DivHandler {
    actions: Vec<DivAction>,
}

impl DivHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start routing pre-verse content before the verse marker, if no verse
    /// text has been written yet
    fn begin_pre_verse(cx: &mut RenderContext<'_>) -> bool {
        if cx.verse.is_text_since_verse {
            return false;
        }
        let position = cx.verse.position_to_insert_before_verse;
        cx.writer.begin_insert_at(position);
        true
    }

    fn close_span(span: PendingSpan, cx: &mut RenderContext<'_>) {
        match span {
            PendingSpan::Paragraph { text_mark } => {
                if cx.passage.has_text_since(text_mark) {
                    cx.write_paragraph_break();
                }
            }
            PendingSpan::PreVerse { inserting } => {
                if inserting {
                    cx.writer.finish_inserting();
                }
            }
        }
    }

    /// Close milestones whose end never arrived, as if they ended here
    pub fn flush_unterminated(cx: &mut RenderContext<'_>) {
        for (id, span) in cx.milestones.drain() {
            log::warn!("Closing unterminated milestone {} at end of document", id);
            Self::close_span(span, cx);
        }
    }
}

impl TagHandler for DivHandler {
    fn tag_name(&self) -> &'static str {
        osis::DIV
    }

    fn start(&mut self, attrs: &Attributes, cx: &mut RenderContext<'_>) {
        let div_type = attrs.get(osis::ATTR_TYPE).unwrap_or_default();
        let is_pre_verse = attrs.contains_ignore_case(osis::ATTR_SUBTYPE, osis::SUBTYPE_PREVERSE)
            || attrs.contains_ignore_case("subtype", osis::SUBTYPE_PREVERSE);
        let is_paragraph = PARAGRAPH_TYPES.contains(&div_type);
        let start_id = attrs.non_empty(osis::ATTR_SID);
        let end_id = attrs.non_empty(osis::ATTR_EID);

        let action = if !is_pre_verse && !is_paragraph {
            DivAction::Ignore
        } else if let Some(id) = start_id {
            let span = if is_pre_verse {
                PendingSpan::PreVerse {
                    inserting: Self::begin_pre_verse(cx),
                }
            } else {
                PendingSpan::Paragraph {
                    text_mark: cx.passage.text_mark(),
                }
            };
            cx.milestones.open(id, span);
            DivAction::Ignore
        } else if let Some(id) = end_id {
            if let Some(span) = cx.milestones.close(id) {
                Self::close_span(span, cx);
            }
            DivAction::Ignore
        } else if is_pre_verse {
            DivAction::PreVerse {
                inserting: Self::begin_pre_verse(cx),
            }
        } else {
            DivAction::Paragraph {
                text_mark: cx.passage.text_mark(),
            }
        };

        self.actions.push(action);
    }

    fn end(&mut self, cx: &mut RenderContext<'_>) {
        match self.actions.pop() {
            Some(DivAction::Paragraph { text_mark }) => {
                Self::close_span(PendingSpan::Paragraph { text_mark }, cx)
            }
            Some(DivAction::PreVerse { inserting }) => {
                Self::close_span(PendingSpan::PreVerse { inserting }, cx)
            }
            Some(DivAction::Ignore) | None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OsisToHtmlParameters;
    use crate::references::OsisReferenceResolver;

    fn paragraph_start(id: &str, div_type: &str) -> Attributes {
        Attributes::new().with("type", div_type).with("sID", id)
    }

    fn paragraph_end(id: &str, div_type: &str) -> Attributes {
        Attributes::new().with("type", div_type).with("eID", id)
    }

    #[test]
    fn test_paragraph_milestone_pair() {
        for div_type in ["paragraph", "x-p"] {
            let params = OsisToHtmlParameters::default();
            let mut cx = RenderContext::new(&params, &OsisReferenceResolver);
            let mut handler = DivHandler::new();

            handler.start(&paragraph_start("p1", div_type), &mut cx);
            handler.end(&mut cx);
            cx.write_text("Some text");
            handler.start(&paragraph_end("p1", div_type), &mut cx);
            handler.end(&mut cx);

            assert_eq!(cx.writer.html(), "Some text<p />", "type {}", div_type);
        }
    }

    #[test]
    fn test_paragraph_container() {
        let params = OsisToHtmlParameters::default();
        let mut cx = RenderContext::new(&params, &OsisReferenceResolver);
        let mut handler = DivHandler::new();

        handler.start(&Attributes::new().with("type", "paragraph"), &mut cx);
        cx.write_text("Some text");
        handler.end(&mut cx);

        assert_eq!(cx.writer.html(), "Some text<p />");
    }

    #[test]
    fn test_empty_paragraph_writes_nothing() {
        let params = OsisToHtmlParameters::default();
        let mut cx = RenderContext::new(&params, &OsisReferenceResolver);
        let mut handler = DivHandler::new();

        cx.write_text("Earlier text");
        handler.start(&paragraph_start("p1", "paragraph"), &mut cx);
        handler.end(&mut cx);
        handler.start(&paragraph_end("p1", "paragraph"), &mut cx);
        handler.end(&mut cx);

        assert_eq!(cx.writer.html(), "Earlier text");
    }

    #[test]
    fn test_repeated_end_does_not_write_twice() {
        let params = OsisToHtmlParameters::default();
        let mut cx = RenderContext::new(&params, &OsisReferenceResolver);
        let mut handler = DivHandler::new();

        handler.start(&paragraph_start("p1", "paragraph"), &mut cx);
        handler.end(&mut cx);
        cx.write_text("Some text");
        for _ in 0..2 {
            handler.start(&paragraph_end("p1", "paragraph"), &mut cx);
            handler.end(&mut cx);
        }

        assert_eq!(cx.writer.html(), "Some text<p />");
    }

    #[test]
    fn test_dangling_end_is_ignored() {
        let params = OsisToHtmlParameters::default();
        let mut cx = RenderContext::new(&params, &OsisReferenceResolver);
        let mut handler = DivHandler::new();

        cx.write_text("Some text");
        handler.start(&paragraph_end("nope", "paragraph"), &mut cx);
        handler.end(&mut cx);

        assert_eq!(cx.writer.html(), "Some text");
    }

    #[test]
    fn test_pre_verse_content_goes_before_verse_marker() {
        let params = OsisToHtmlParameters::default();
        let mut cx = RenderContext::new(&params, &OsisReferenceResolver);
        let mut handler = DivHandler::new();

        cx.writer.write("v1");
        cx.verse.position_to_insert_before_verse = 0;

        handler.start(
            &Attributes::new().with("type", "x-milestone").with("subType", "x-preverse").with("sID", "pv1"),
            &mut cx,
        );
        handler.end(&mut cx);
        cx.write_text("Preverse text");
        handler.start(
            &Attributes::new().with("type", "x-milestone").with("subType", "x-preverse").with("eID", "pv1"),
            &mut cx,
        );
        handler.end(&mut cx);
        cx.write_text("Verse content");

        assert_eq!(cx.writer.html(), "Preverse textv1Verse content");
    }

    #[test]
    fn test_unterminated_pre_verse_is_released() {
        let params = OsisToHtmlParameters::default();
        let mut cx = RenderContext::new(&params, &OsisReferenceResolver);
        let mut handler = DivHandler::new();

        cx.writer.write("v1");
        handler.start(
            &Attributes::new().with("subType", "x-preverse").with("sID", "pv1"),
            &mut cx,
        );
        handler.end(&mut cx);
        cx.writer.abort_any_unterminated_insertion();
        cx.write_text("Verse content");

        assert_eq!(cx.writer.html(), "v1Verse content");
    }

    #[test]
    fn test_flush_closes_open_paragraphs() {
        let params = OsisToHtmlParameters::default();
        let mut cx = RenderContext::new(&params, &OsisReferenceResolver);
        let mut handler = DivHandler::new();

        handler.start(&paragraph_start("p1", "paragraph"), &mut cx);
        handler.end(&mut cx);
        cx.write_text("Unclosed");
        DivHandler::flush_unterminated(&mut cx);

        assert_eq!(cx.writer.html(), "Unclosed<p />");
        assert!(cx.milestones.is_empty());
    }
}
