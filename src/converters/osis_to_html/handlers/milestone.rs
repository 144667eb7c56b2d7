//! The generic `<milestone type="..."/>` element

use crate::converters::osis_to_html::context::RenderContext;
use crate::converters::osis_to_html::tags::TagHandler;
use crate::parse::osis;
use crate::parse::Attributes;
use crate::utils::html::{escape_text, BR, LEFT_DOUBLE_QUOTE};

#[derive(Debug, Default)]
pub struct MilestoneHandler;

impl TagHandler for MilestoneHandler {
    fn tag_name(&self) -> &'static str {
        osis::MILESTONE
    }

    fn start(&mut self, attrs: &Attributes, cx: &mut RenderContext<'_>) {
        let Some(milestone_type) = attrs.non_empty(osis::ATTR_TYPE) else {
            return;
        };

        match milestone_type {
            "x-p" | "x-extra-p" => cx.write_paragraph_break(),
            "line" => {
                if cx.passage.is_any_text_written {
                    cx.writer.write(BR);
                }
            }
            "cQuote" => {
                let marker = attrs.get(osis::ATTR_MARKER).unwrap_or(LEFT_DOUBLE_QUOTE);
                cx.writer.write(&escape_text(marker));
            }
            other => log::debug!(
                "Verse {} unsupported milestone type: {}",
                cx.verse.current_verse_no,
                other
            ),
        }
    }

    fn end(&mut self, _cx: &mut RenderContext<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OsisToHtmlParameters;
    use crate::references::OsisReferenceResolver;

    fn milestone(cx: &mut RenderContext<'_>, attrs: Attributes) {
        let mut handler = MilestoneHandler;
        handler.start(&attrs, cx);
        handler.end(cx);
    }

    #[test]
    fn test_paragraph_milestone_needs_text() {
        let params = OsisToHtmlParameters::default();
        let mut cx = RenderContext::new(&params, &OsisReferenceResolver);

        milestone(&mut cx, Attributes::new().with("type", "x-p"));
        cx.write_text("text");
        milestone(&mut cx, Attributes::new().with("type", "x-p"));
        milestone(&mut cx, Attributes::new().with("type", "x-p"));

        assert_eq!(cx.writer.html(), "text<p />", "no leading break and no double break");
    }

    #[test]
    fn test_line_and_quote() {
        let params = OsisToHtmlParameters::default();
        let mut cx = RenderContext::new(&params, &OsisReferenceResolver);

        cx.write_text("a");
        milestone(&mut cx, Attributes::new().with("type", "line"));
        milestone(&mut cx, Attributes::new().with("type", "cQuote"));
        milestone(&mut cx, Attributes::new().with("type", "cQuote").with("marker", "'"));

        assert_eq!(cx.writer.html(), "a<br />\u{201c}'");
    }
}
