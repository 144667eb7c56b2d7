//! Quotations, including words of Christ in red

use crate::converters::osis_to_html::context::RenderContext;
use crate::converters::osis_to_html::tags::TagHandler;
use crate::parse::osis;
use crate::parse::Attributes;
use crate::utils::html::escape_text;

const RED_LETTER_START: &str = "<span class='redLetter'>";

#[derive(Debug, Default)]
pub struct QHandler {
    /// true where the container quote opened a red-letter span
    closes_span: Vec<bool>,
    /// Start milestones that opened a red-letter span
    open_milestones: Vec<String>,
}

impl QHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_red_letter(attrs: &Attributes, cx: &RenderContext<'_>) -> bool {
        cx.params.red_letter && attrs.get(osis::ATTR_WHO) == Some(osis::WHO_JESUS)
    }
}

impl TagHandler for QHandler {
    fn tag_name(&self) -> &'static str {
        osis::Q
    }

    fn start(&mut self, attrs: &Attributes, cx: &mut RenderContext<'_>) {
        if let Some(end_id) = attrs.non_empty(osis::ATTR_EID) {
            if let Some(index) = self.open_milestones.iter().position(|id| id == end_id) {
                self.open_milestones.remove(index);
                cx.writer.write("</span>");
            }
            if let Some(marker) = attrs.non_empty(osis::ATTR_MARKER) {
                cx.writer.write(&escape_text(marker));
            }
            self.closes_span.push(false);
            return;
        }

        if let Some(marker) = attrs.non_empty(osis::ATTR_MARKER) {
            cx.writer.write(&escape_text(marker));
        }

        let is_red = Self::is_red_letter(attrs, cx);
        if is_red {
            cx.writer.write(RED_LETTER_START);
        }

        match attrs.non_empty(osis::ATTR_SID) {
            Some(start_id) => {
                if is_red {
                    self.open_milestones.push(start_id.to_string());
                }
                self.closes_span.push(false);
            }
            None => self.closes_span.push(is_red),
        }
    }

    fn end(&mut self, cx: &mut RenderContext<'_>) {
        if let Some(true) = self.closes_span.pop() {
            cx.writer.write("</span>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OsisToHtmlParameters;
    use crate::references::OsisReferenceResolver;

    #[test]
    fn test_words_of_christ_in_red() {
        let params = OsisToHtmlParameters {
            red_letter: true,
            ..Default::default()
        };
        let mut cx = RenderContext::new(&params, &OsisReferenceResolver);
        let mut handler = QHandler::new();

        handler.start(&Attributes::new().with("who", "Jesus"), &mut cx);
        cx.write_text("Follow me");
        handler.end(&mut cx);
        handler.start(&Attributes::new().with("who", "Peter").with("marker", "\u{201c}"), &mut cx);
        cx.write_text("Lord");
        handler.end(&mut cx);

        assert_eq!(
            cx.writer.html(),
            "<span class='redLetter'>Follow me</span>\u{201c}Lord"
        );
    }

    #[test]
    fn test_red_letter_milestones() {
        let params = OsisToHtmlParameters {
            red_letter: true,
            ..Default::default()
        };
        let mut cx = RenderContext::new(&params, &OsisReferenceResolver);
        let mut handler = QHandler::new();

        handler.start(&Attributes::new().with("who", "Jesus").with("sID", "q1"), &mut cx);
        handler.end(&mut cx);
        cx.write_text("I am");
        handler.start(&Attributes::new().with("eID", "q1"), &mut cx);
        handler.end(&mut cx);

        assert_eq!(cx.writer.html(), "<span class='redLetter'>I am</span>");
    }

    #[test]
    fn test_red_letter_off() {
        let params = OsisToHtmlParameters::default();
        let mut cx = RenderContext::new(&params, &OsisReferenceResolver);
        let mut handler = QHandler::new();

        handler.start(&Attributes::new().with("who", "Jesus"), &mut cx);
        cx.write_text("Follow me");
        handler.end(&mut cx);

        assert_eq!(cx.writer.html(), "Follow me");
    }
}
