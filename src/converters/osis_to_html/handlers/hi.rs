//! Inline highlighting
//!
//! [`HiHandler`] reads a rendering attribute and wraps its content in a span
//! with that rendering as class, falling back to a per-tag default. The TEI
//! `orth` and `pron` elements are the same handler with another tag name,
//! attribute name and default.

use crate::converters::osis_to_html::context::RenderContext;
use crate::converters::osis_to_html::tags::TagHandler;
use crate::parse::osis;
use crate::parse::Attributes;

const HI_TYPES: &[&str] = &[
    "acrostic",
    "bold",
    "emphasis",
    "illuminated",
    "italic",
    "line-through",
    "normal",
    "small-caps",
    "sub",
    "super",
    "underline",
];

#[derive(Debug, Clone)]
pub struct HiHandler {
    tag_name: &'static str,
    attribute: &'static str,
    default_style: &'static str,
}

impl HiHandler {
    /// OSIS `<hi type="...">`
    pub fn osis() -> Self {
        Self::new(osis::HI, osis::ATTR_TYPE, "bold")
    }

    pub fn new(tag_name: &'static str, attribute: &'static str, default_style: &'static str) -> Self {
        Self {
            tag_name,
            attribute,
            default_style,
        }
    }

    pub fn style<'s>(&'s self, attrs: &'s Attributes) -> &'s str {
        match attrs.non_empty(self.attribute) {
            Some(style) if HI_TYPES.contains(&style) => style,
            _ => self.default_style,
        }
    }
}

impl TagHandler for HiHandler {
    fn tag_name(&self) -> &'static str {
        self.tag_name
    }

    fn start(&mut self, attrs: &Attributes, cx: &mut RenderContext<'_>) {
        let style = self.style(attrs);
        cx.writer.write(&format!("<span class='{}'>", style));
    }

    fn end(&mut self, cx: &mut RenderContext<'_>) {
        cx.writer.write("</span>");
    }
}

/// Wraps content in a span with a fixed class, e.g. `transChange`
#[derive(Debug, Clone)]
pub struct ClassSpanHandler {
    tag_name: &'static str,
    class: &'static str,
}

impl ClassSpanHandler {
    pub fn trans_change() -> Self {
        Self {
            tag_name: osis::TRANS_CHANGE,
            class: "transChange",
        }
    }

    pub fn divine_name() -> Self {
        Self {
            tag_name: osis::DIVINE_NAME,
            class: "divineName",
        }
    }
}

impl TagHandler for ClassSpanHandler {
    fn tag_name(&self) -> &'static str {
        self.tag_name
    }

    fn start(&mut self, _attrs: &Attributes, cx: &mut RenderContext<'_>) {
        cx.writer.write(&format!("<span class='{}'>", self.class));
    }

    fn end(&mut self, cx: &mut RenderContext<'_>) {
        cx.writer.write("</span>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OsisToHtmlParameters;
    use crate::references::OsisReferenceResolver;

    fn render(handler: &mut dyn TagHandler, attrs: Attributes, text: &str) -> String {
        let params = OsisToHtmlParameters::default();
        let mut cx = RenderContext::new(&params, &OsisReferenceResolver);
        handler.start(&attrs, &mut cx);
        cx.write_text(text);
        handler.end(&mut cx);
        cx.writer.html()
    }

    #[test]
    fn test_known_and_unknown_types() {
        let mut hi = HiHandler::osis();
        assert_eq!(
            render(&mut hi, Attributes::new().with("type", "italic"), "word"),
            "<span class='italic'>word</span>"
        );
        assert_eq!(
            render(&mut hi, Attributes::new().with("type", "x-odd"), "word"),
            "<span class='bold'>word</span>"
        );
    }

    #[test]
    fn test_trans_change() {
        let mut handler = ClassSpanHandler::trans_change();
        assert_eq!(
            render(&mut handler, Attributes::new().with("type", "added"), "was"),
            "<span class='transChange'>was</span>"
        );
        assert_eq!(handler.tag_name(), "transChange");
    }
}
