//! Poetry lines, line groups, line breaks and plain paragraphs

use crate::converters::osis_to_html::context::RenderContext;
use crate::converters::osis_to_html::tags::TagHandler;
use crate::parse::osis;
use crate::parse::Attributes;
use crate::utils::html::{nbsp, BR};

/// What to do when the element (or its end milestone) closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Closing {
    LineBreak,
    Nothing,
}

// ============================================================================
// <l>
// ============================================================================

#[derive(Debug, Default)]
pub struct LHandler {
    closings: Vec<Closing>,
}

impl LHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent level from `x-indent`, `x-indent-2` or a `level` attribute
    fn indent_level(attrs: &Attributes) -> usize {
        let Some(line_type) = attrs.non_empty(osis::ATTR_TYPE) else {
            return 0;
        };
        if !line_type.starts_with("x-indent") {
            return 0;
        }
        attrs
            .non_empty(osis::ATTR_LEVEL)
            .and_then(|level| level.parse().ok())
            .or_else(|| line_type.rsplit('-').next().and_then(|suffix| suffix.parse().ok()))
            .unwrap_or(1)
    }
}

impl TagHandler for LHandler {
    fn tag_name(&self) -> &'static str {
        osis::L
    }

    fn start(&mut self, attrs: &Attributes, cx: &mut RenderContext<'_>) {
        if attrs.is_present(osis::ATTR_EID) {
            cx.writer.write(BR);
            self.closings.push(Closing::Nothing);
            return;
        }

        let level = Self::indent_level(attrs);
        if level > 0 {
            cx.writer.write(&nbsp(cx.params.indent_depth * level));
        }

        let closing = if attrs.is_present(osis::ATTR_SID) {
            Closing::Nothing
        } else {
            Closing::LineBreak
        };
        self.closings.push(closing);
    }

    fn end(&mut self, cx: &mut RenderContext<'_>) {
        if let Some(Closing::LineBreak) = self.closings.pop() {
            cx.writer.write(BR);
        }
    }
}

// ============================================================================
// <lg>
// ============================================================================

#[derive(Debug, Default)]
pub struct LgHandler {
    closings: Vec<Closing>,
}

impl TagHandler for LgHandler {
    fn tag_name(&self) -> &'static str {
        osis::LG
    }

    fn start(&mut self, attrs: &Attributes, cx: &mut RenderContext<'_>) {
        if attrs.is_present(osis::ATTR_EID) {
            if cx.passage.is_any_text_written {
                cx.writer.write(BR);
            }
            self.closings.push(Closing::Nothing);
        } else if attrs.is_present(osis::ATTR_SID) {
            self.closings.push(Closing::Nothing);
        } else {
            self.closings.push(Closing::LineBreak);
        }
    }

    fn end(&mut self, cx: &mut RenderContext<'_>) {
        if let Some(Closing::LineBreak) = self.closings.pop() {
            if cx.passage.is_any_text_written {
                cx.writer.write(BR);
            }
        }
    }
}

// ============================================================================
// <lb/>
// ============================================================================

#[derive(Debug, Default)]
pub struct LbHandler;

impl TagHandler for LbHandler {
    fn tag_name(&self) -> &'static str {
        osis::LB
    }

    fn start(&mut self, attrs: &Attributes, cx: &mut RenderContext<'_>) {
        match attrs.get(osis::ATTR_TYPE) {
            Some("x-begin-paragraph") | Some("x-end-paragraph") | Some("x-paragraph") => {
                cx.write_paragraph_break()
            }
            _ => {
                if cx.passage.is_any_text_written {
                    cx.writer.write(BR);
                }
            }
        }
    }

    fn end(&mut self, _cx: &mut RenderContext<'_>) {}
}

// ============================================================================
// <p>
// ============================================================================

#[derive(Debug, Default)]
pub struct PHandler {
    text_marks: Vec<u64>,
}

impl TagHandler for PHandler {
    fn tag_name(&self) -> &'static str {
        osis::P
    }

    fn start(&mut self, _attrs: &Attributes, cx: &mut RenderContext<'_>) {
        self.text_marks.push(cx.passage.text_mark());
    }

    fn end(&mut self, cx: &mut RenderContext<'_>) {
        if let Some(mark) = self.text_marks.pop() {
            if cx.passage.has_text_since(mark) {
                cx.write_paragraph_break();
            }
        }
    }
}
