//! Tables and lists, mapped one to one onto their HTML counterparts

use crate::converters::osis_to_html::context::RenderContext;
use crate::converters::osis_to_html::tags::TagHandler;
use crate::parse::osis;
use crate::parse::Attributes;

#[derive(Debug, Clone)]
pub struct BlockHandler {
    tag_name: &'static str,
    html_tag: &'static str,
}

impl BlockHandler {
    pub fn table() -> Self {
        Self::new(osis::TABLE, "table")
    }

    pub fn row() -> Self {
        Self::new(osis::ROW, "tr")
    }

    pub fn cell() -> Self {
        Self::new(osis::CELL, "td")
    }

    pub fn list() -> Self {
        Self::new(osis::LIST, "ul")
    }

    pub fn item() -> Self {
        Self::new(osis::ITEM, "li")
    }

    fn new(tag_name: &'static str, html_tag: &'static str) -> Self {
        Self { tag_name, html_tag }
    }
}

impl TagHandler for BlockHandler {
    fn tag_name(&self) -> &'static str {
        self.tag_name
    }

    fn start(&mut self, _attrs: &Attributes, cx: &mut RenderContext<'_>) {
        cx.writer.write(&format!("<{}>", self.html_tag));
    }

    fn end(&mut self, cx: &mut RenderContext<'_>) {
        cx.writer.write(&format!("</{}>", self.html_tag));
    }
}
