//! Images embedded in a module

use crate::converters::osis_to_html::context::RenderContext;
use crate::converters::osis_to_html::tags::TagHandler;
use crate::parse::osis;
use crate::parse::Attributes;
use crate::utils::html::escape_attribute;

/// `<figure src="images/map.jpg"/>` becomes an `<img>` below the module's
/// base path. Without a base path there is nothing to point at and the
/// figure is skipped.
#[derive(Debug, Default)]
pub struct FigureHandler;

impl FigureHandler {
    pub fn new() -> Self {
        Self
    }

    fn image_src(base: &str, src: &str) -> String {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            src.trim_start_matches('/')
        )
    }
}

impl TagHandler for FigureHandler {
    fn tag_name(&self) -> &'static str {
        osis::FIGURE
    }

    fn start(&mut self, attrs: &Attributes, cx: &mut RenderContext<'_>) {
        let Some(src) = attrs.non_empty(osis::ATTR_SRC) else {
            return;
        };
        let Some(base) = cx.params.module_base_path.as_deref() else {
            log::debug!("No module base path, skipping figure {}", src);
            return;
        };
        let img = format!("<img src='{}'/>", escape_attribute(&Self::image_src(base, src)));
        cx.write_content(&img, true);
    }

    fn end(&mut self, _cx: &mut RenderContext<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OsisToHtmlParameters;
    use crate::references::OsisReferenceResolver;

    #[test]
    fn test_figure_under_module_path() {
        let params = OsisToHtmlParameters {
            module_base_path: Some("/modules/kjv/".to_string()),
            ..Default::default()
        };
        let mut cx = RenderContext::new(&params, &OsisReferenceResolver);
        let mut handler = FigureHandler::new();

        handler.start(&Attributes::new().with("src", "/images/ark.jpg"), &mut cx);
        handler.end(&mut cx);

        assert_eq!(cx.writer.html(), "<img src='/modules/kjv/images/ark.jpg'/>");
        assert!(cx.passage.is_any_text_written);
    }

    #[test]
    fn test_figure_without_base_path_is_skipped() {
        let params = OsisToHtmlParameters::default();
        let mut cx = RenderContext::new(&params, &OsisReferenceResolver);
        let mut handler = FigureHandler::new();

        handler.start(&Attributes::new().with("src", "images/ark.jpg"), &mut cx);
        handler.end(&mut cx);

        assert_eq!(cx.writer.html(), "");
    }
}
