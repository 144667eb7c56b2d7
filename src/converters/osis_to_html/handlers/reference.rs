//! Scripture references
//!
//! Outside notes a reference becomes a link. Inside a note, or when unwrapped
//! references are configured to become notes, it is recorded as a
//! cross-reference note instead. The TEI `ref` element is the same handler
//! reading `target` instead of `osisRef`.

use crate::converters::osis_to_html::context::RenderContext;
use crate::converters::osis_to_html::handlers::note_marker::write_note_marker;
use crate::converters::osis_to_html::tags::TagHandler;
use crate::parse::osis;
use crate::parse::Attributes;
use crate::utils::html::escape_attribute;

#[derive(Debug, Clone)]
pub struct ReferenceHandler {
    tag_name: &'static str,
    target_attribute: &'static str,
    targets: Vec<Option<String>>,
}

impl ReferenceHandler {
    /// OSIS `<reference osisRef="...">`
    pub fn osis() -> Self {
        Self::new(osis::REFERENCE, osis::ATTR_OSIS_REF)
    }

    pub fn new(tag_name: &'static str, target_attribute: &'static str) -> Self {
        Self {
            tag_name,
            target_attribute,
            targets: Vec::new(),
        }
    }

    /// Link markup for a reference, or the bare content when the target
    /// cannot be resolved
    pub fn reference_html(target: Option<&str>, content: &str, cx: &RenderContext<'_>) -> String {
        let target = match target {
            Some(target) => {
                let target = target.trim();
                if let Some(uri) = module_uri(target) {
                    let label = if content.is_empty() { target } else { content };
                    return format!("<a href='{}'>{}</a>", escape_attribute(&uri), label);
                }
                target.to_string()
            }
            // without a target attribute the content itself may be a reference
            None if !content.contains('<') => content.trim().to_string(),
            None => return content.to_string(),
        };

        match cx.resolver.resolve(&target) {
            Some(passage) if passage.is_single_range() => {
                let range = &passage.ranges[0];
                let label = if content.trim().is_empty() {
                    range.display_name.as_str()
                } else {
                    content
                };
                format!("<a href='bible:{}'>{}</a>", escape_attribute(&range.osis_ref), label)
            }
            Some(passage) => passage
                .ranges
                .iter()
                .map(|range| {
                    format!(
                        "<a href='bible:{}'>{}</a>",
                        escape_attribute(&range.start_osis_id),
                        range.display_name
                    )
                })
                .collect::<Vec<_>>()
                .join(" "),
            None => {
                log::debug!("Unresolvable reference {}, writing plain text", target);
                content.to_string()
            }
        }
    }

    fn record_cross_reference(target: Option<String>, content: &str, cx: &mut RenderContext<'_>) {
        let verse_no = cx.verse.current_verse_no;
        let note_ref = if cx.notes.is_in_note() {
            cx.notes.current_note_ref().to_string()
        } else {
            let note_ref = cx.notes.next_generated_ref(verse_no);
            write_note_marker(&note_ref, cx);
            note_ref
        };

        let body = target
            .as_deref()
            .and_then(|t| cx.resolver.resolve(t))
            .map(|passage| passage.display_name())
            .unwrap_or_else(|| content.trim().to_string());
        if body.is_empty() {
            return;
        }
        cx.notes.add_cross_reference(verse_no, &note_ref, &body, target);
    }
}

/// `Module:Key` references point into another module
fn module_uri(target: &str) -> Option<String> {
    if target.starts_with("sword://") {
        return Some(target.to_string());
    }
    let (module, key) = target.split_once(':')?;
    if module.is_empty() || key.is_empty() || module.contains(char::is_whitespace) {
        return None;
    }
    Some(format!("sword://{}/{}", module, key))
}

impl TagHandler for ReferenceHandler {
    fn tag_name(&self) -> &'static str {
        self.tag_name
    }

    fn start(&mut self, attrs: &Attributes, cx: &mut RenderContext<'_>) {
        self.targets.push(attrs.non_empty(self.target_attribute).map(str::to_string));
        cx.writer.clear_temp_store();
        cx.writer.write_to_temp_store();
    }

    fn end(&mut self, cx: &mut RenderContext<'_>) {
        let Some(target) = self.targets.pop() else {
            return;
        };
        cx.writer.finish_writing_to_temp_store();
        let content = cx.writer.temp_store_string().to_string();
        cx.writer.clear_temp_store();

        if cx.notes.is_in_note() || cx.params.auto_wrap_unwrapped_refs_in_note {
            Self::record_cross_reference(target, &content, cx);
        } else {
            let html = Self::reference_html(target.as_deref(), &content, cx);
            cx.write_content(&html, !content.trim().is_empty());
        }
    }
}
