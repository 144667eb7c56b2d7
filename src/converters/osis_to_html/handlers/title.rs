//! Section titles

use crate::converters::osis_to_html::context::RenderContext;
use crate::converters::osis_to_html::tags::TagHandler;
use crate::parse::osis;
use crate::parse::Attributes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TitleAction {
    Show { moved_before_verse: bool },
    Hide,
}

#[derive(Debug, Default)]
pub struct TitleHandler {
    actions: Vec<TitleAction>,
}

impl TitleHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TagHandler for TitleHandler {
    fn tag_name(&self) -> &'static str {
        osis::TITLE
    }

    fn start(&mut self, attrs: &Attributes, cx: &mut RenderContext<'_>) {
        // chapter headings generated by the text library duplicate the page header
        let is_generated = attrs.get(osis::ATTR_TYPE) == Some(osis::TYPE_GENERATED_CONTENT);
        let is_shown = !is_generated && (cx.params.show_titles || attrs.is_true(osis::ATTR_CANONICAL));

        if !is_shown {
            cx.writer.set_dont_write(true);
            self.actions.push(TitleAction::Hide);
            return;
        }

        let is_pre_verse = attrs.contains_ignore_case(osis::ATTR_SUBTYPE, osis::SUBTYPE_PREVERSE)
            || attrs.contains_ignore_case("subtype", osis::SUBTYPE_PREVERSE);
        let moved_before_verse = is_pre_verse
            || (cx.verse.is_verse_open && !cx.verse.is_text_since_verse && cx.verse.current_verse_no > 0);
        if moved_before_verse {
            let position = cx.verse.position_to_insert_before_verse;
            cx.writer.begin_insert_at(position);
        }

        let level = attrs
            .non_empty(osis::ATTR_LEVEL)
            .and_then(|level| level.parse::<u8>().ok())
            .unwrap_or(1);
        cx.writer.write(&format!("<h1 class='heading{}'>", level));
        self.actions.push(TitleAction::Show { moved_before_verse });
    }

    fn end(&mut self, cx: &mut RenderContext<'_>) {
        match self.actions.pop() {
            Some(TitleAction::Show { moved_before_verse }) => {
                cx.writer.write("</h1>");
                if moved_before_verse {
                    cx.writer.finish_inserting();
                }
            }
            Some(TitleAction::Hide) => cx.writer.set_dont_write(false),
            None => {}
        }
    }
}
