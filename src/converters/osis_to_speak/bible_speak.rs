//! Speakable rendering of a Bible passage

use crate::models::{SpeakCommand, SpeakSettings};
use crate::parse::osis;
use crate::parse::{Attributes, OsisContentHandler};

use super::commands::SpeakCommandList;

/// Note type read aloud when footnotes are spoken
const SPOKEN_NOTE_TYPE: &str = "study";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagType {
    Normal,
    Title,
    Paragraph,
    DivineName,
    Footnote,
}

#[derive(Debug, Clone, Copy)]
struct StackEntry {
    visible: bool,
    tag_type: TagType,
}

impl StackEntry {
    fn new(visible: bool, tag_type: TagType) -> Self {
        Self { visible, tag_type }
    }
}

pub struct OsisToBibleSpeak<'s> {
    settings: &'s SpeakSettings,
    commands: SpeakCommandList,
    stack: Vec<StackEntry>,
    title_level: usize,
    divine_name_level: usize,
    any_text_written: bool,
}

impl<'s> OsisToBibleSpeak<'s> {
    pub fn new(settings: &'s SpeakSettings) -> Self {
        Self {
            settings,
            commands: SpeakCommandList::new(),
            stack: Vec::new(),
            title_level: 0,
            divine_name_level: 0,
            any_text_written: false,
        }
    }

    pub fn commands(&self) -> &[SpeakCommand] {
        self.commands.as_slice()
    }

    pub fn into_commands(self) -> Vec<SpeakCommand> {
        self.commands.into_vec()
    }

    fn is_parent_visible(&self) -> bool {
        self.stack.last().map(|entry| entry.visible).unwrap_or(true)
    }

    fn add_text(&mut self, text: &str) {
        if !self.is_parent_visible() {
            return;
        }
        let mut text = normalize_quotes(text);
        if self.divine_name_level > 0 && self.settings.replace_divine_name && !text.trim().is_empty() {
            text = self.settings.divine_name_replacement.clone();
        }

        if self.title_level > 0 {
            if self.settings.speak_titles {
                self.commands.push(SpeakCommand::title(text));
            }
        } else {
            if !text.trim().is_empty() {
                self.any_text_written = true;
            }
            self.commands.push(SpeakCommand::text(text));
        }
    }
}

/// Typographic quotes and accents read badly; use their plain forms
fn normalize_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{201c}' | '\u{201d}' => '"',
            '`' | '\u{b4}' | '\u{2019}' => '\'',
            c => c,
        })
        .collect()
}

impl OsisContentHandler for OsisToBibleSpeak<'_> {
    fn start_document(&mut self) {
        self.stack.clear();
        self.stack.push(StackEntry::new(true, TagType::Normal));
    }

    fn start_element(&mut self, name: &str, attrs: &Attributes) {
        let visible = self.is_parent_visible();
        let entry = match name {
            osis::VERSE => {
                self.any_text_written = false;
                StackEntry::new(true, TagType::Normal)
            }
            osis::NOTE => {
                let is_spoken = self.settings.speak_footnotes && attrs.get(osis::ATTR_TYPE) == Some(SPOKEN_NOTE_TYPE);
                if is_spoken {
                    self.commands.push(SpeakCommand::PreFootnote);
                    StackEntry::new(true, TagType::Footnote)
                } else {
                    StackEntry::new(false, TagType::Normal)
                }
            }
            osis::REFERENCE => StackEntry::new(false, TagType::Normal),
            osis::DIVINE_NAME => {
                self.divine_name_level += 1;
                StackEntry::new(visible, TagType::DivineName)
            }
            osis::TITLE => {
                if self.settings.speak_titles {
                    self.commands.push(SpeakCommand::PreTitle);
                }
                self.title_level += 1;
                StackEntry::new(visible, TagType::Title)
            }
            osis::DIV => {
                let div_type = attrs.get(osis::ATTR_TYPE).unwrap_or_default();
                let is_paragraph =
                    div_type == osis::DIV_TYPE_PARAGRAPH || div_type == osis::DIV_TYPE_PARAGRAPH_LEGACY;
                // the start milestone of a paragraph is where a verse begins, not a change
                if is_paragraph && !attrs.is_present(osis::ATTR_SID) {
                    self.commands.push(SpeakCommand::ParagraphChange);
                    StackEntry::new(visible, TagType::Paragraph)
                } else {
                    StackEntry::new(visible, TagType::Normal)
                }
            }
            osis::L | osis::LB | osis::P => {
                if self.any_text_written {
                    self.commands.push(SpeakCommand::ParagraphChange);
                }
                StackEntry::new(visible, TagType::Paragraph)
            }
            _ => StackEntry::new(visible, TagType::Normal),
        };
        self.stack.push(entry);
    }

    fn characters(&mut self, text: &str) {
        self.add_text(text);
    }

    fn end_element(&mut self, _name: &str) {
        let Some(entry) = self.stack.pop() else {
            return;
        };
        match entry.tag_type {
            TagType::Paragraph => self.any_text_written = false,
            TagType::Title => {
                if self.settings.speak_titles {
                    self.commands.push(SpeakCommand::Silence);
                }
                self.title_level = self.title_level.saturating_sub(1);
            }
            TagType::DivineName => self.divine_name_level = self.divine_name_level.saturating_sub(1),
            TagType::Footnote => self.commands.push(SpeakCommand::PostFootnote),
            TagType::Normal => {}
        }
    }

    fn end_document(&mut self) {
        self.stack.pop();
    }
}
