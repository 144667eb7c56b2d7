//! Commands produced by the speakable-text conversion

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextKind {
    Normal,
    Title,
}

/// One step of a spoken rendering. A speech engine plays these in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SpeakCommand {
    Text { text: String, kind: TextKind },
    ParagraphChange,
    PreTitle,
    PreFootnote,
    PostFootnote,
    Silence,
}

impl SpeakCommand {
    pub fn text(text: impl Into<String>) -> Self {
        SpeakCommand::Text {
            text: text.into(),
            kind: TextKind::Normal,
        }
    }

    pub fn title(text: impl Into<String>) -> Self {
        SpeakCommand::Text {
            text: text.into(),
            kind: TextKind::Title,
        }
    }
}

/// Options for the speak conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpeakSettings {
    pub speak_titles: bool,
    pub speak_footnotes: bool,
    pub replace_divine_name: bool,
    /// Spoken in place of the divine name when replacement is on
    pub divine_name_replacement: String,
}

impl Default for SpeakSettings {
    fn default() -> Self {
        Self {
            speak_titles: true,
            speak_footnotes: false,
            replace_divine_name: false,
            divine_name_replacement: "the Lord".to_string(),
        }
    }
}
