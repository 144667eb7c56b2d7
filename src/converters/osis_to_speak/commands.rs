//! Ordered list of speak commands that merges as it grows

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{SpeakCommand, TextKind};

/// Longest text a single command may carry; speech engines refuse more
pub const MAX_SPEECH_INPUT_LENGTH: usize = 4000;

/// Text that continues the previous sentence without a space, e.g. `, and` or `'s`
static STARTS_WITH_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(?:[,.?!"':;()]+|'s)(?: .*)?$"#).expect("static regex is valid"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeakCommandList {
    commands: Vec<SpeakCommand>,
}

impl SpeakCommandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command.
    ///
    /// Text has its whitespace collapsed and is merged into a preceding text
    /// command of the same kind. Empty text and repeated silences are dropped.
    pub fn push(&mut self, command: SpeakCommand) {
        match command {
            SpeakCommand::Text { text, kind } => self.push_text(&text, kind),
            SpeakCommand::Silence if self.commands.last() == Some(&SpeakCommand::Silence) => {}
            command => self.commands.push(command),
        }
    }

    fn push_text(&mut self, text: &str, kind: TextKind) {
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            return;
        }

        if let Some(SpeakCommand::Text {
            text: previous,
            kind: previous_kind,
        }) = self.commands.last_mut()
        {
            if *previous_kind == kind {
                let separator = if STARTS_WITH_DELIMITER.is_match(&text) { "" } else { " " };
                let merged_len = previous.chars().count() + separator.len() + text.chars().count();
                if merged_len <= MAX_SPEECH_INPUT_LENGTH {
                    previous.push_str(separator);
                    previous.push_str(&text);
                    return;
                }
            }
        }
        self.commands.push(SpeakCommand::Text { text, kind });
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn as_slice(&self) -> &[SpeakCommand] {
        &self.commands
    }

    pub fn into_vec(self) -> Vec<SpeakCommand> {
        self.commands
    }
}
