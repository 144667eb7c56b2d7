//! Text fixups applied to character data before it reaches the writer
//!
//! Preprocessors see text that is already HTML-escaped and may return markup.
//! Each one is idempotent, so applying it to its own output changes nothing,
//! and none depends on running before or after another.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::OsisToHtmlParameters;

pub trait TextPreprocessor {
    fn process<'t>(&self, text: &'t str) -> Cow<'t, str>;
}

// ============================================================================
// Hebrew
// ============================================================================

const SOF_PASUQ: char = '\u{05C3}';
const WRAPPED_SOF_PASUQ: &str = "<span dir='rtl'>\u{05C3}</span> ";

/// Removes Hebrew vowel points and cantillation marks, which many renderers
/// draw badly, and wraps sof pasuq so that it stays on the right-hand side.
#[derive(Debug, Default, Clone, Copy)]
pub struct HebrewCharacterPreprocessor;

impl HebrewCharacterPreprocessor {
    fn is_removed_mark(c: char) -> bool {
        matches!(c, '\u{0591}'..='\u{05AF}' | '\u{05B0}'..='\u{05BF}' | '\u{05C1}' | '\u{05C2}')
    }
}

impl TextPreprocessor for HebrewCharacterPreprocessor {
    fn process<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if !text.chars().any(|c| c == SOF_PASUQ || Self::is_removed_mark(c)) {
            return Cow::Borrowed(text);
        }

        let unwrapped = text.replace(WRAPPED_SOF_PASUQ, "\u{05C3}");
        let mut out = String::with_capacity(unwrapped.len() + 16);
        for c in unwrapped.chars() {
            if c == SOF_PASUQ {
                out.push_str(WRAPPED_SOF_PASUQ);
            } else if !Self::is_removed_mark(c) {
                out.push(c);
            }
        }
        Cow::Owned(out)
    }
}

// ============================================================================
// Strong's links in dictionary text
// ============================================================================

static STRONGS_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:see )?(HEBREW|GREEK) for (\d{1,5})").expect("static regex is valid")
});

const STRONGS_ANCHOR_END: &str = "class='strongs'>";

/// Turns "see HEBREW for 0433" style cross-references into Strong's anchors
#[derive(Debug, Default, Clone, Copy)]
pub struct StrongsLinkCreator;

impl TextPreprocessor for StrongsLinkCreator {
    fn process<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if !STRONGS_REFERENCE.is_match(text) {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len() + 64);
        let mut last = 0;
        for caps in STRONGS_REFERENCE.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            // Already linked on an earlier pass
            if text[..whole.start()].ends_with(STRONGS_ANCHOR_END) {
                continue;
            }
            let protocol = if caps[1].eq_ignore_ascii_case("hebrew") {
                "hdef"
            } else {
                "gdef"
            };
            out.push_str(&text[last..whole.start()]);
            out.push_str(&format!(
                "<a href='{}:{:0>5}' {}{}</a>",
                protocol,
                &caps[2],
                STRONGS_ANCHOR_END,
                whole.as_str()
            ));
            last = whole.end();
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

/// Preprocessors that apply to a conversion with these parameters
pub fn select_preprocessors(params: &OsisToHtmlParameters) -> Vec<Box<dyn TextPreprocessor>> {
    let mut selected: Vec<Box<dyn TextPreprocessor>> = Vec::new();
    if params.convert_strongs_refs_to_links {
        selected.push(Box::new(StrongsLinkCreator));
    }
    if params.language_code.eq_ignore_ascii_case("he") {
        selected.push(Box::new(HebrewCharacterPreprocessor));
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hebrew_points_are_removed() {
        // bereshit with points and a cantillation mark
        let pointed = "\u{05D1}\u{05B0}\u{05BC}\u{05E8}\u{05B5}\u{0591}\u{05D0}\u{05E9}\u{05B4}\u{05C1}\u{05D9}\u{05EA}";
        let plain = HebrewCharacterPreprocessor.process(pointed);
        assert_eq!(plain, "\u{05D1}\u{05E8}\u{05D0}\u{05E9}\u{05D9}\u{05EA}");
    }

    #[test]
    fn test_sof_pasuq_is_wrapped_once() {
        let once = HebrewCharacterPreprocessor.process("\u{05D0}\u{05C3}").into_owned();
        assert_eq!(once, "\u{05D0}<span dir='rtl'>\u{05C3}</span> ");

        let twice = HebrewCharacterPreprocessor.process(&once).into_owned();
        assert_eq!(twice, once, "applying the preprocessor again must not change the text");
    }

    #[test]
    fn test_text_without_hebrew_marks_is_borrowed() {
        assert!(matches!(HebrewCharacterPreprocessor.process("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strongs_reference_becomes_link() {
        let linked = StrongsLinkCreator.process("from a prim. root; see HEBREW for 0433").into_owned();
        assert_eq!(
            linked,
            "from a prim. root; <a href='hdef:00433' class='strongs'>see HEBREW for 0433</a>"
        );

        let again = StrongsLinkCreator.process(&linked).into_owned();
        assert_eq!(again, linked);
    }

    #[test]
    fn test_greek_reference() {
        let linked = StrongsLinkCreator.process("GREEK for 26").into_owned();
        assert_eq!(linked, "<a href='gdef:00026' class='strongs'>GREEK for 26</a>");
    }

    #[test]
    fn test_selection_follows_parameters() {
        let params = OsisToHtmlParameters {
            language_code: "he".to_string(),
            convert_strongs_refs_to_links: true,
            ..Default::default()
        };
        assert_eq!(select_preprocessors(&params).len(), 2);
        assert!(select_preprocessors(&OsisToHtmlParameters::default()).is_empty());
    }
}
