//! Strong's numbers and morphology on `<w>` elements
//!
//! The word text is written by the character path as it arrives; when the
//! element closes the annotations follow it. Strong's numbers are emitted in
//! reverse source order and the morphology link is glued to the number it is
//! paired with, e.g. for `lemma="strong:H0853 strong:H01254" morph="robinson:N-PRI"`:
//!
//! ```text
//! text <a href='hdef:01254' class='strongs'>01254</a> <a href='hdef:00853' class='strongs'>0853</a><a href='robinson:N-PRI' class='morphology'>N-PRI</a>
//! ```
//!
//! followed by a single space.

use crate::converters::osis_to_html::context::RenderContext;
use crate::converters::osis_to_html::tags::TagHandler;
use crate::parse::osis;
use crate::parse::Attributes;
use crate::utils::html::{escape_attribute, escape_text};

/// Morphology schemes that have a definition module to link to
const LINKED_MORPHOLOGY_SCHEMES: &[&str] = &["robinson"];

const STRONGS_NUMBER_WIDTH: usize = 5;

#[derive(Debug, Default)]
pub struct StrongsHandler {
    /// Annotation groups of the open `<w>` elements, innermost last
    pending: Vec<Vec<String>>,
}

impl StrongsHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// One rendered annotation per Strong's number, in source order
    fn strongs_links(lemma: &str) -> Vec<String> {
        lemma
            .split_whitespace()
            .filter_map(|token| token.strip_prefix(osis::LEMMA_STRONGS_PREFIX))
            .filter(|code| code.len() >= 2)
            .filter_map(strongs_link)
            .collect()
    }

    /// One rendered annotation per morphology code, in source order
    fn morphology_links(morph: &str) -> Vec<String> {
        morph
            .split_whitespace()
            .filter_map(|token| {
                let (scheme, code) = token.split_once(':')?;
                if code.is_empty() {
                    return None;
                }
                if LINKED_MORPHOLOGY_SCHEMES.contains(&scheme) {
                    Some(format!(
                        "<a href='{}:{}' class='morphology'>{}</a>",
                        scheme,
                        escape_attribute(code),
                        escape_text(code)
                    ))
                } else {
                    Some(format!("<span class='morphology'>{}</span>", escape_text(code)))
                }
            })
            .collect()
    }

    /// Pair numbers with morphology by position, then reverse
    fn annotations(attrs: &Attributes, cx: &RenderContext<'_>) -> Vec<String> {
        let strongs = match (cx.params.show_strongs, attrs.get(osis::ATTR_LEMMA)) {
            (true, Some(lemma)) => Self::strongs_links(lemma),
            _ => Vec::new(),
        };
        let morphology = match (cx.params.show_morphology, attrs.get(osis::ATTR_MORPH)) {
            (true, Some(morph)) => Self::morphology_links(morph),
            _ => Vec::new(),
        };

        let count = strongs.len().max(morphology.len());
        let mut merged: Vec<String> = (0..count)
            .map(|i| {
                let mut item = strongs.get(i).cloned().unwrap_or_default();
                if let Some(m) = morphology.get(i) {
                    item.push_str(m);
                }
                item
            })
            .collect();
        merged.reverse();
        merged
    }
}

/// Link for a code such as `H07225`, or the bare code if the language is unknown
fn strongs_link(code: &str) -> Option<String> {
    let mut chars = code.chars();
    let language = chars.next()?;
    let number = chars.as_str();
    let protocol = match language {
        'H' | 'h' => "hdef",
        'G' | 'g' => "gdef",
        _ => {
            log::debug!("Unknown Strong's language in {}", code);
            return Some(escape_text(code).into_owned());
        }
    };

    let digits: String = number.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Some(escape_text(code).into_owned());
    }
    Some(format!(
        "<a href='{}:{:0>width$}' class='strongs'>{}</a>",
        protocol,
        digits,
        escape_text(number),
        width = STRONGS_NUMBER_WIDTH
    ))
}

impl TagHandler for StrongsHandler {
    fn tag_name(&self) -> &'static str {
        osis::W
    }

    fn start(&mut self, attrs: &Attributes, cx: &mut RenderContext<'_>) {
        let annotations = Self::annotations(attrs, cx);
        self.pending.push(annotations);
    }

    fn end(&mut self, cx: &mut RenderContext<'_>) {
        let Some(annotations) = self.pending.pop() else {
            return;
        };
        if annotations.is_empty() {
            return;
        }
        for annotation in &annotations {
            cx.writer.write(" ");
            cx.writer.write(annotation);
        }
        cx.writer.write(" ");
    }
}
