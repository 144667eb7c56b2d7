//! HTML fragments shared by the handlers

pub const NBSP: &str = "&#160;";
pub const BR: &str = "<br />";
pub const PARAGRAPH_BREAK: &str = "<p />";
pub const SPACE: &str = " ";
pub const ZERO_WIDTH_SPACE: &str = "&#x200b;";
pub const LEFT_DOUBLE_QUOTE: &str = "\u{201c}";
pub const EM_DASH: &str = "&#8212;";
pub const ELLIPSIS: &str = "\u{2026}";

/// Escape text content for HTML. Quotes are left alone since text never
/// lands inside an attribute.
pub fn escape_text(text: &str) -> std::borrow::Cow<'_, str> {
    quick_xml::escape::partial_escape(text)
}

/// Escape a value written inside a single-quoted attribute
pub fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('\'', "&#39;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// `&#160;` repeated `count` times
pub fn nbsp(count: usize) -> String {
    NBSP.repeat(count)
}

/// True when the text contains nothing but whitespace and the given characters
pub fn consists_only_of(text: &str, chars: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || chars.contains(c))
}
