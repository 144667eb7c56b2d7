//! Closed set of tags the HTML conversion understands

use crate::converters::osis_to_html::context::RenderContext;
use crate::parse::osis;
use crate::parse::Attributes;

/// Capabilities every tag handler provides.
///
/// Handlers keep only their own nesting state; everything shared lives in
/// the [`RenderContext`].
pub trait TagHandler {
    fn tag_name(&self) -> &'static str;

    fn start(&mut self, attrs: &Attributes, cx: &mut RenderContext<'_>);

    fn end(&mut self, cx: &mut RenderContext<'_>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsisTag {
    Verse,
    Div,
    Milestone,
    Title,
    Hi,
    Note,
    Reference,
    W,
    L,
    Lg,
    Lb,
    P,
    Q,
    TransChange,
    DivineName,
    Figure,
    Table,
    Row,
    Cell,
    List,
    Item,
    TeiOrth,
    TeiPron,
    TeiRef,
}

impl OsisTag {
    pub fn from_name(name: &str) -> Option<Self> {
        let tag = match name {
            osis::VERSE => OsisTag::Verse,
            osis::DIV => OsisTag::Div,
            osis::MILESTONE => OsisTag::Milestone,
            osis::TITLE => OsisTag::Title,
            osis::HI => OsisTag::Hi,
            osis::NOTE => OsisTag::Note,
            osis::REFERENCE => OsisTag::Reference,
            osis::W => OsisTag::W,
            osis::L => OsisTag::L,
            osis::LG => OsisTag::Lg,
            osis::LB => OsisTag::Lb,
            osis::P => OsisTag::P,
            osis::Q => OsisTag::Q,
            osis::TRANS_CHANGE => OsisTag::TransChange,
            osis::DIVINE_NAME => OsisTag::DivineName,
            osis::FIGURE => OsisTag::Figure,
            osis::TABLE => OsisTag::Table,
            osis::ROW => OsisTag::Row,
            osis::CELL => OsisTag::Cell,
            osis::LIST => OsisTag::List,
            osis::ITEM => OsisTag::Item,
            osis::TEI_ORTH => OsisTag::TeiOrth,
            osis::TEI_PRON => OsisTag::TeiPron,
            osis::TEI_REF => OsisTag::TeiRef,
            _ => return None,
        };
        Some(tag)
    }
}

/// Tags that are expected and deliberately produce no markup of their own.
/// Their character data still flows through.
pub const IGNORED_TAGS: &[&str] = &[
    osis::CHAPTER,
    "osis",
    "osisText",
    "header",
    "work",
    "seg",
    "foreign",
    "name",
    "rdg",
    "catchWord",
    "abbr",
    "inscription",
    "mentioned",
];

pub fn is_ignored(name: &str) -> bool {
    IGNORED_TAGS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names_resolve() {
        assert_eq!(OsisTag::from_name("verse"), Some(OsisTag::Verse));
        assert_eq!(OsisTag::from_name("transChange"), Some(OsisTag::TransChange));
        assert_eq!(OsisTag::from_name("ref"), Some(OsisTag::TeiRef));
        assert_eq!(OsisTag::from_name("chapter"), None);
        assert!(is_ignored("chapter"));
        assert!(!is_ignored("unknownTag"));
    }
}
