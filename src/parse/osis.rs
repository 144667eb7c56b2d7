//! OSIS element and attribute vocabulary

// Elements
pub const VERSE: &str = "verse";
pub const CHAPTER: &str = "chapter";
pub const DIV: &str = "div";
pub const MILESTONE: &str = "milestone";
pub const TITLE: &str = "title";
pub const HI: &str = "hi";
pub const NOTE: &str = "note";
pub const REFERENCE: &str = "reference";
pub const W: &str = "w";
pub const L: &str = "l";
pub const LG: &str = "lg";
pub const LB: &str = "lb";
pub const P: &str = "p";
pub const Q: &str = "q";
pub const TRANS_CHANGE: &str = "transChange";
pub const DIVINE_NAME: &str = "divineName";
pub const FIGURE: &str = "figure";
pub const TABLE: &str = "table";
pub const ROW: &str = "row";
pub const CELL: &str = "cell";
pub const LIST: &str = "list";
pub const ITEM: &str = "item";

// TEI elements found in dictionary modules
pub const TEI_ORTH: &str = "orth";
pub const TEI_PRON: &str = "pron";
pub const TEI_REF: &str = "ref";

// Attributes
pub const ATTR_OSIS_ID: &str = "osisID";
pub const ATTR_OSIS_REF: &str = "osisRef";
pub const ATTR_TYPE: &str = "type";
pub const ATTR_SUBTYPE: &str = "subType";
pub const ATTR_SID: &str = "sID";
pub const ATTR_EID: &str = "eID";
pub const ATTR_N: &str = "n";
pub const ATTR_LEMMA: &str = "lemma";
pub const ATTR_MORPH: &str = "morph";
pub const ATTR_CANONICAL: &str = "canonical";
pub const ATTR_LEVEL: &str = "level";
pub const ATTR_WHO: &str = "who";
pub const ATTR_MARKER: &str = "marker";
pub const ATTR_SRC: &str = "src";
pub const TEI_ATTR_REND: &str = "rend";
pub const TEI_ATTR_TARGET: &str = "target";

// Attribute values
pub const DIV_TYPE_PARAGRAPH: &str = "paragraph";
pub const DIV_TYPE_PARAGRAPH_LEGACY: &str = "x-p";
pub const SUBTYPE_PREVERSE: &str = "x-preverse";
pub const TYPE_GENERATED_CONTENT: &str = "x-gen";
pub const NOTE_TYPE_CROSS_REFERENCE: &str = "crossReference";
pub const LEMMA_STRONGS_PREFIX: &str = "strong:";
pub const WHO_JESUS: &str = "Jesus";

/// Verse number from the last segment of an osisID such as `Gen.1.3`.
///
/// Ranges and lists (`Gen.1.3-Gen.1.5`, `Gen.1.3 Gen.1.4`) resolve to their first verse.
pub fn osis_id_to_verse_number(osis_id: &str) -> Option<u32> {
    let first = osis_id.split(|c: char| c == '-' || c.is_whitespace()).next()?;
    first.rsplit('.').next()?.parse().ok()
}

/// Chapter number from an osisID with at least book, chapter and verse
pub fn osis_id_to_chapter_number(osis_id: &str) -> Option<u32> {
    let first = osis_id.split(|c: char| c == '-' || c.is_whitespace()).next()?;
    let parts: Vec<&str> = first.split('.').collect();
    if parts.len() < 3 {
        return None;
    }
    parts[parts.len() - 2].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verse_number_from_osis_id() {
        assert_eq!(osis_id_to_verse_number("Gen.1.3"), Some(3));
        assert_eq!(osis_id_to_verse_number("Ps.119.176"), Some(176));
        assert_eq!(osis_id_to_verse_number("Gen.1.3-Gen.1.5"), Some(3));
        assert_eq!(osis_id_to_verse_number("Gen.1"), Some(1));
        assert_eq!(osis_id_to_verse_number("Gen"), None);
    }

    #[test]
    fn test_chapter_number_from_osis_id() {
        assert_eq!(osis_id_to_chapter_number("John.3.16"), Some(3));
        assert_eq!(osis_id_to_chapter_number("1John.2.1 1John.2.2"), Some(2));
        assert_eq!(osis_id_to_chapter_number("John.3"), None);
    }
}
