//! Resolution of scripture references to display names and link targets
//!
//! Versification is outside the engine. Handlers only ask a
//! [`ReferenceResolver`] to turn a raw reference into ranges with an OSIS
//! target and a display name. [`OsisReferenceResolver`] is a small default
//! that understands OSIS references (`Gen.1.1`, `Gen.1.1-Gen.1.3`, lists
//! separated by spaces) and simple English ones (`Genesis 1:1-3`).

pub mod books;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use books::{find_book, BookInfo};

/// One contiguous range of a resolved reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRange {
    /// OSIS form of the whole range, e.g. `Gen.1.1-Gen.1.3`
    pub osis_ref: String,
    /// OSIS id of the first verse
    pub start_osis_id: String,
    pub display_name: String,
    pub is_single_verse: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPassage {
    pub ranges: Vec<ResolvedRange>,
}

impl ResolvedPassage {
    pub fn display_name(&self) -> String {
        self.ranges
            .iter()
            .map(|r| r.display_name.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn is_single_range(&self) -> bool {
        self.ranges.len() == 1
    }
}

/// Verse addressing collaborator
pub trait ReferenceResolver {
    /// Resolve a raw reference; `None` when it cannot be understood
    fn resolve(&self, reference: &str) -> Option<ResolvedPassage>;

    /// Whether a book/chapter/verse exists in the versification
    fn is_in_range(&self, book: &str, chapter: u32, verse: u32) -> bool;
}

/// Default resolver for OSIS and simple English references
#[derive(Debug, Clone, Copy, Default)]
pub struct OsisReferenceResolver;

#[derive(Debug, Clone, Copy)]
struct VerseRef {
    book: &'static BookInfo,
    chapter: Option<u32>,
    verse: Option<u32>,
}

impl VerseRef {
    fn osis_id(&self) -> String {
        match (self.chapter, self.verse) {
            (Some(c), Some(v)) => format!("{}.{}.{}", self.book.osis_id, c, v),
            (Some(c), None) => format!("{}.{}", self.book.osis_id, c),
            _ => self.book.osis_id.to_string(),
        }
    }

    fn display_name(&self) -> String {
        match (self.chapter, self.verse) {
            (Some(c), Some(v)) => format!("{} {}:{}", self.book.name, c, v),
            (Some(c), None) => format!("{} {}", self.book.name, c),
            _ => self.book.name.to_string(),
        }
    }
}

static ENGLISH_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((?:[123] ?)?[A-Za-z][A-Za-z ]*?)\.? (\d+)(?::(\d+))?(?:-(?:(\d+):)?(\d+))?$")
        .expect("static regex is valid")
});

impl OsisReferenceResolver {
    pub fn new() -> Self {
        Self
    }

    fn parse_osis_point(&self, point: &str) -> Option<VerseRef> {
        let mut parts = point.trim().split('.');
        let book = find_book(parts.next()?)?;
        let chapter = match parts.next() {
            Some(c) => Some(c.parse().ok()?),
            None => None,
        };
        let verse = match parts.next() {
            Some(v) => Some(v.parse().ok()?),
            None => None,
        };
        if parts.next().is_some() {
            return None;
        }
        let verse_ref = VerseRef { book, chapter, verse };
        self.is_valid(&verse_ref).then_some(verse_ref)
    }

    fn is_valid(&self, r: &VerseRef) -> bool {
        match r.chapter {
            Some(c) => self.is_in_range(r.book.osis_id, c, r.verse.unwrap_or(1)),
            None => true,
        }
    }

    fn parse_osis_range(&self, token: &str) -> Option<ResolvedRange> {
        let (start, end) = match token.split_once('-') {
            Some((s, e)) => (self.parse_osis_point(s)?, Some(self.parse_osis_point(e)?)),
            None => (self.parse_osis_point(token)?, None),
        };
        Some(build_range(start, end))
    }

    fn parse_english(&self, reference: &str) -> Option<ResolvedRange> {
        let caps = ENGLISH_REFERENCE.captures(reference.trim())?;
        let book = find_book(caps.get(1)?.as_str().trim())?;
        let chapter: u32 = caps.get(2)?.as_str().parse().ok()?;
        let verse: Option<u32> = caps.get(3).and_then(|m| m.as_str().parse().ok());
        let start = VerseRef {
            book,
            chapter: Some(chapter),
            verse,
        };
        if !self.is_valid(&start) {
            return None;
        }

        let end = match caps.get(5) {
            Some(last) => {
                let last: u32 = last.as_str().parse().ok()?;
                let end = match (caps.get(4), verse) {
                    (Some(c), _) => VerseRef {
                        book,
                        chapter: Some(c.as_str().parse().ok()?),
                        verse: Some(last),
                    },
                    (None, Some(_)) => VerseRef {
                        book,
                        chapter: Some(chapter),
                        verse: Some(last),
                    },
                    (None, None) => VerseRef {
                        book,
                        chapter: Some(last),
                        verse: None,
                    },
                };
                Some(end)
            }
            None => None,
        };
        Some(build_range(start, end))
    }
}

fn build_range(start: VerseRef, end: Option<VerseRef>) -> ResolvedRange {
    match end {
        None => ResolvedRange {
            osis_ref: start.osis_id(),
            start_osis_id: start.osis_id(),
            display_name: start.display_name(),
            is_single_verse: start.verse.is_some(),
        },
        Some(end) => {
            let display_name = if !std::ptr::eq(start.book, end.book) {
                format!("{}-{}", start.display_name(), end.display_name())
            } else if start.chapter == end.chapter {
                match end.verse {
                    Some(v) => format!("{}-{}", start.display_name(), v),
                    None => start.display_name(),
                }
            } else {
                match (end.chapter, end.verse) {
                    (Some(c), Some(v)) => format!("{}-{}:{}", start.display_name(), c, v),
                    (Some(c), None) => format!("{}-{}", start.display_name(), c),
                    _ => start.display_name(),
                }
            };
            ResolvedRange {
                osis_ref: format!("{}-{}", start.osis_id(), end.osis_id()),
                start_osis_id: start.osis_id(),
                display_name,
                is_single_verse: false,
            }
        }
    }
}

impl ReferenceResolver for OsisReferenceResolver {
    fn resolve(&self, reference: &str) -> Option<ResolvedPassage> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }

        let osis_ranges: Option<Vec<ResolvedRange>> = reference
            .split_whitespace()
            .map(|token| self.parse_osis_range(token))
            .collect();
        if let Some(ranges) = osis_ranges {
            return Some(ResolvedPassage { ranges });
        }

        let english_ranges: Option<Vec<ResolvedRange>> = reference
            .split(';')
            .map(|part| self.parse_english(part))
            .collect();
        english_ranges.map(|ranges| ResolvedPassage { ranges })
    }

    fn is_in_range(&self, book: &str, chapter: u32, verse: u32) -> bool {
        match find_book(book) {
            Some(info) => chapter >= 1 && chapter <= info.chapters && verse >= 1,
            None => false,
        }
    }
}
