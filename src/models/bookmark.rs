//! Bookmark styles used to decorate verse markers

use serde::{Deserialize, Serialize};

/// Visual style of a bookmark attached to a verse.
///
/// The engine only turns these into CSS classes on the verse span; colours and
/// icons are supplied by the stylesheet of the consuming view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookmarkStyle {
    YellowStar,
    RedHighlight,
    YellowHighlight,
    GreenHighlight,
    BlueHighlight,
}

impl BookmarkStyle {
    /// CSS class written on the verse span
    pub fn css_class(self) -> &'static str {
        match self {
            BookmarkStyle::YellowStar => "bookmark-yellow-star",
            BookmarkStyle::RedHighlight => "bookmark-red-highlight",
            BookmarkStyle::YellowHighlight => "bookmark-yellow-highlight",
            BookmarkStyle::GreenHighlight => "bookmark-green-highlight",
            BookmarkStyle::BlueHighlight => "bookmark-blue-highlight",
        }
    }
}

impl Default for BookmarkStyle {
    fn default() -> Self {
        BookmarkStyle::YellowStar
    }
}
