//! Models module for the OSIS conversions
//!
//! This module contains the data carried into and out of a conversion.

pub mod bookmark;
pub mod note;
pub mod parameters;
pub mod speak;

// Re-export commonly used types
pub use bookmark::BookmarkStyle;
pub use note::{Note, NoteType};
pub use parameters::{OsisToHtmlParameters, VerseNumberStyle};
pub use speak::{SpeakCommand, SpeakSettings, TextKind};
