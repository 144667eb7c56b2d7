//! One handler per OSIS tag (or family of tags)

pub mod block;
pub mod div;
pub mod figure;
pub mod hi;
pub mod lines;
pub mod milestone;
pub mod note;
pub mod note_marker;
pub mod q;
pub mod reference;
pub mod strongs;
pub mod tei;
pub mod title;
pub mod verse;

pub use block::BlockHandler;
pub use div::DivHandler;
pub use figure::FigureHandler;
pub use hi::{ClassSpanHandler, HiHandler};
pub use lines::{LHandler, LbHandler, LgHandler, PHandler};
pub use milestone::MilestoneHandler;
pub use note::NoteHandler;
pub use q::QHandler;
pub use reference::ReferenceHandler;
pub use strongs::StrongsHandler;
pub use title::TitleHandler;
pub use verse::VerseHandler;
