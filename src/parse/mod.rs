//! OSIS parsing front end
//!
//! This module turns OSIS markup into a stream of events:
//! - `osis`: element/attribute vocabulary and osisID helpers
//! - `attributes`: attribute map handed to start-element events
//! - `handler`: the [`OsisContentHandler`] trait every conversion implements
//! - `reader`: quick-xml based streaming parser
//! - `pool`: bounded pool of reusable parsers

pub mod osis;
pub mod attributes;
pub mod handler;
pub mod reader;
pub mod pool;

use lazy_static::lazy_static;

pub use attributes::Attributes;
pub use handler::OsisContentHandler;
pub use pool::ParserPool;
pub use reader::OsisParser;

// Pool used by the top-level conversion functions
lazy_static! {
    static ref SHARED_POOL: ParserPool = ParserPool::default();
}

/// Process-wide parser pool for callers that do not bring their own
pub fn shared_pool() -> &'static ParserPool {
    &SHARED_POOL
}
