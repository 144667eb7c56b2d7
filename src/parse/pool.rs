//! Pool of reusable OSIS parsers
//!
//! Several documents may be converted at the same time (split-screen panes),
//! and a parser instance must only serve one conversion at a time. Callers
//! obtain a parser, use it for exactly one document, and recycle it. A miss
//! constructs a new parser instead of waiting.

use std::sync::Mutex;

use crate::converters::errors::{ConversionError, Result};
use crate::parse::OsisParser;

/// Idle parsers kept when no limit is given
pub const DEFAULT_MAX_IDLE: usize = 4;

#[derive(Debug)]
pub struct ParserPool {
    idle: Mutex<Vec<OsisParser>>,
    max_idle: usize,
}

impl Default for ParserPool {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IDLE)
    }
}

impl ParserPool {
    pub fn new(max_idle: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            max_idle,
        }
    }

    /// Take an idle parser, or build a new one if none is idle
    pub fn obtain(&self) -> Result<OsisParser> {
        let mut idle = self
            .idle
            .lock()
            .map_err(|e| ConversionError::ParserUnavailable(format!("parser pool lock poisoned: {}", e)))?;

        match idle.pop() {
            Some(parser) => Ok(parser),
            None => {
                log::debug!("Parser pool miss, creating new parser");
                Ok(OsisParser::new())
            }
        }
    }

    /// Return a parser to the pool. `None` is accepted and ignored.
    ///
    /// Parsers beyond the idle limit are dropped.
    pub fn recycle(&self, parser: Option<OsisParser>) {
        let Some(parser) = parser else {
            return;
        };

        match self.idle.lock() {
            Ok(mut idle) => {
                if idle.len() < self.max_idle {
                    idle.push(parser);
                }
            }
            Err(e) => log::warn!("Discarding parser, pool lock poisoned: {}", e),
        }
    }

    pub fn idle_count(&self) -> usize {
        self.idle.lock().map(|idle| idle.len()).unwrap_or(0)
    }

    /// Obtain a parser, run `f` with it, and recycle it whatever the outcome
    pub fn with_parser<T>(&self, f: impl FnOnce(&mut OsisParser) -> Result<T>) -> Result<T> {
        let mut parser = self.obtain()?;
        let result = f(&mut parser);
        self.recycle(Some(parser));
        result
    }
}
