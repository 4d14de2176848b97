use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LexiconError>;

#[derive(Debug, Error)]
pub enum LexiconError {
    /// The bulk-load source could not be opened or read.
    #[error("failed to read file {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid character {found:?} at position {position} in pattern {pattern:?}")]
    InvalidPattern {
        pattern: String,
        position: usize,
        found: char,
    },
}
