pub mod alphabet;
pub mod cli;
pub mod error;
pub mod regex;
pub mod wordlist;

pub use error::{LexiconError, Result};
pub use wordlist::index::Index;
pub use wordlist::trie::{LoadStats, Trie, Words};
pub use wordlist::wordlist::{FileFormat, Wordlist};
