pub mod trie;
pub mod search;
pub mod iterators;

mod node;

pub use iterators::Words;
pub use trie::{LoadStats, Trie};
