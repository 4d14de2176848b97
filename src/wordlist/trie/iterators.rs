use std::slice::Iter;

use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

/// Lazy pre-order walk yielding stored words in ascending order.
///
/// Each frame pairs a node's child cursor with the length of `path` at
/// that node, so backtracking is a truncate rather than a new string.
#[derive(Debug)]
pub struct Words<'a> {
    stack: Vec<(Iter<'a, TrieNode>, usize)>,
    path: String,
}

impl<'a> Words<'a> {
    pub(crate) fn new(root: &'a TrieNode) -> Self {
        Words {
            stack: vec![(root.children(), 0)],
            path: String::new(),
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (cursor, len) = self.stack.last_mut()?;
            let len = *len;
            match cursor.next() {
                None => {
                    self.stack.pop();
                }
                Some(child) => {
                    self.path.truncate(len);
                    self.path.push(child.letter);
                    self.stack.push((child.children(), self.path.len()));
                    if child.is_terminal() {
                        return Some(self.path.clone());
                    }
                }
            }
        }
    }
}

impl Trie {
    /// Every stored word, alphabetically. Each call starts a fresh walk.
    pub fn words(&self) -> Words<'_> {
        Words::new(&self.root)
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.words()
    }
}
