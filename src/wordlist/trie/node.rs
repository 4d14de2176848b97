use std::fmt::{Debug, Formatter};

use derive_new::new;

/// One labelled edge target in the trie.
///
/// Children are kept sorted by letter, so iterating a node always yields
/// them in ascending order.
#[derive(Clone, Default, PartialEq, Eq, new)]
pub(crate) struct TrieNode {
    pub(crate) letter: char,
    #[new(default)]
    is_terminal: bool,
    #[new(default)]
    children: Vec<TrieNode>,
}

impl TrieNode {
    fn position(&self, c: char) -> Result<usize, usize> {
        self.children.binary_search_by_key(&c, |x| x.letter)
    }

    pub(crate) fn child_for(&self, c: char) -> Option<&TrieNode> {
        self.position(c).ok().map(|idx| &self.children[idx])
    }

    pub(crate) fn child_for_mut(&mut self, c: char) -> Option<&mut TrieNode> {
        match self.position(c) {
            Ok(idx) => Some(&mut self.children[idx]),
            Err(_) => None,
        }
    }

    /// Returns the child for `c`, creating it in sorted position if absent.
    pub(crate) fn insert_child(&mut self, c: char) -> &mut TrieNode {
        let idx = match self.position(c) {
            Ok(idx) => idx,
            Err(idx) => {
                self.children.insert(idx, TrieNode::new(c));
                idx
            }
        };
        &mut self.children[idx]
    }

    pub(crate) fn remove_child(&mut self, c: char) -> Option<TrieNode> {
        self.position(c).ok().map(|idx| self.children.remove(idx))
    }

    pub(crate) fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub(crate) fn set_terminal(&mut self, b: bool) {
        self.is_terminal = b;
    }

    pub(crate) fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub(crate) fn children(&self) -> std::slice::Iter<'_, TrieNode> {
        self.children.iter()
    }

    /// A node that ends no word and leads to none.
    pub(crate) fn is_dead(&self) -> bool {
        !self.is_terminal && !self.has_children()
    }

    pub(crate) fn traverse_prefix<'f, F>(&'f self, f: &mut F)
        where F: FnMut(&'f TrieNode) {
        f(self);
        for node in &self.children {
            node.traverse_prefix(f);
        }
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = &'a TrieNode;
    type IntoIter = std::slice::Iter<'a, TrieNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.children()
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.iter()
                .map(|x| x.letter)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
