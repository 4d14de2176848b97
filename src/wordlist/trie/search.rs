use std::collections::HashSet;

use crate::error::Result;
use crate::regex::{parse_pattern, Element, Pattern};
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

impl Trie {

    pub fn contains_word(&self, word: &str) -> bool {
        self.get_node(word)
            .map(|x| x.is_terminal()).unwrap_or(false)
    }

    /// The empty string is a prefix of everything.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.get_node(prefix).is_some()
    }

    fn get_node(&self, word: &str) -> Option<&TrieNode> {
        word.chars().try_fold(&self.root, |node, c| node.child_for(c))
    }

    /// Stored words of the same length as `target` that differ from it in at
    /// most `max_distance` positions.
    pub fn suggest_corrections(&self, target: &str, max_distance: usize) -> HashSet<String> {
        let target: Vec<char> = target.chars().collect();
        let mut corrections = HashSet::new();
        let mut path = String::new();
        Self::build_corrections(&self.root, &target, max_distance, &mut path, &mut corrections);
        corrections
    }

    fn build_corrections(node: &TrieNode, target: &[char], budget: usize,
                         path: &mut String, corrections: &mut HashSet<String>) {
        let (&next, rest) = match target.split_first() {
            None => {
                if node.is_terminal() {
                    corrections.insert(path.clone());
                }
                return;
            }
            Some(split) => split,
        };
        for child in node {
            let budget = if child.letter == next {
                budget
            } else if budget > 0 {
                budget - 1
            } else {
                continue;
            };
            path.push(child.letter);
            Self::build_corrections(child, rest, budget, path, corrections);
            path.pop();
        }
    }

    /// Words matching a wildcard pattern of letters, `_`, `?` and `*`.
    pub fn match_pattern(&self, pattern: &str) -> Result<HashSet<String>> {
        Ok(self.match_parsed(&parse_pattern(pattern)?))
    }

    pub fn match_parsed(&self, pattern: &Pattern) -> HashSet<String> {
        if pattern.is_literal() {
            let word: String = pattern.elements().iter()
                .filter_map(|x| match x {
                    Element::Literal(c) => Some(*c),
                    _ => None,
                })
                .collect();
            return Some(word).filter(|x| self.contains_word(x)).into_iter().collect();
        }
        let mut search = PatternSearch {
            elements: pattern.elements(),
            path: String::new(),
            visited: HashSet::new(),
            matches: HashSet::new(),
        };
        search.visit(&self.root, 0);
        search.matches
    }
}

struct PatternSearch<'p> {
    elements: &'p [Element],
    path: String,
    // (node address, pattern position) pairs already explored
    visited: HashSet<(usize, usize)>,
    matches: HashSet<String>,
}

impl<'p> PatternSearch<'p> {
    fn visit(&mut self, node: &TrieNode, pos: usize) {
        if !self.visited.insert((node as *const TrieNode as usize, pos)) {
            return;
        }
        let element = match self.elements.get(pos) {
            None => {
                if node.is_terminal() {
                    self.matches.insert(self.path.clone());
                }
                return;
            }
            Some(&element) => element,
        };
        match element {
            Element::Literal(c) => {
                if let Some(child) = node.child_for(c) {
                    self.descend(child, pos + 1);
                }
            }
            Element::Wildcard => {
                for child in node {
                    self.descend(child, pos + 1);
                }
            }
            Element::Optional => {
                self.visit(node, pos + 1);
                for child in node {
                    self.descend(child, pos + 1);
                }
            }
            Element::Repeat => {
                self.visit(node, pos + 1);
                for child in node {
                    self.descend(child, pos + 1);
                    self.descend(child, pos);
                }
            }
        }
    }

    fn descend(&mut self, child: &TrieNode, pos: usize) {
        self.path.push(child.letter);
        self.visit(child, pos);
        self.path.pop();
    }
}
