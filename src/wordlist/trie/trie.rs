use std::fmt::{Debug, Formatter};

use derive_new::new;
use metrics::increment_counter;
use serde::Serialize;
use tracing::debug;

use crate::alphabet::{is_word, normalize};
use crate::wordlist::index::Index;
use crate::wordlist::trie::node::TrieNode;

#[derive(Clone, PartialEq, Eq)]
pub struct Trie {
    pub(crate) root: TrieNode,
    num_words: usize,
}

/// What a bulk load did with its lines.
#[derive(new, Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Lines consumed from the source.
    pub lines: usize,
    /// Words that were not already stored.
    pub added: usize,
    /// Blank lines and lines with characters outside `a`-`z`.
    pub skipped: usize,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(' '),
            num_words: 0,
        }
    }

    pub fn num_words(&self) -> usize {
        self.num_words
    }

    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    /// Adds `word`, returning false if it was already stored. The empty
    /// string is never stored.
    pub fn add_word(&mut self, word: &str) -> bool {
        if word.is_empty() || self.contains_word(word) {
            return false;
        }
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.insert_child(c);
        }
        current.set_terminal(true);
        self.num_words += 1;
        increment_counter!("lexicon_words_added");
        true
    }

    /// Removes `word`, returning false if it was not stored. Nodes left with
    /// no children and no word ending at them are pruned.
    pub fn remove_word(&mut self, word: &str) -> bool {
        if !self.contains_word(word) {
            return false;
        }
        let letters: Vec<char> = word.chars().collect();
        Self::unmark(&mut self.root, &letters);
        self.num_words -= 1;
        increment_counter!("lexicon_words_removed");
        true
    }

    // Clears the terminal flag at the end of `rest`; returns whether `node`
    // can be detached from its parent afterwards.
    fn unmark(node: &mut TrieNode, rest: &[char]) -> bool {
        match rest.split_first() {
            None => node.set_terminal(false),
            Some((&c, tail)) => {
                let prune = node.child_for_mut(c)
                    .map(|child| Self::unmark(child, tail))
                    .unwrap_or(false);
                if prune {
                    node.remove_child(c);
                }
            }
        }
        node.is_dead()
    }

    /// Adds every acceptable line from `lines`.
    ///
    /// Each line is trimmed and lowercased first. Blank lines and lines
    /// containing anything but `a`-`z` are skipped. `LoadStats::added` counts
    /// only words that were new.
    pub fn add_lines<I, S>(&mut self, lines: I) -> LoadStats
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        let mut stats = LoadStats::default();
        for line in lines {
            stats.lines += 1;
            let word = normalize(line.as_ref());
            if !is_word(&word) {
                if !word.is_empty() {
                    debug!(line = stats.lines, word = %word, "skipping line with non-letter characters");
                }
                stats.skipped += 1;
                continue;
            }
            if self.add_word(&word) {
                stats.added += 1;
            }
        }
        stats
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.root.traverse_prefix(&mut |_| count += 1);
        count - 1
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) -> bool {
        self.add_word(word)
    }

    fn remove(&mut self, word: &str) -> bool {
        self.remove_word(word)
    }

    fn contains(&self, word: &str) -> bool {
        self.contains_word(word)
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        Trie::contains_prefix(self, prefix)
    }

    fn len(&self) -> usize {
        self.num_words
    }
}

impl<'a> Extend<&'a str> for Trie {
    fn extend<I: IntoIterator<Item=&'a str>>(&mut self, iter: I) {
        iter.into_iter().for_each(|x| { self.add_word(x); });
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item=&'a str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![&self.root];
        while let Some(x) = stack.pop() {
            l.entry(&x);
            x.children().rev().for_each(|c| stack.push(c));
        }
        l.finish()
    }
}


#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::wordlist::index::Index;
    use crate::wordlist::trie::trie::{LoadStats, Trie};

    #[test]
    fn finds_words_in_trie() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let trie: Trie = words.iter().copied().collect();
        words.iter().for_each(|word| assert!(trie.contains_word(word)));
        assert_eq!(trie.num_words(), 4);
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let bad_words = vec!["he", "h", "lol", "banana", "helpful", ""];
        let trie: Trie = words.iter().copied().collect();
        bad_words.iter().for_each(|word| assert!(!trie.contains_word(word)));
    }

    #[test]
    fn prefixes_and_words() {
        let trie: Trie = vec!["cat", "car", "cart", "dog"].into_iter().collect();
        assert!(trie.contains_prefix("ca"));
        assert!(!trie.contains_word("ca"));
        assert!(trie.contains_prefix(""));
        assert!(trie.contains_prefix("cart"));
        assert!(!trie.contains_prefix("cow"));
        assert!(!trie.contains_prefix("carts"));
    }

    #[test]
    fn add_reports_duplicates() {
        let mut trie = Trie::new();
        assert!(trie.add_word("cat"));
        assert!(!trie.add_word("cat"));
        assert!(trie.add_word("ca"));
        assert!(!trie.add_word(""));
        assert!(!trie.contains_word(""));
        assert_eq!(trie.num_words(), 2);
    }

    #[test]
    fn remove_keeps_shared_prefixes() {
        let mut trie: Trie = vec!["cat", "car", "cart", "dog"].into_iter().collect();
        assert!(trie.remove_word("car"));
        assert!(!trie.contains_word("car"));
        assert!(trie.contains_prefix("car"));
        assert!(trie.contains_word("cart"));
        assert_eq!(trie.num_words(), 3);

        assert!(!trie.remove_word("car"));
        assert!(!trie.remove_word("ca"));
        assert!(!trie.remove_word("zebra"));
        assert_eq!(trie.num_words(), 3);
    }

    #[test]
    fn remove_prunes_dead_branches() {
        let mut trie: Trie = vec!["cat", "cart"].into_iter().collect();
        assert_eq!(trie.node_count(), 5);
        assert!(trie.remove_word("cart"));
        assert_eq!(trie.node_count(), 3);
        assert!(trie.contains_word("cat"));
        assert!(trie.remove_word("cat"));
        assert_eq!(trie.node_count(), 0);
        assert!(trie.is_empty());
        assert!(trie.add_word("cat"));
        assert!(trie.contains_word("cat"));
    }

    #[test]
    fn add_lines_counts_new_words() {
        let mut trie = Trie::new();
        trie.add_word("dog");
        let stats = trie.add_lines(vec!["  Cat ", "", "dog", "cat", "it's", "bird\r"]);
        assert_eq!(stats, LoadStats::new(6, 2, 2));
        assert_eq!(trie.num_words(), 3);
        assert!(trie.contains_word("cat"));
        assert!(trie.contains_word("bird"));
        assert!(!trie.contains_word("it's"));
    }

    #[test]
    fn index_trait_matches_inherent_methods() {
        let mut trie = Trie::new();
        assert!(Index::add(&mut trie, "alpha"));
        assert!(trie.contains("alpha"));
        assert!(Index::contains_prefix(&trie, "al"));
        assert_eq!(trie.len(), 1);
        assert!(Index::remove(&mut trie, "alpha"));
        assert_eq!(trie.len(), 0);
    }

    #[test]
    fn count_tracks_random_operations() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut trie = Trie::new();
        let mut reference = std::collections::HashSet::new();
        for _ in 0..2000 {
            let len = rng.gen_range(1..5);
            let word: String = (0..len).map(|_| (b'a' + rng.gen_range(0..4)) as char).collect();
            if rng.gen_bool(0.6) {
                assert_eq!(trie.add_word(&word), reference.insert(word.clone()));
            } else {
                assert_eq!(trie.remove_word(&word), reference.remove(&word));
            }
            assert_eq!(trie.num_words(), reference.len());
        }
        for word in &reference {
            assert!(trie.contains_word(word));
            for end in 0..=word.len() {
                assert!(trie.contains_prefix(&word[..end]));
            }
        }
    }
}
