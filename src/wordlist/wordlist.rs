use std::borrow::Cow;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use metrics::gauge;
use tracing::{info, warn};
use typed_builder::TypedBuilder;

use crate::error::{LexiconError, Result};
use crate::regex::Pattern;
use crate::wordlist::trie::{LoadStats, Trie, Words};

/// A trie-backed word list that can be filled from files.
#[derive(Debug, Default, Clone)]
pub struct Wordlist {
    trie: Trie,
}

/// How to pull a word out of each line of a word file.
#[derive(TypedBuilder, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: usize,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

impl FileFormat {
    /// The word field of `line`; a line without that column yields "".
    pub fn parse_line<'a>(&self, line: &'a str) -> &'a str {
        match self.delimiter {
            None => line,
            Some(delimiter) => line.split(delimiter).nth(self.word_column).unwrap_or(""),
        }
    }
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Wordlist { trie: Trie::new() }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    delegate! {
        to self.trie {
            pub fn add_word(&mut self, word: &str) -> bool;
            pub fn remove_word(&mut self, word: &str) -> bool;
            pub fn contains_word(&self, word: &str) -> bool;
            pub fn contains_prefix(&self, prefix: &str) -> bool;
            pub fn num_words(&self) -> usize;
            pub fn words(&self) -> Words<'_>;
            pub fn suggest_corrections(&self, target: &str, max_distance: usize) -> HashSet<String>;
            pub fn match_pattern(&self, pattern: &str) -> Result<HashSet<String>>;
            pub fn match_parsed(&self, pattern: &Pattern) -> HashSet<String>;
        }
    }

    /// Adds the words of `filename`, one per line.
    ///
    /// The whole file is read before anything is inserted, so a read error
    /// leaves the list unchanged. Lines that are not valid UTF-8 are skipped.
    pub fn load_file<P: AsRef<Path>>(&mut self, filename: P, format: FileFormat) -> Result<LoadStats> {
        let path = filename.as_ref();
        info!(path = %path.display(), "reading words");

        let unreadable = |source: std::io::Error| LexiconError::Unreadable { path: path.to_path_buf(), source };
        let file = File::open(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "could not open word file");
            unreadable(e)
        })?;
        let raw_lines = BufReader::new(file)
            .split(b'\n')
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| {
                warn!(path = %path.display(), error = %e, "could not read word file");
                unreadable(e)
            })?;
        // invalid UTF-8 decodes to U+FFFD, which add_lines skips
        let lines: Vec<Cow<str>> = raw_lines.iter().map(|x| String::from_utf8_lossy(x)).collect();

        let start = Instant::now();
        let stats = self.trie.add_lines(lines.iter().map(|x| format.parse_line(x)));
        info!(path = %path.display(),
              lines = stats.lines, added = stats.added, skipped = stats.skipped,
              elapsed_ms = start.elapsed().as_millis() as u64,
              "loaded words");
        gauge!("lexicon_words", self.trie.num_words() as f64);
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::error::LexiconError;
    use crate::wordlist::trie::LoadStats;
    use crate::wordlist::wordlist::{FileFormat, Wordlist};

    fn word_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_one_word_per_line() {
        let file = word_file("Cat\ncar\n\ncart\r\ndog\ncat\n");
        let mut wl = Wordlist::new();
        let stats = wl.load_file(file.path(), FileFormat::default()).unwrap();
        assert_eq!(stats, LoadStats::new(6, 4, 1));
        assert_eq!(wl.num_words(), 4);
        assert_eq!(wl.words().collect::<Vec<_>>(), vec!["car", "cart", "cat", "dog"]);
    }

    #[test]
    fn skips_lines_that_are_not_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"cat\ncaf\xe9\ndog\n").unwrap();
        let mut wl = Wordlist::new();
        let stats = wl.load_file(file.path(), FileFormat::default()).unwrap();
        assert_eq!(stats, LoadStats::new(3, 2, 1));
        assert_eq!(wl.words().collect::<Vec<_>>(), vec!["cat", "dog"]);
    }

    #[test]
    fn loads_delimited_columns() {
        let file = word_file("50;apple\n40;Banana\nbroken\n");
        let mut wl = Wordlist::new();
        let format = FileFormat::builder().delimiter(';').word_column(1).build();
        let stats = wl.load_file(file.path(), format).unwrap();
        assert_eq!(stats.added, 2);
        assert_eq!(stats.skipped, 1);
        assert!(wl.contains_word("banana"));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let mut wl = Wordlist::new();
        wl.add_word("keep");
        let result = wl.load_file(dir.path().join("missing.txt"), FileFormat::default());
        assert!(matches!(result, Err(LexiconError::Unreadable { .. })));
        assert_eq!(wl.num_words(), 1);
    }

    #[test]
    fn empty_file_adds_nothing() {
        let file = word_file("");
        let mut wl = Wordlist::new();
        assert_eq!(wl.load_file(file.path(), FileFormat::default()).unwrap(), LoadStats::default());
    }

    #[test]
    fn delegates_queries() {
        let mut wl = Wordlist::new();
        for w in ["bat", "cat", "hat"] {
            assert!(wl.add_word(w));
        }
        assert!(wl.contains_prefix("ha"));
        assert_eq!(wl.suggest_corrections("cat", 1).len(), 3);
        assert_eq!(wl.match_pattern("_at").unwrap().len(), 3);
        assert!(wl.remove_word("hat"));
        assert_eq!(wl.trie().num_words(), 2);
    }

    #[test]
    fn parse_line_without_delimiter_keeps_line() {
        let format = FileFormat::default();
        assert_eq!(format.parse_line("a;b"), "a;b");
        let format = FileFormat::builder().delimiter(',').build();
        assert_eq!(format.parse_line("a,b"), "a");
        assert_eq!(format.parse_line(""), "");
    }
}
