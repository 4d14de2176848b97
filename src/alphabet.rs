pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();

/// Trims a raw line and lowercases it.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// True for non-empty strings made only of `a`-`z`.
pub fn is_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| ALPHABET.contains(&b))
}
