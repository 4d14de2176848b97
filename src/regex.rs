pub mod parse;

pub use parse::{parse_pattern, Element, Pattern};
