use nom::branch::alt;
use nom::character::complete::{char, satisfy};
use nom::combinator::{map, value};
use nom::multi::many0;
use nom::IResult;

use crate::error::{LexiconError, Result};

#[derive(Debug, PartialEq, Clone)]
pub struct Pattern {
    pub(crate) elements: Vec<Element>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Element {
    /// A letter that must match exactly.
    Literal(char),
    /// `_`: exactly one letter.
    Wildcard,
    /// `?`: zero or one letter.
    Optional,
    /// `*`: any run of letters, possibly empty.
    Repeat,
}

impl Pattern {
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// True when the pattern is made only of literals.
    pub fn is_literal(&self) -> bool {
        self.elements.iter().all(|x| matches!(x, Element::Literal(_)))
    }
}

/// Parses a whole pattern, reporting the first character that is neither a
/// lowercase letter nor one of `_`, `?`, `*`.
pub fn parse_pattern(input: &str) -> Result<Pattern> {
    // many0 cannot fail here; it stops at the first unrecognised character
    let (rest, elements) = match pattern(input) {
        Ok(parsed) => parsed,
        Err(_) => (input, vec![]),
    };
    match rest.chars().next() {
        None => Ok(Pattern { elements }),
        Some(found) => Err(LexiconError::InvalidPattern {
            pattern: input.to_string(),
            position: input[..input.len() - rest.len()].chars().count(),
            found,
        }),
    }
}

pub fn pattern(input: &str) -> IResult<&str, Vec<Element>> {
    many0(element)(input)
}

fn literal(input: &str) -> IResult<&str, char> {
    satisfy(|c| c.is_ascii_lowercase())(input)
}

fn element(input: &str) -> IResult<&str, Element> {
    use Element::*;

    alt((
        value(Wildcard, char('_')),
        value(Optional, char('?')),
        value(Repeat, char('*')),
        map(literal, Literal),
    ))(input)
}
