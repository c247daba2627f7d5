//! Word tokenizer using nom
//!
//! A word is a maximal run of ASCII letters and digits. Everything else
//! separates words. Output is lowercased:
//! ```text
//! "Data, DATA and data!" -> data, data, and, data
//! ```

use std::iter::FusedIterator;

use nom::{
    bytes::complete::{take_while, take_while1},
    sequence::preceded,
    IResult,
};

/// Longest word the tokenizer emits; longer runs are truncated
pub const MAX_WORD_LEN: usize = 255;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

fn separators(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| !is_word_char(c))(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    take_while1(is_word_char)(input)
}

/// Skip leading separators and take the next word
pub fn next_word(input: &str) -> IResult<&str, &str> {
    preceded(separators, word)(input)
}

/// Lazy iterator over the normalized words of a text
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match next_word(self.rest) {
            Ok((rest, raw)) => {
                self.rest = rest;
                // Word chars are ASCII, so byte slicing stays on char boundaries.
                let raw = &raw[..raw.len().min(MAX_WORD_LEN)];
                Some(raw.to_ascii_lowercase())
            }
            Err(_) => {
                self.rest = "";
                None
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/// Split `text` into normalized words
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}

/// Normalize a query: keep ASCII alphanumerics, lowercased
///
/// Unlike [`tokenize`], inner punctuation is dropped rather than treated
/// as a separator, so `"don't"` becomes `"dont"`.
pub fn normalize(query: &str) -> String {
    query
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
