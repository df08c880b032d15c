use std::borrow::Borrow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of ASCII letters and digits, matched after lowercasing.
static WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9]+").expect("word pattern compiles"));

/// A normalized word: non-empty, lowercase ASCII letters and digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lazy sequence of tokens in a single line of text.
///
/// Holds the lowercased copy of the line; matches are produced on demand.
#[derive(Debug)]
pub struct Tokens {
    lowered: String,
    pos: usize,
}

impl Iterator for Tokens {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let found = WORD_RUN.find_at(&self.lowered, self.pos)?;
        self.pos = found.end();
        Some(Token(found.as_str().to_owned()))
    }
}

/// Split `text` into tokens, left to right.
///
/// The whole line is lowercased (Unicode rules) before segmentation, so a
/// character such as the Kelvin sign folds into `k`. Punctuation, whitespace
/// and anything still outside ASCII after lowercasing act as separators and
/// never produce a token.
pub fn tokenize(text: &str) -> Tokens {
    Tokens {
        lowered: text.to_lowercase(),
        pos: 0,
    }
}
