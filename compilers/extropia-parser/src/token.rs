use std::fmt;
use std::ops::Deref;

/// Tokens of one input string, in input order.
///
/// Tokens are not checked against the dictionary; unknown words pass through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn join(&self, separator: &str) -> String {
        self.tokens.join(separator)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}

impl Deref for TokenSequence {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("-"))
    }
}
