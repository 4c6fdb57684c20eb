use std::collections::HashSet;

use extropia_protocol::Morpheme;

/// Punctuation that forms operator tokens (`nyx-`, `nyx+`, `nyx!`, `nyx?`).
pub const OPERATOR_MARKS: [char; 4] = ['-', '+', '!', '?'];

/// Splits an operator token into stem and mark, e.g. `"nyx+"` -> `("nyx", '+')`.
pub fn split_operator(token: &str) -> Option<(&str, char)> {
    let mark = token.chars().last()?;
    let stem = &token[..token.len() - mark.len_utf8()];
    if OPERATOR_MARKS.contains(&mark) && !stem.is_empty() {
        Some((stem, mark))
    } else {
        None
    }
}

/// Stems that take a hyphen suffix: `X` such that `X-` is a dictionary token.
///
/// The parser consults this to decide whether a hyphen belongs to the word
/// before it or separates two words.
#[derive(Debug, Clone, Default)]
pub struct OperatorStems {
    stems: HashSet<String>,
}

impl OperatorStems {
    pub fn from_morphemes<'a>(morphemes: impl IntoIterator<Item = &'a Morpheme>) -> Self {
        let stems = morphemes
            .into_iter()
            .filter_map(|m| match split_operator(&m.token) {
                Some((stem, '-')) => Some(stem.to_string()),
                _ => None,
            })
            .collect();
        Self { stems }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.stems.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for OperatorStems {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            stems: iter.into_iter().map(Into::into).collect(),
        }
    }
}
