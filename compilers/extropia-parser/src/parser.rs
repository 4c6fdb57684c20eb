use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1, take_while_m_n},
    character::complete::char,
    combinator::{eof, peek},
    sequence::terminated,
    IResult,
};
use extropia_lexicon::{OperatorStems, OPERATOR_MARKS};

/// Characters that can appear inside a token: ASCII letters plus the operator
/// marks that never separate (`+ ! ?`).
fn is_morpheme_char(c: char) -> bool {
    c.is_ascii_lowercase() || (c != '-' && OPERATOR_MARKS.contains(&c))
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

/// Lowercases and drops everything except letters, hyphens, operator marks
/// and whitespace.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|&c| c.is_ascii_lowercase() || OPERATOR_MARKS.contains(&c) || c.is_whitespace())
        .collect()
}

fn separators(input: &str) -> IResult<&str, &str> {
    take_while(is_separator)(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    take_while1(is_morpheme_char)(input)
}

/// A hyphen that ends the word before it: followed by a separator or the end.
fn hyphen_suffix(input: &str) -> IResult<&str, char> {
    terminated(char('-'), peek(alt((eof, take_while_m_n(1, 1, is_separator)))))(input)
}

/// Splits normalized text into token slices.
///
/// Runs of whitespace and hyphens separate tokens, except that a hyphen
/// directly after an operator stem, and itself followed by a separator or the
/// end of input, stays attached (`nyx- ver` gives `nyx-`, `nyx-ver` gives
/// `nyx` and `ver`).
pub fn split_tokens<'a>(normalized: &'a str, stems: &OperatorStems) -> Vec<&'a str> {
    let mut input = normalized;
    let mut result = Vec::new();

    loop {
        // 1. Skip separators
        let (next_input, _) = match separators(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        // 2. Take a word and, for operator stems, its hyphen suffix
        match word(input) {
            Ok((rest, text)) => {
                let (rest, len) = match hyphen_suffix(rest) {
                    Ok((after, _)) if stems.contains(text) => (after, text.len() + 1),
                    _ => (rest, text.len()),
                };
                result.push(&input[..len]);
                input = rest;
            }
            Err(_) => {
                // Skip one char to recover (input that bypassed normalize)
                if let Some(c) = input.chars().next() {
                    input = &input[c.len_utf8()..];
                } else {
                    break;
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stems() -> OperatorStems {
        ["nyx"].into_iter().collect()
    }

    fn split(raw: &str) -> Vec<String> {
        split_tokens(&normalize(raw), &stems())
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Ka-SHO 42 nyx+!"), "ka-sho  nyx+!");
        assert_eq!(normalize("xyz123"), "xyz");
        assert_eq!(normalize("ñandú"), "and");
    }

    #[test]
    fn test_hyphen_and_space_separators() {
        assert_eq!(split("ka-sho ver--lim"), vec!["ka", "sho", "ver", "lim"]);
        assert_eq!(split("  - -- "), Vec::<String>::new());
        assert_eq!(split(""), Vec::<String>::new());
    }

    #[test]
    fn test_operator_suffixes() {
        assert_eq!(split("ka-sho-nyx-ver-lim"), vec!["ka", "sho", "nyx", "ver", "lim"]);
        assert_eq!(split("ka sho nyx- ver lim"), vec!["ka", "sho", "nyx-", "ver", "lim"]);
        assert_eq!(split("nyx--ver"), vec!["nyx-", "ver"]);
        assert_eq!(split("ver-nyx-"), vec!["ver", "nyx-"]);
        assert_eq!(split("nyx+-nyx!-nyx?"), vec!["nyx+", "nyx!", "nyx?"]);
        // Only stems take a hyphen suffix
        assert_eq!(split("ver- lim"), vec!["ver", "lim"]);
    }

    #[test]
    fn test_recovers_from_unnormalized_input() {
        assert_eq!(split_tokens("ka.sho", &stems()), vec!["ka", "sho"]);
    }
}
