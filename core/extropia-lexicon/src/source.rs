//! The nested JSON source format: `group -> token -> fields`.
//!
//! Group and token order are kept as written; that order is the dictionary's
//! iteration order.

use extropia_protocol::{Category, Dictionary, Morpheme};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::LexiconError;

/// Version stamped on dictionaries read from JSON.
pub const SOURCE_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct SourceEntry {
    english: String,
    function: String,
    #[serde(default)]
    category: Option<String>,
    difficulty: u8,
    #[serde(default)]
    pronunciation: String,
    #[serde(default)]
    examples: Vec<String>,
    #[serde(default)]
    execution_mapping: Option<String>,
    #[serde(default)]
    unlocked_by: Option<String>,
    #[serde(default)]
    xp_modifier: Option<f64>,
    #[serde(default)]
    xp_impact: Option<String>,
}

/// Parses the JSON source into an ordered [`Dictionary`].
pub fn parse(json: &str) -> Result<Dictionary, LexiconError> {
    let root: Value = serde_json::from_str(json)?;
    let Value::Object(groups) = root else {
        return Err(LexiconError::NotAnObject);
    };

    let mut morphemes = Vec::new();
    for (group, entries) in groups {
        let Value::Object(entries) = entries else {
            return Err(LexiconError::Group(group));
        };
        read_group(&group, entries, &mut morphemes)?;
    }

    Ok(Dictionary {
        version: SOURCE_VERSION,
        morphemes,
    })
}

fn read_group(
    group: &str,
    entries: Map<String, Value>,
    out: &mut Vec<Morpheme>,
) -> Result<(), LexiconError> {
    for (token, fields) in entries {
        if token.is_empty() {
            return Err(LexiconError::EmptyToken(group.to_string()));
        }

        let entry: SourceEntry = serde_json::from_value(fields).map_err(|source| {
            LexiconError::Entry {
                token: token.clone(),
                source,
            }
        })?;

        if !(1..=5).contains(&entry.difficulty) {
            return Err(LexiconError::Difficulty {
                token,
                difficulty: entry.difficulty,
            });
        }

        // The entry's own category wins over the group it was filed under.
        let category = match entry.category.as_deref() {
            Some(label) => Category::from_label(label),
            None => Category::from_label(group),
        };

        out.push(Morpheme {
            token,
            group: group.to_string(),
            english: entry.english,
            function: entry.function,
            category,
            difficulty: entry.difficulty,
            pronunciation: entry.pronunciation,
            examples: entry.examples,
            execution_mapping: entry.execution_mapping,
            // An empty prerequisite means "always available".
            unlocked_by: entry.unlocked_by.filter(|prereq| !prereq.is_empty()),
            xp_modifier: entry.xp_modifier,
            xp_impact: entry.xp_impact,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let json = r#"{
            "zeta": { "zz": { "english": "z", "function": "f", "category": "agent", "difficulty": 2, "unlocked_by": null } },
            "alpha": {
                "bb": { "english": "b", "function": "f", "difficulty": 1, "unlocked_by": "" },
                "aa": { "english": "a", "function": "f", "difficulty": 1, "unlocked_by": "bb" }
            }
        }"#;

        let dict = parse(json).unwrap();
        let tokens: Vec<&str> = dict.morphemes.iter().map(|m| m.token.as_str()).collect();
        assert_eq!(tokens, vec!["zz", "bb", "aa"]);

        // Category falls back to the group label
        assert_eq!(dict.morphemes[1].category, Category::Other("alpha".to_string()));
        assert_eq!(dict.morphemes[0].category, Category::Agent);

        // Empty prerequisite means root
        assert!(dict.morphemes[1].is_root());
        assert_eq!(dict.morphemes[2].unlocked_by.as_deref(), Some("bb"));
    }

    #[test]
    fn test_rejects_out_of_range_difficulty() {
        let json = r#"{ "g": { "hard": { "english": "h", "function": "f", "difficulty": 9 } } }"#;
        let err = parse(json).unwrap_err();
        assert!(matches!(err, LexiconError::Difficulty { difficulty: 9, .. }));
    }

    #[test]
    fn test_rejects_malformed_entries() {
        assert!(matches!(parse("[]"), Err(LexiconError::NotAnObject)));
        assert!(matches!(parse(r#"{ "g": 3 }"#), Err(LexiconError::Group(_))));
        assert!(matches!(
            parse(r#"{ "g": { "x": { "function": "f", "difficulty": 1 } } }"#),
            Err(LexiconError::Entry { .. })
        ));
        assert!(matches!(parse("{ not json"), Err(LexiconError::Json(_))));
    }
}
