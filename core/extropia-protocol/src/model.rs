use rkyv::{Archive, Deserialize, Serialize};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Grammatical category of a morpheme.
///
/// Labels not in the closed set are kept verbatim in [`Category::Other`];
/// the structural analyzer routes them to the action bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
pub enum Category {
    Agent,
    LoopControl,
    Validation,
    Entropy,
    Uncertainty,
    EntropyOperator,
    Other(String),
}

impl Category {
    /// Maps a dictionary label (`"loop_control"`, `"agent"`, ...) to a category.
    pub fn from_label(label: &str) -> Self {
        match label {
            "agent" => Category::Agent,
            "loop_control" => Category::LoopControl,
            "validation" => Category::Validation,
            "entropy" => Category::Entropy,
            "uncertainty" => Category::Uncertainty,
            "entropy_operator" => Category::EntropyOperator,
            other => Category::Other(String::from(other)),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::Agent => "agent",
            Category::LoopControl => "loop_control",
            Category::Validation => "validation",
            Category::Entropy => "entropy",
            Category::Uncertainty => "uncertainty",
            Category::EntropyOperator => "entropy_operator",
            Category::Other(label) => label.as_str(),
        }
    }
}

/// A dictionary entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Morpheme {
    pub token: String,
    /// Source group the entry was declared under (e.g. `"agents"`).
    pub group: String,
    /// English gloss.
    pub english: String,
    pub function: String,
    pub category: Category,
    /// 1 (introductory) to 5 (advanced).
    pub difficulty: u8,
    pub pronunciation: String,
    pub examples: Vec<String>,
    pub execution_mapping: Option<String>,
    /// Prerequisite token, resolved by key on demand. `None` means always available.
    pub unlocked_by: Option<String>,
    /// Multiplicative adjustment carried by uncertainty markers.
    pub xp_modifier: Option<f64>,
    pub xp_impact: Option<String>,
}

impl Morpheme {
    pub fn is_root(&self) -> bool {
        self.unlocked_by.is_none()
    }
}

/// The compiled dictionary: morphemes in iteration order.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Dictionary {
    pub version: u32,
    pub morphemes: Vec<Morpheme>,
}
