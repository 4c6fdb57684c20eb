//! The morpheme dictionary and unlock resolver.
//!
//! A [`Lexicon`] is built once from a [`Dictionary`] (JSON source or rkyv
//! archive) and never mutated. Lookups are total: misses come back as `None`.

pub mod archive;
pub mod error;
pub mod global;
pub mod source;
pub mod stems;
pub mod unlock;

use std::collections::HashMap;

use extropia_protocol::{Category, Dictionary, Morpheme, MorphemeId};

pub use error::LexiconError;
pub use global::{global, install};
pub use stems::{split_operator, OperatorStems, OPERATOR_MARKS};
pub use unlock::{LearnedSet, LexiconIssue};

use unlock::UnlockGraph;

const BUILTIN_JSON: &str = include_str!("../data/morphemes.json");

#[derive(Debug, Clone)]
pub struct Lexicon {
    version: u32,
    morphemes: Vec<Morpheme>,
    index: HashMap<String, MorphemeId>,
    stems: OperatorStems,
    unlocks: UnlockGraph,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::from_dictionary(Dictionary {
            version: 0,
            morphemes: Vec::new(),
        })
    }
}

impl Lexicon {
    /// Indexes a dictionary. A token listed twice keeps its first position and
    /// takes the later entry's fields.
    pub fn from_dictionary(dictionary: Dictionary) -> Self {
        let mut morphemes: Vec<Morpheme> = Vec::with_capacity(dictionary.morphemes.len());
        let mut index: HashMap<String, MorphemeId> = HashMap::with_capacity(dictionary.morphemes.len());

        for morpheme in dictionary.morphemes {
            if let Some(id) = index.get(&morpheme.token).copied() {
                tracing::warn!(token = %morpheme.token, group = %morpheme.group, "Duplicate morpheme, later entry wins");
                morphemes[id.index()] = morpheme;
                continue;
            }
            index.insert(morpheme.token.clone(), MorphemeId::new(morphemes.len() as u32));
            morphemes.push(morpheme);
        }

        let stems = OperatorStems::from_morphemes(&morphemes);
        let unlocks = UnlockGraph::build(&morphemes, |token| index.get(token).copied());

        tracing::debug!(
            version = dictionary.version,
            morphemes = morphemes.len(),
            operator_stems = stems.len(),
            "Indexed lexicon"
        );

        Self {
            version: dictionary.version,
            morphemes,
            index,
            stems,
            unlocks,
        }
    }

    /// Parses the nested JSON source format.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        source::parse(json).map(Self::from_dictionary)
    }

    /// The dictionary embedded in this crate.
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::from_json(BUILTIN_JSON)
    }

    pub fn to_dictionary(&self) -> Dictionary {
        Dictionary {
            version: self.version,
            morphemes: self.morphemes.clone(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.morphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.morphemes.is_empty()
    }

    pub fn lookup(&self, token: &str) -> Option<&Morpheme> {
        self.id_of(token).and_then(|id| self.get(id))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    pub fn id_of(&self, token: &str) -> Option<MorphemeId> {
        self.index.get(token).copied()
    }

    pub fn get(&self, id: MorphemeId) -> Option<&Morpheme> {
        self.morphemes.get(id.index())
    }

    /// All morphemes in dictionary order.
    pub fn morphemes(&self) -> &[Morpheme] {
        &self.morphemes
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.morphemes.iter().map(|m| m.token.as_str())
    }

    pub fn all_tokens(&self) -> Vec<&str> {
        self.tokens().collect()
    }

    pub fn morphemes_in(&self, category: &Category) -> Vec<&Morpheme> {
        self.morphemes.iter().filter(|m| &m.category == category).collect()
    }

    /// Morphemes filed under one source group, e.g. `"cognitive"`.
    pub fn group(&self, name: &str) -> Vec<&Morpheme> {
        self.morphemes.iter().filter(|m| m.group == name).collect()
    }

    pub fn difficulty_of(&self, token: &str) -> Option<u8> {
        self.lookup(token).map(|m| m.difficulty)
    }

    pub fn agent_tokens(&self) -> Vec<&str> {
        self.morphemes_in(&Category::Agent)
            .into_iter()
            .map(|m| m.token.as_str())
            .collect()
    }

    pub fn operator_stems(&self) -> &OperatorStems {
        &self.stems
    }

    pub(crate) fn unlock_graph(&self) -> &UnlockGraph {
        &self.unlocks
    }
}
