//! Prerequisite resolution over the static dictionary.

use std::collections::HashSet;

use extropia_protocol::{Morpheme, MorphemeId};
use petgraph::algo::tarjan_scc;
use petgraph::graph::{Graph, NodeIndex};
use petgraph::{Directed, Direction};
use thiserror::Error;

use crate::Lexicon;

/// Tokens a learner already knows. Borrowed from the caller's progress state.
#[derive(Debug, Clone, Default)]
pub struct LearnedSet<'a> {
    tokens: HashSet<&'a str>,
}

impl<'a> LearnedSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: &'a str) {
        self.tokens.insert(token);
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for LearnedSet<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a String> for LearnedSet<'a> {
    fn from_iter<I: IntoIterator<Item = &'a String>>(iter: I) -> Self {
        iter.into_iter().map(String::as_str).collect()
    }
}

/// Problems found in a dictionary's prerequisite edges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconIssue {
    #[error("'{token}' is unlocked by unknown morpheme '{prerequisite}' and can never be learned")]
    UnknownPrerequisite { token: String, prerequisite: String },

    #[error("prerequisite cycle: {}", .0.join(" -> "))]
    Cycle(Vec<String>),
}

/// Prerequisite edges, `prerequisite -> dependent`.
///
/// Node `i` is the morpheme with `MorphemeId(i)`. Built once per lexicon and
/// only used for the graph queries; unlock checks resolve `unlocked_by` by key.
#[derive(Debug, Clone, Default)]
pub(crate) struct UnlockGraph {
    graph: Graph<MorphemeId, (), Directed>,
    dangling: Vec<(MorphemeId, String)>,
}

impl UnlockGraph {
    pub(crate) fn build(morphemes: &[Morpheme], id_of: impl Fn(&str) -> Option<MorphemeId>) -> Self {
        let mut graph = Graph::with_capacity(morphemes.len(), morphemes.len());
        for index in 0..morphemes.len() {
            graph.add_node(MorphemeId::new(index as u32));
        }

        let mut dangling = Vec::new();
        for (index, morpheme) in morphemes.iter().enumerate() {
            let Some(prerequisite) = morpheme.unlocked_by.as_deref() else {
                continue;
            };
            match id_of(prerequisite) {
                Some(from) => {
                    graph.add_edge(NodeIndex::new(from.index()), NodeIndex::new(index), ());
                }
                None => dangling.push((MorphemeId::new(index as u32), prerequisite.to_string())),
            }
        }

        Self { graph, dangling }
    }

    fn dependents(&self, id: MorphemeId) -> Vec<MorphemeId> {
        let mut ids: Vec<MorphemeId> = self
            .graph
            .neighbors_directed(NodeIndex::new(id.index()), Direction::Outgoing)
            .map(|node| self.graph[node])
            .collect();
        ids.sort();
        ids
    }

    fn prerequisite(&self, id: MorphemeId) -> Option<MorphemeId> {
        self.graph
            .neighbors_directed(NodeIndex::new(id.index()), Direction::Incoming)
            .next()
            .map(|node| self.graph[node])
    }

    fn cycles(&self) -> Vec<Vec<MorphemeId>> {
        tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1 || self.graph.contains_edge(component[0], component[0])
            })
            .map(|component| {
                let mut ids: Vec<MorphemeId> = component.iter().map(|node| self.graph[*node]).collect();
                ids.sort();
                ids
            })
            .collect()
    }
}

impl Lexicon {
    /// True when `token` has no prerequisite or its prerequisite was learned.
    /// Unknown tokens are never unlocked.
    pub fn is_unlocked(&self, token: &str, learned: &LearnedSet<'_>) -> bool {
        match self.lookup(token) {
            None => false,
            Some(morpheme) => match morpheme.unlocked_by.as_deref() {
                None => true,
                Some(prerequisite) => learned.contains(prerequisite),
            },
        }
    }

    /// Unlocked tokens not yet learned, easiest first.
    ///
    /// Equal difficulties keep dictionary order.
    pub fn available_tokens(&self, learned: &LearnedSet<'_>) -> Vec<&str> {
        let mut available: Vec<&Morpheme> = self
            .morphemes()
            .iter()
            .filter(|m| !learned.contains(&m.token) && self.is_unlocked(&m.token, learned))
            .collect();
        available.sort_by_key(|m| m.difficulty);
        available.into_iter().map(|m| m.token.as_str()).collect()
    }

    /// Tokens whose prerequisite is `token`, in dictionary order.
    pub fn unlocks(&self, token: &str) -> Vec<&str> {
        match self.id_of(token) {
            Some(id) => self
                .unlock_graph()
                .dependents(id)
                .into_iter()
                .filter_map(|dep| self.get(dep))
                .map(|m| m.token.as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Prerequisites of `token`, nearest first, ending at an always-available
    /// morpheme (or where the chain leaves the dictionary).
    pub fn prerequisite_chain(&self, token: &str) -> Vec<&str> {
        let mut chain = Vec::new();
        let Some(mut current) = self.id_of(token) else {
            return chain;
        };

        let mut seen = HashSet::from([current]);
        while let Some(prerequisite) = self.unlock_graph().prerequisite(current) {
            if !seen.insert(prerequisite) {
                break;
            }
            if let Some(m) = self.get(prerequisite) {
                chain.push(m.token.as_str());
            }
            current = prerequisite;
        }
        chain
    }

    /// Dangling prerequisites and prerequisite cycles.
    pub fn audit(&self) -> Vec<LexiconIssue> {
        let graph = self.unlock_graph();
        let token = |id: MorphemeId| {
            self.get(id)
                .map(|m| m.token.clone())
                .unwrap_or_default()
        };

        let mut issues: Vec<LexiconIssue> = graph
            .dangling
            .iter()
            .map(|(id, prerequisite)| LexiconIssue::UnknownPrerequisite {
                token: token(*id),
                prerequisite: prerequisite.clone(),
            })
            .collect();

        issues.extend(
            graph
                .cycles()
                .into_iter()
                .map(|ids| LexiconIssue::Cycle(ids.into_iter().map(&token).collect())),
        );
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extropia_protocol::{Category, Dictionary};

    fn entry(token: &str, difficulty: u8, unlocked_by: Option<&str>) -> Morpheme {
        Morpheme {
            token: token.to_string(),
            group: "test".to_string(),
            english: token.to_uppercase(),
            function: String::new(),
            category: Category::Agent,
            difficulty,
            pronunciation: String::new(),
            examples: Vec::new(),
            execution_mapping: None,
            unlocked_by: unlocked_by.map(str::to_string),
            xp_modifier: None,
            xp_impact: None,
        }
    }

    fn lexicon(entries: Vec<Morpheme>) -> Lexicon {
        Lexicon::from_dictionary(Dictionary {
            version: 1,
            morphemes: entries,
        })
    }

    #[test]
    fn test_is_unlocked() {
        let lex = lexicon(vec![entry("a", 1, None), entry("b", 2, Some("a"))]);
        let nothing = LearnedSet::new();
        let learned_a: LearnedSet = ["a"].into_iter().collect();

        assert!(lex.is_unlocked("a", &nothing));
        assert!(!lex.is_unlocked("b", &nothing));
        assert!(lex.is_unlocked("b", &learned_a));
        assert!(!lex.is_unlocked("missing", &learned_a));
    }

    #[test]
    fn test_available_sorted_with_stable_ties() {
        let lex = lexicon(vec![
            entry("c", 2, None),
            entry("a", 1, None),
            entry("d", 1, Some("c")),
            entry("b", 1, None),
        ]);

        let available = lex.available_tokens(&LearnedSet::new());
        assert_eq!(available, vec!["a", "b", "c"]);

        let learned: LearnedSet = ["c"].into_iter().collect();
        assert_eq!(lex.available_tokens(&learned), vec!["a", "d", "b"]);
    }

    #[test]
    fn test_graph_queries() {
        let lex = lexicon(vec![
            entry("root", 1, None),
            entry("mid", 2, Some("root")),
            entry("leaf", 3, Some("mid")),
            entry("side", 2, Some("root")),
        ]);

        assert_eq!(lex.unlocks("root"), vec!["mid", "side"]);
        assert_eq!(lex.prerequisite_chain("leaf"), vec!["mid", "root"]);
        assert!(lex.prerequisite_chain("root").is_empty());
        assert!(lex.unlocks("nope").is_empty());
        assert!(lex.audit().is_empty());
    }

    #[test]
    fn test_audit_reports_dangling_and_cycles() {
        let lex = lexicon(vec![
            entry("x", 1, Some("y")),
            entry("y", 1, Some("x")),
            entry("lonely", 1, Some("ghost")),
        ]);

        let issues = lex.audit();
        assert!(issues.contains(&LexiconIssue::UnknownPrerequisite {
            token: "lonely".to_string(),
            prerequisite: "ghost".to_string(),
        }));
        assert!(issues.contains(&LexiconIssue::Cycle(vec!["x".to_string(), "y".to_string()])));

        // Cycles terminate instead of looping forever
        assert_eq!(lex.prerequisite_chain("x"), vec!["y"]);
        assert!(lex.available_tokens(&LearnedSet::new()).is_empty());
    }
}
