//! Expression engine for Extropian loops.
//!
//! raw text -> [`parser`] -> [`TokenSequence`] -> [`syntax`] ->
//! [`StructureRecord`] -> [`rules`] -> [`ValidationVerdict`] (with its reward
//! and the structure-derived [`StructureXp`] breakdown).

pub mod hints;
pub mod parser;
pub mod rules;
pub mod syntax;
pub mod token;
pub mod xp;

use extropia_lexicon::Lexicon;
use extropia_protocol::{RewardResult, StructureRecord, StructureXp};

pub use rules::{Findings, GrammarError, GrammarWarning};
pub use syntax::{role_of, LoopRole};
pub use token::TokenSequence;

/// Outcome of validating one expression. Valid iff there are no errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationVerdict {
    pub valid: bool,
    pub tokens: TokenSequence,
    pub errors: Vec<GrammarError>,
    pub warnings: Vec<GrammarWarning>,
    pub structure: StructureRecord,
    /// Computed for invalid loops too.
    pub reward: RewardResult,
    pub structure_xp: StructureXp,
}

impl ValidationVerdict {
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Condensed verdict for exercise screens.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopSummary {
    pub valid: bool,
    pub explanation: String,
    pub complexity: u32,
    pub xp_reward: u64,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub struct ExpressionEngine<'a> {
    lexicon: &'a Lexicon,
}

impl ExpressionEngine<'static> {
    /// Engine over the process-wide lexicon.
    pub fn global() -> Self {
        Self::new(extropia_lexicon::global())
    }
}

impl<'a> ExpressionEngine<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Primary entry point: Text -> Tokens
    pub fn parse(&self, raw: &str) -> TokenSequence {
        let normalized = parser::normalize(raw);
        let tokens = parser::split_tokens(&normalized, self.lexicon.operator_stems())
            .into_iter()
            .map(str::to_string)
            .collect();
        TokenSequence::new(tokens)
    }

    pub fn analyze(&self, tokens: &TokenSequence) -> StructureRecord {
        syntax::analyze(self.lexicon, tokens)
    }

    /// Parses, analyzes, checks and scores `raw`. Never fails.
    pub fn validate(&self, raw: &str) -> ValidationVerdict {
        let tokens = self.parse(raw);
        let structure = self.analyze(&tokens);
        let Findings { errors, warnings } = rules::check_loop(self.lexicon, &tokens, &structure);
        let valid = errors.is_empty();

        let structure_xp = self.structure_xp(&structure, &tokens);
        let reward = extropia_scorer::from_loop_construction(
            structure.complexity(),
            valid,
            &structure.entropy_operators,
            &structure.uncertainty_markers,
        );

        tracing::debug!(
            tokens = %tokens,
            valid,
            errors = errors.len(),
            warnings = warnings.len(),
            xp = reward.final_xp,
            structure_xp = structure_xp.final_xp,
            "Validated expression"
        );

        ValidationVerdict {
            valid,
            tokens,
            errors,
            warnings,
            structure,
            reward,
            structure_xp,
        }
    }

    /// XP breakdown driven by token difficulty, operators, roles, closure and
    /// uncertainty markers.
    pub fn structure_xp(&self, structure: &StructureRecord, tokens: &TokenSequence) -> StructureXp {
        xp::structure_xp(self.lexicon, structure, tokens)
    }

    pub fn validate_loop(&self, raw: &str) -> LoopSummary {
        let verdict = self.validate(raw);
        let errors = verdict.error_messages();
        let explanation = if errors.is_empty() {
            "Valid loop structure".to_string()
        } else {
            errors.join(" ")
        };

        LoopSummary {
            valid: verdict.valid,
            explanation,
            complexity: verdict.structure.complexity(),
            xp_reward: verdict.reward.final_xp,
            warnings: verdict.warning_messages(),
            errors,
        }
    }

    /// Improvement suggestions for `raw`.
    pub fn hints(&self, raw: &str) -> Vec<&'static str> {
        let tokens = self.parse(raw);
        let structure = self.analyze(&tokens);
        hints::hints(&structure, tokens.len())
    }

    /// Loop reward assuming the loop is valid, at a caller-chosen complexity.
    pub fn score_loop_text(&self, raw: &str, complexity: u32) -> RewardResult {
        let structure = self.analyze(&self.parse(raw));
        extropia_scorer::from_loop_construction(
            complexity,
            true,
            &structure.entropy_operators,
            &structure.uncertainty_markers,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn builtin() -> Lexicon {
        Lexicon::builtin().unwrap()
    }

    #[test]
    fn test_well_formed_loop() {
        let lex = builtin();
        let engine = ExpressionEngine::new(&lex);
        let verdict = engine.validate("ka-sho-nyx-ver-lim");

        assert!(verdict.valid);
        assert!(verdict.errors.is_empty());
        assert_eq!(verdict.structure.closure.as_deref(), Some("lim"));
        assert_eq!(verdict.structure.entropy_operators, vec!["nyx".to_string()]);
        // No actions, so only the advisory remains
        assert_eq!(verdict.warnings, vec![GrammarWarning::NoActions]);
        assert!(verdict.reward.physics_valid);
        // complexity 2 (validation + closure): 20 * 2 * 0.4
        assert_eq!(verdict.reward.final_xp, 16);
        // (1 + 1 + 2 + 1 + 1) * 5 * 1.5 (agent, validation) * 1.2 (lim)
        assert_eq!(verdict.structure_xp.final_xp, 54);
    }

    #[test]
    fn test_missing_closure() {
        let lex = builtin();
        let verdict = ExpressionEngine::new(&lex).validate("ka-sho");

        assert!(!verdict.valid);
        assert_eq!(verdict.errors, vec![GrammarError::MissingClosure]);
        assert!(!verdict.reward.physics_valid);
    }

    #[test]
    fn test_digits_are_stripped() {
        let lex = builtin();
        let verdict = ExpressionEngine::new(&lex).validate("xyz123");

        assert_eq!(verdict.tokens.to_vec(), vec!["xyz".to_string()]);
        assert!(!verdict.valid);
        assert_eq!(
            verdict.error_messages(),
            vec![
                "Unknown morphemes: xyz".to_string(),
                "No closure specified - loops must end with lim or zur".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let lex = builtin();
        let verdict = ExpressionEngine::new(&lex).validate("");

        assert!(verdict.tokens.is_empty());
        assert!(!verdict.valid);
        assert_eq!(verdict.errors, vec![GrammarError::MissingClosure]);
        assert_eq!(verdict.reward.final_xp, 0);
    }

    #[test]
    fn test_operator_tokens() {
        let lex = builtin();
        let engine = ExpressionEngine::new(&lex);
        let tokens = engine.parse("Mu sho zen nyx- xa, nyx! ver-zur");
        assert_eq!(
            tokens.to_vec(),
            vec!["mu", "sho", "zen", "nyx-", "xa", "nyx!", "ver", "zur"]
        );

        let verdict = engine.validate("Mu sho zen nyx- xa, nyx! ver-zur");
        assert!(verdict.valid, "{:?}", verdict.errors);
        assert!(verdict.warnings.is_empty());
        assert_eq!(verdict.structure.entropy_operators, vec!["nyx-", "nyx!"]);
        assert_eq!(verdict.structure.uncertainty_markers, vec!["xa"]);
    }

    #[test]
    fn test_validate_loop_summary() {
        let lex = builtin();
        let engine = ExpressionEngine::new(&lex);

        let ok = engine.validate_loop("ka-sho-rep-log-ver-lim");
        assert!(ok.valid);
        assert_eq!(ok.explanation, "Valid loop structure");
        assert_eq!(ok.complexity, 4);
        assert_eq!(ok.xp_reward, 32);

        let bad = engine.validate_loop("qq ka");
        assert!(!bad.valid);
        assert_eq!(
            bad.explanation,
            "Unknown morphemes: qq No closure specified - loops must end with lim or zur"
        );
        assert_eq!(bad.warnings.len(), 1);
    }

    #[test]
    fn test_hints_and_text_scoring() {
        let lex = builtin();
        let engine = ExpressionEngine::new(&lex);

        assert_eq!(engine.hints("ka-sho-nyx- ver-zo-ek-lim").len(), 0);
        assert_eq!(engine.hints("sho-lim").len(), 3);

        let reward = engine.score_loop_text("ka sho nyx- zo lim", 3);
        // social 0.3 + 0.2: 20 * 3 * 0.4 * 1.5
        assert_eq!(reward.final_xp, 36);
    }

    fn dictionary_tokens() -> Vec<String> {
        builtin().all_tokens().into_iter().map(str::to_string).collect()
    }

    proptest! {
        #[test]
        fn test_parse_is_idempotent(raw in "[a-zA-Z0-9 +!?\\-]{0,40}") {
            let lex = builtin();
            let engine = ExpressionEngine::new(&lex);
            let once = engine.parse(&raw);
            let twice = engine.parse(&once.join("-"));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_dictionary_tokens_survive_joining(
            picks in prop::collection::vec(prop::sample::select(dictionary_tokens()), 0..8),
            separator in prop::sample::select(vec!["-", " ", " - "]),
        ) {
            let lex = builtin();
            let engine = ExpressionEngine::new(&lex);
            let parsed = engine.parse(&picks.join(separator));
            // "nyx" followed by "-" + word stays separate; a hyphen suffix only
            // attaches before a separator
            let reparsed = engine.parse(&parsed.join("-"));
            prop_assert_eq!(&parsed, &reparsed);
            if separator != "-" {
                prop_assert_eq!(parsed.to_vec(), picks);
            }
        }

        #[test]
        fn test_validate_is_total(raw in "\\PC{0,60}") {
            let lex = builtin();
            let verdict = ExpressionEngine::new(&lex).validate(&raw);
            prop_assert_eq!(verdict.valid, verdict.errors.is_empty());
        }

        #[test]
        fn test_closure_is_required(
            picks in prop::collection::vec(prop::sample::select(dictionary_tokens()), 0..8),
        ) {
            let lex = builtin();
            let words: Vec<String> = picks.into_iter().filter(|t| t != "lim" && t != "zur").collect();
            let verdict = ExpressionEngine::new(&lex).validate(&words.join(" "));
            prop_assert!(!verdict.valid);
            prop_assert!(verdict.errors.contains(&GrammarError::MissingClosure));
        }
    }
}
