//! The inbound call surface over the process-wide lexicon.
//!
//! Every function here is stateless and total; the lexicon is loaded on first
//! use (or installed by the host beforehand) and never changes afterwards.

use extropia_lexicon::{global, LearnedSet};
use extropia_parser::{ExpressionEngine, LoopSummary, ValidationVerdict};
use extropia_protocol::{Morpheme, RewardEvent, RewardResult};

pub use extropia_scorer::{
    from_exercise_completed, from_loop_construction, from_morpheme_learned, from_teaching,
    ExerciseKind,
};

/// Difficulty assumed for pronunciation targets missing from the lexicon.
const DEFAULT_PRONUNCIATION_DIFFICULTY: u8 = 2;

pub fn get_morpheme(token: &str) -> Option<&'static Morpheme> {
    global().lookup(token)
}

pub fn get_all_morpheme_names() -> Vec<&'static str> {
    global().all_tokens()
}

pub fn is_morpheme_unlocked(token: &str, learned: &[String]) -> bool {
    let learned: LearnedSet = learned.iter().collect();
    global().is_unlocked(token, &learned)
}

pub fn get_available_morphemes(learned: &[String]) -> Vec<&'static str> {
    let learned: LearnedSet = learned.iter().collect();
    global().available_tokens(&learned)
}

pub fn parse_expression(raw: &str) -> Vec<String> {
    ExpressionEngine::global().parse(raw).into_vec()
}

pub fn validate_expression(raw: &str) -> ValidationVerdict {
    ExpressionEngine::global().validate(raw)
}

pub fn validate_loop(raw: &str) -> LoopSummary {
    ExpressionEngine::global().validate_loop(raw)
}

pub fn generate_hints(raw: &str) -> Vec<&'static str> {
    ExpressionEngine::global().hints(raw)
}

pub fn calculate_learning_xp(event: &RewardEvent) -> RewardResult {
    extropia_scorer::score(event)
}

pub fn validate_physics_compliance(result: &RewardResult) -> bool {
    extropia_scorer::is_physics_compliant(result)
}

/// Pronunciation reward with the token's difficulty taken from the lexicon.
pub fn from_pronunciation(token: &str, accuracy: f64, attempts: u32) -> RewardResult {
    let difficulty = global().difficulty_of(token).unwrap_or_else(|| {
        tracing::debug!(token, "Pronouncing unknown morpheme, assuming default difficulty");
        DEFAULT_PRONUNCIATION_DIFFICULTY
    });
    extropia_scorer::from_pronunciation(token, difficulty, accuracy, attempts)
}

/// Loop reward computed straight from text, assuming a valid loop.
pub fn loop_text_reward(raw: &str, complexity: u32) -> RewardResult {
    ExpressionEngine::global().score_loop_text(raw, complexity)
}
