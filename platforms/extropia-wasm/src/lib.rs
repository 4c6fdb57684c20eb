//! Browser bindings for the Extropian engine.
//!
//! The host may install a compiled dictionary archive once via
//! [`install_lexicon`]; otherwise the built-in dictionary is used.

pub mod engine;
pub mod exercise;

use extropia_lexicon::{LearnedSet, Lexicon};
use extropia_parser::{LoopSummary, ValidationVerdict};
use extropia_protocol::{RewardEvent, StructureRecord, StructureXp};
use extropia_scorer::ExerciseKind;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The validation verdict as sent back to JavaScript
#[derive(Serialize)]
pub struct VerdictReport {
    pub valid: bool,
    pub tokens: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub structure: StructureRecord,
    pub xp_calculation: extropia_protocol::RewardResult,
    pub structure_xp: StructureXp,
}

impl From<ValidationVerdict> for VerdictReport {
    fn from(verdict: ValidationVerdict) -> Self {
        Self {
            valid: verdict.valid,
            errors: verdict.error_messages(),
            warnings: verdict.warning_messages(),
            tokens: verdict.tokens.into_vec(),
            structure: verdict.structure,
            xp_calculation: verdict.reward,
            structure_xp: verdict.structure_xp,
        }
    }
}

#[derive(Serialize)]
pub struct LoopReport {
    pub valid: bool,
    pub explanation: String,
    pub complexity: u32,
    pub xp_reward: u64,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl From<LoopSummary> for LoopReport {
    fn from(summary: LoopSummary) -> Self {
        Self {
            valid: summary.valid,
            explanation: summary.explanation,
            complexity: summary.complexity,
            xp_reward: summary.xp_reward,
            errors: summary.errors,
            warnings: summary.warnings,
        }
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(Into::into)
}

/// Replaces the built-in dictionary with a compiled archive.
///
/// Must run before any other call; fails once the lexicon is in use.
#[wasm_bindgen(js_name = installLexicon)]
pub fn install_lexicon(archive: &[u8]) -> Result<usize, JsValue> {
    let lexicon = Lexicon::from_archive(archive).map_err(|e| JsValue::from_str(&e.to_string()))?;
    extropia_lexicon::install(lexicon)
        .map(Lexicon::len)
        .map_err(|_| JsValue::from_str("lexicon already initialised"))
}

#[wasm_bindgen(js_name = getMorpheme)]
pub fn get_morpheme(token: &str) -> Result<JsValue, JsValue> {
    to_js(&engine::get_morpheme(token))
}

#[wasm_bindgen(js_name = getAllMorphemeNames)]
pub fn get_all_morpheme_names() -> Result<JsValue, JsValue> {
    to_js(&engine::get_all_morpheme_names())
}

#[wasm_bindgen(js_name = getAvailableMorphemes)]
pub fn get_available_morphemes(learned: Vec<String>) -> Result<JsValue, JsValue> {
    to_js(&engine::get_available_morphemes(&learned))
}

#[wasm_bindgen(js_name = isMorphemeUnlocked)]
pub fn is_morpheme_unlocked(token: &str, learned: Vec<String>) -> bool {
    engine::is_morpheme_unlocked(token, &learned)
}

#[wasm_bindgen(js_name = parseExpression)]
pub fn parse_expression(raw: &str) -> Result<JsValue, JsValue> {
    to_js(&engine::parse_expression(raw))
}

#[wasm_bindgen(js_name = validateExpression)]
pub fn validate_expression(raw: &str) -> Result<JsValue, JsValue> {
    to_js(&VerdictReport::from(engine::validate_expression(raw)))
}

#[wasm_bindgen(js_name = validateLoop)]
pub fn validate_loop(raw: &str) -> Result<JsValue, JsValue> {
    to_js(&LoopReport::from(engine::validate_loop(raw)))
}

#[wasm_bindgen(js_name = generateHints)]
pub fn generate_hints(raw: &str) -> Result<JsValue, JsValue> {
    to_js(&engine::generate_hints(raw))
}

/// Scores a raw reward event given as a JS object.
#[wasm_bindgen(js_name = calculateLearningXp)]
pub fn calculate_learning_xp(event: JsValue) -> Result<JsValue, JsValue> {
    let event: RewardEvent = serde_wasm_bindgen::from_value(event)?;
    to_js(&engine::calculate_learning_xp(&event))
}

#[wasm_bindgen(js_name = validatePhysicsCompliance)]
pub fn validate_physics_compliance(result: JsValue) -> Result<bool, JsValue> {
    let result = serde_wasm_bindgen::from_value(result)?;
    Ok(engine::validate_physics_compliance(&result))
}

#[wasm_bindgen(js_name = morphemeLearnedReward)]
pub fn morpheme_learned_reward(
    token: &str,
    difficulty: u8,
    accuracy: f64,
    time_taken_secs: f64,
) -> Result<JsValue, JsValue> {
    to_js(&engine::from_morpheme_learned(token, difficulty, accuracy, time_taken_secs))
}

#[wasm_bindgen(js_name = exerciseReward)]
pub fn exercise_reward(
    kind: &str,
    difficulty: u8,
    accuracy: f64,
    time_taken_secs: f64,
    streak_bonus: f64,
) -> Result<JsValue, JsValue> {
    to_js(&engine::from_exercise_completed(
        ExerciseKind::from_label(kind),
        difficulty,
        accuracy,
        time_taken_secs,
        streak_bonus,
    ))
}

#[wasm_bindgen(js_name = loopReward)]
pub fn loop_reward(
    complexity: u32,
    valid: bool,
    entropy_operators: Vec<String>,
    uncertainty_markers: Vec<String>,
) -> Result<JsValue, JsValue> {
    to_js(&engine::from_loop_construction(
        complexity,
        valid,
        &entropy_operators,
        &uncertainty_markers,
    ))
}

#[wasm_bindgen(js_name = loopTextReward)]
pub fn loop_text_reward(raw: &str, complexity: u32) -> Result<JsValue, JsValue> {
    to_js(&engine::loop_text_reward(raw, complexity))
}

#[wasm_bindgen(js_name = pronunciationReward)]
pub fn pronunciation_reward(token: &str, accuracy: f64, attempts: u32) -> Result<JsValue, JsValue> {
    to_js(&engine::from_pronunciation(token, accuracy, attempts))
}

#[wasm_bindgen(js_name = teachingReward)]
pub fn teaching_reward(concepts_taught: u32, learner_success_rate: f64) -> Result<JsValue, JsValue> {
    to_js(&engine::from_teaching(concepts_taught, learner_success_rate))
}

#[wasm_bindgen(js_name = streakBonus)]
pub fn streak_bonus(consecutive_days: u32, perfect_exercises: u32) -> f64 {
    extropia_scorer::streak_bonus(consecutive_days, perfect_exercises)
}

/// Builds a multiple-choice exercise; `null` when nothing is left to learn.
///
/// The seed comes from the host so the module needs no entropy source.
#[wasm_bindgen(js_name = generateExercise)]
pub fn generate_exercise(learned: Vec<String>, seed: u64) -> Result<JsValue, JsValue> {
    let learned: LearnedSet = learned.iter().collect();
    let mut rng = StdRng::seed_from_u64(seed);
    to_js(&exercise::generate_exercise(extropia_lexicon::global(), &learned, &mut rng))
}
