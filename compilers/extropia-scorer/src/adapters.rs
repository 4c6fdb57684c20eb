//! Typed reward constructors. Each one fills in the domain constants for an
//! activity and delegates to [`score`].

use extropia_protocol::{EventType, RewardEvent, RewardResult};

use crate::formula::{score, EFFICIENCY_CAP};

/// Learning domain of an activity, which fixes its causal closure speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearningDomain {
    /// Vocabulary acquisition.
    Cognitive,
    /// Practised skills.
    Psychomotor,
    /// Building loop constructs.
    Linguistic,
    AudioLinguistic,
    /// Knowledge passed on to other learners.
    Social,
}

impl LearningDomain {
    /// The reward is divided by the square root of this speed.
    ///
    /// Speeds fall from cognitive to social; the damping divisors are 1.5,
    /// 1.4, 1, 0.8 and 0.75.
    pub const fn causal_closure_speed(self) -> f64 {
        match self {
            LearningDomain::Cognitive => 2.25,
            LearningDomain::Psychomotor => 1.96,
            LearningDomain::Linguistic => 1.0,
            LearningDomain::AudioLinguistic => 0.64,
            LearningDomain::Social => 0.5625,
        }
    }
}

/// Exercise families and their baseline entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseKind {
    Pronunciation,
    MorphemeMatching,
    LoopConstruction,
    EntropyUnderstanding,
    UncertaintyPractice,
    ComplexConstruction,
    StoryMode,
    RecursiveChallenge,
    Other,
}

impl ExerciseKind {
    pub fn from_label(label: &str) -> Self {
        match label {
            "pronunciation" => ExerciseKind::Pronunciation,
            "morpheme_matching" => ExerciseKind::MorphemeMatching,
            "loop_construction" => ExerciseKind::LoopConstruction,
            "entropy_understanding" => ExerciseKind::EntropyUnderstanding,
            "uncertainty_practice" => ExerciseKind::UncertaintyPractice,
            "complex_construction" => ExerciseKind::ComplexConstruction,
            "story_mode" => ExerciseKind::StoryMode,
            "recursive_challenge" => ExerciseKind::RecursiveChallenge,
            _ => ExerciseKind::Other,
        }
    }

    pub const fn base_entropy(self) -> f64 {
        match self {
            ExerciseKind::Pronunciation => 8.0,
            ExerciseKind::MorphemeMatching => 12.0,
            ExerciseKind::LoopConstruction => 20.0,
            ExerciseKind::EntropyUnderstanding => 18.0,
            ExerciseKind::UncertaintyPractice => 15.0,
            ExerciseKind::ComplexConstruction => 25.0,
            ExerciseKind::StoryMode => 22.0,
            ExerciseKind::RecursiveChallenge => 30.0,
            ExerciseKind::Other => 10.0,
        }
    }
}

const MORPHEME_BASE_ENTROPY: f64 = 15.0;
const MORPHEME_SECONDS_PER_LEVEL: f64 = 30.0;
const EXERCISE_SECONDS_PER_LEVEL: f64 = 45.0;
const LOOP_BASE_ENTROPY: f64 = 20.0;
const PRONUNCIATION_BASE_ENTROPY: f64 = 8.0;
const PRONUNCIATION_PAR_ATTEMPTS: f64 = 3.0;
const TEACHING_BASE_ENTROPY: f64 = 25.0;
const TEACHING_SOCIAL_BONUS: f64 = 0.5;

/// Entropy change of a loop: valid loops reduce conceptual entropy.
const VALID_LOOP_DELTA: f64 = -0.4;
const INVALID_LOOP_DELTA: f64 = 0.1;

fn time_efficiency(expected: f64, taken: f64) -> f64 {
    (expected / taken).min(EFFICIENCY_CAP)
}

pub fn morpheme_learned_event(difficulty: u8, accuracy: f64, time_taken_secs: f64) -> RewardEvent {
    let difficulty = f64::from(difficulty);
    RewardEvent {
        event_type: EventType::MorphemeLearned,
        base_entropy: MORPHEME_BASE_ENTROPY,
        difficulty_multiplier: difficulty,
        quality_score: accuracy,
        time_efficiency: time_efficiency(difficulty * MORPHEME_SECONDS_PER_LEVEL, time_taken_secs),
        social_bonus: 0.0,
        entropy_delta: -accuracy * 0.5,
        causal_closure_speed: LearningDomain::Cognitive.causal_closure_speed(),
    }
}

/// Reward for learning `token`.
pub fn from_morpheme_learned(
    token: &str,
    difficulty: u8,
    accuracy: f64,
    time_taken_secs: f64,
) -> RewardResult {
    let result = score(&morpheme_learned_event(difficulty, accuracy, time_taken_secs));
    tracing::debug!(token, xp = result.final_xp, "Morpheme learned");
    result
}

pub fn exercise_completed_event(
    kind: ExerciseKind,
    difficulty: u8,
    accuracy: f64,
    time_taken_secs: f64,
    streak_bonus: f64,
) -> RewardEvent {
    let difficulty = f64::from(difficulty);
    RewardEvent {
        event_type: EventType::ExerciseCompleted,
        base_entropy: kind.base_entropy(),
        difficulty_multiplier: difficulty,
        quality_score: accuracy,
        time_efficiency: time_efficiency(difficulty * EXERCISE_SECONDS_PER_LEVEL, time_taken_secs),
        social_bonus: streak_bonus,
        entropy_delta: -accuracy * 0.3,
        causal_closure_speed: LearningDomain::Psychomotor.causal_closure_speed(),
    }
}

pub fn from_exercise_completed(
    kind: ExerciseKind,
    difficulty: u8,
    accuracy: f64,
    time_taken_secs: f64,
    streak_bonus: f64,
) -> RewardResult {
    score(&exercise_completed_event(kind, difficulty, accuracy, time_taken_secs, streak_bonus))
}

/// Social bonus a loop earns for entropy awareness and uncertainty marking.
pub fn loop_awareness_bonus<S: AsRef<str>>(entropy_operators: &[S], uncertainty_markers: &[S]) -> f64 {
    let entropy_bonus: f64 = entropy_operators
        .iter()
        .map(|op| match op.as_ref() {
            "nyx-" => 0.3,
            "nyx+" => 0.1,
            "nyx!" => 0.5,
            _ => 0.0,
        })
        .sum();
    entropy_bonus + uncertainty_markers.len() as f64 * 0.2
}

pub fn loop_construction_event<S: AsRef<str>>(
    complexity: u32,
    valid: bool,
    entropy_operators: &[S],
    uncertainty_markers: &[S],
) -> RewardEvent {
    RewardEvent {
        event_type: EventType::LoopConstructed,
        base_entropy: LOOP_BASE_ENTROPY,
        difficulty_multiplier: f64::from(complexity),
        quality_score: if valid { 1.0 } else { 0.3 },
        time_efficiency: 1.0,
        social_bonus: loop_awareness_bonus(entropy_operators, uncertainty_markers),
        entropy_delta: if valid { VALID_LOOP_DELTA } else { INVALID_LOOP_DELTA },
        causal_closure_speed: LearningDomain::Linguistic.causal_closure_speed(),
    }
}

pub fn from_loop_construction<S: AsRef<str>>(
    complexity: u32,
    valid: bool,
    entropy_operators: &[S],
    uncertainty_markers: &[S],
) -> RewardResult {
    score(&loop_construction_event(complexity, valid, entropy_operators, uncertainty_markers))
}

pub fn pronunciation_event(difficulty: u8, accuracy: f64, attempts: u32) -> RewardEvent {
    RewardEvent {
        event_type: EventType::PronunciationPerfect,
        base_entropy: PRONUNCIATION_BASE_ENTROPY,
        difficulty_multiplier: f64::from(difficulty),
        quality_score: accuracy,
        time_efficiency: time_efficiency(PRONUNCIATION_PAR_ATTEMPTS, f64::from(attempts)),
        social_bonus: 0.0,
        entropy_delta: -accuracy * 0.2,
        causal_closure_speed: LearningDomain::AudioLinguistic.causal_closure_speed(),
    }
}

/// Reward for pronouncing `token`. Fewer attempts count as higher efficiency.
pub fn from_pronunciation(token: &str, difficulty: u8, accuracy: f64, attempts: u32) -> RewardResult {
    let result = score(&pronunciation_event(difficulty, accuracy, attempts));
    tracing::debug!(token, attempts, xp = result.final_xp, "Pronunciation scored");
    result
}

pub fn teaching_event(concepts_taught: u32, learner_success_rate: f64) -> RewardEvent {
    RewardEvent {
        event_type: EventType::TeachingBonus,
        base_entropy: TEACHING_BASE_ENTROPY,
        difficulty_multiplier: f64::from(concepts_taught),
        quality_score: learner_success_rate,
        time_efficiency: 1.0,
        social_bonus: TEACHING_SOCIAL_BONUS,
        entropy_delta: -learner_success_rate * 0.6,
        causal_closure_speed: LearningDomain::Social.causal_closure_speed(),
    }
}

pub fn from_teaching(concepts_taught: u32, learner_success_rate: f64) -> RewardResult {
    score(&teaching_event(concepts_taught, learner_success_rate))
}
