use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Activity that produced a reward. Only used for explanatory text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EventType {
    MorphemeLearned,
    ExerciseCompleted,
    LoopConstructed,
    PronunciationPerfect,
    TeachingBonus,
    AchievementUnlocked,
    StreakBonus,
    EntropyReduction,
    ValidationSuccess,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::MorphemeLearned => "morpheme_learned",
            EventType::ExerciseCompleted => "exercise_completed",
            EventType::LoopConstructed => "loop_constructed",
            EventType::PronunciationPerfect => "pronunciation_perfect",
            EventType::TeachingBonus => "teaching_bonus",
            EventType::AchievementUnlocked => "achievement_unlocked",
            EventType::StreakBonus => "streak_bonus",
            EventType::EntropyReduction => "entropy_reduction",
            EventType::ValidationSuccess => "validation_success",
        }
    }

    /// Human label: the first underscore becomes a space.
    pub fn label(self) -> String {
        self.as_str().replacen('_', " ", 1)
    }
}

/// Input to the shared reward formula.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct RewardEvent {
    pub event_type: EventType,
    pub base_entropy: f64,
    pub difficulty_multiplier: f64,
    /// Expected in `0.0..=1.0`.
    pub quality_score: f64,
    pub time_efficiency: f64,
    pub social_bonus: f64,
    /// Negative means uncertainty went down.
    pub entropy_delta: f64,
    pub causal_closure_speed: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct RewardResult {
    pub event_type: EventType,
    pub base_xp: f64,
    pub entropy_factor: f64,
    pub difficulty_factor: f64,
    pub quality_factor: f64,
    pub efficiency_factor: f64,
    pub social_factor: f64,
    pub final_xp: u64,
    pub entropy_delta: f64,
    pub physics_valid: bool,
    pub explanation: String,
}

/// XP derived from a loop's structure: token difficulty scaled by its entropy
/// operators, roles, closure and uncertainty markers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct StructureXp {
    /// Five per difficulty point of every known token.
    pub base_xp: f64,
    pub entropy_modifier: f64,
    pub complexity_multiplier: f64,
    /// Bonus (or malus) chosen by the closure token.
    pub validation_bonus: f64,
    pub uncertainty_bonus: f64,
    pub final_xp: u64,
    pub entropy_delta: f64,
}
