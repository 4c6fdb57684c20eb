//! Reward scoring for Extropian learning activities.
//!
//! Every activity goes through one formula ([`score`]); the typed
//! constructors in [`adapters`] only choose its inputs. Events that do not
//! reduce entropy keep a tenth of their reward and are reported as
//! non-compliant rather than rejected.

pub mod adapters;
pub mod formula;
pub mod stats;

pub use adapters::{
    from_exercise_completed, from_loop_construction, from_morpheme_learned, from_pronunciation,
    from_teaching, loop_awareness_bonus, ExerciseKind, LearningDomain,
};
pub use formula::{is_physics_compliant, score, EFFICIENCY_CAP, PHYSICS_PENALTY};
pub use stats::{learning_stats, streak_bonus, LearningMetrics, LearningStats};
