/// Bonus fraction for consistency: up to 1.0 from daily streaks plus up to
/// 0.5 from perfect exercises.
pub fn streak_bonus(consecutive_days: u32, perfect_exercises: u32) -> f64 {
    let consistency = (f64::from(consecutive_days) * 0.1).min(1.0);
    let perfection = (f64::from(perfect_exercises) * 0.05).min(0.5);
    consistency + perfection
}

/// Raw progress counters supplied by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LearningMetrics {
    pub morphemes_learned: u32,
    pub exercises_completed: u32,
    pub loops_constructed: u32,
    /// 0.0 to 1.0.
    pub pronunciation_accuracy: f64,
    pub consecutive_correct: u32,
    pub time_spent_minutes: f64,
    pub entropy_reductions_achieved: u32,
    pub teaching_interactions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LearningStats {
    pub total_entropy_reduced: f64,
    /// Exercises per minute.
    pub learning_efficiency: f64,
    /// Morphemes per exercise.
    pub knowledge_density: f64,
    /// Teaching interactions per morpheme.
    pub teaching_ratio: f64,
    pub mastery_progression: f64,
}

/// Summary ratios. Denominators are floored at 1 so empty progress yields zeros.
pub fn learning_stats(metrics: &LearningMetrics) -> LearningStats {
    let exercises = f64::from(metrics.exercises_completed);
    let morphemes = f64::from(metrics.morphemes_learned);

    LearningStats {
        total_entropy_reduced: f64::from(metrics.entropy_reductions_achieved) * 0.3,
        learning_efficiency: exercises / metrics.time_spent_minutes.max(1.0),
        knowledge_density: morphemes / exercises.max(1.0),
        teaching_ratio: f64::from(metrics.teaching_interactions) / morphemes.max(1.0),
        mastery_progression: (metrics.pronunciation_accuracy
            + f64::from(metrics.consecutive_correct) / 10.0)
            / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_bonus_caps() {
        assert_eq!(streak_bonus(0, 0), 0.0);
        assert!((streak_bonus(3, 2) - 0.4).abs() < 1e-9);
        assert!((streak_bonus(50, 50) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_learning_stats() {
        let stats = learning_stats(&LearningMetrics {
            morphemes_learned: 10,
            exercises_completed: 20,
            pronunciation_accuracy: 0.8,
            consecutive_correct: 4,
            time_spent_minutes: 40.0,
            entropy_reductions_achieved: 5,
            teaching_interactions: 2,
            ..LearningMetrics::default()
        });

        assert!((stats.total_entropy_reduced - 1.5).abs() < 1e-9);
        assert!((stats.learning_efficiency - 0.5).abs() < 1e-9);
        assert!((stats.knowledge_density - 0.5).abs() < 1e-9);
        assert!((stats.teaching_ratio - 0.2).abs() < 1e-9);
        assert!((stats.mastery_progression - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_empty_progress() {
        let stats = learning_stats(&LearningMetrics::default());
        assert_eq!(stats.learning_efficiency, 0.0);
        assert_eq!(stats.knowledge_density, 0.0);
        assert_eq!(stats.teaching_ratio, 0.0);
    }
}
