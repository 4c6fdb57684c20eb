use extropia_protocol::{RewardEvent, RewardResult};

/// Upper bound on the time-efficiency multiplier.
pub const EFFICIENCY_CAP: f64 = 2.0;

/// Fraction of the reward kept when an event did not reduce entropy.
pub const PHYSICS_PENALTY: f64 = 0.1;

/// Weight of a positive entropy delta in the entropy factor.
const DISORDER_WEIGHT: f64 = 0.5;

/// Scores one learning event.
///
/// ```text
/// final = base_entropy * difficulty * entropy * quality^1.5 * min(efficiency, 2) * (1 + social)
///         / sqrt(causal_closure_speed)          (when the speed is positive)
///         * 0.1                                 (when entropy_delta >= 0)
/// ```
///
/// The result is rounded and never negative. Non-finite intermediate values
/// collapse to zero.
pub fn score(event: &RewardEvent) -> RewardResult {
    let physics_valid = event.entropy_delta < 0.0;

    let entropy_factor = if physics_valid {
        event.entropy_delta.abs()
    } else {
        event.entropy_delta * DISORDER_WEIGHT
    };
    let quality_factor = event.quality_score.powf(1.5);
    let efficiency_factor = event.time_efficiency.min(EFFICIENCY_CAP);
    let social_factor = 1.0 + event.social_bonus;
    let base_xp = event.base_entropy * event.difficulty_multiplier;

    let mut xp = base_xp * entropy_factor * quality_factor * efficiency_factor * social_factor;
    if event.causal_closure_speed > 0.0 {
        xp /= event.causal_closure_speed.sqrt();
    }
    if !physics_valid {
        xp *= PHYSICS_PENALTY;
    }
    let final_xp = round_xp(xp);

    tracing::trace!(
        event = event.event_type.as_str(),
        base_xp,
        entropy_factor,
        quality_factor,
        final_xp,
        physics_valid,
        "Scored reward event"
    );

    RewardResult {
        event_type: event.event_type,
        base_xp,
        entropy_factor,
        difficulty_factor: event.difficulty_multiplier,
        quality_factor,
        efficiency_factor,
        social_factor,
        final_xp,
        entropy_delta: event.entropy_delta,
        physics_valid,
        explanation: explain(event, final_xp, physics_valid),
    }
}

fn round_xp(xp: f64) -> u64 {
    if xp.is_nan() || xp <= 0.0 {
        0
    } else {
        // Saturates on infinity
        xp.round() as u64
    }
}

/// Audits a result independently of the forward computation.
///
/// Fails when XP was granted without reducing entropy, or when the XP exceeds
/// twice `|entropy_delta| * 100`.
pub fn is_physics_compliant(result: &RewardResult) -> bool {
    if result.entropy_delta >= 0.0 && result.final_xp > 0 {
        return false;
    }

    let expected_range = result.entropy_delta.abs() * 100.0;
    !(result.final_xp as f64 > expected_range * 2.0)
}

fn explain(event: &RewardEvent, final_xp: u64, physics_valid: bool) -> String {
    let mut parts = vec![
        format!("Earned {} XP for {}", final_xp, event.event_type.label()),
        if physics_valid {
            "✅ Physics compliant: Learning reduced entropy (uncertainty)".to_string()
        } else {
            "⚠️ Low XP: Learning should reduce mental entropy".to_string()
        },
        format!("Entropy Δ: {} (negative = learning success)", fixed(event.entropy_delta, 3)),
        format!("Quality factor: {}%", fixed(event.quality_score * 100.0, 0)),
    ];
    if event.social_bonus > 0.0 {
        parts.push(format!("Social bonus: +{}%", fixed(event.social_bonus * 100.0, 0)));
    }
    parts.join(" | ")
}

/// Formats `value` with `digits` decimals, rounding ties away from zero.
///
/// `{:.N}` alone rounds ties to even (`12.5` would print as `12`).
fn fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    format!("{:.*}", digits, (value * scale).round() / scale)
}
