use extropia_lexicon::Lexicon;
use extropia_protocol::{StructureRecord, StructureXp};

const XP_PER_DIFFICULTY: f64 = 5.0;

/// Entropy change and reward modifier of one operator. `nyx!` is handled
/// separately because it amplifies whatever came before it.
fn operator_effect(op: &str) -> Option<(f64, f64)> {
    match op {
        "nyx-" => Some((-0.3, 1.5)),
        "nyx+" => Some((0.3, 0.5)),
        "nyx?" => Some((0.0, 0.8)),
        _ => None,
    }
}

const CRITICAL_OPERATOR: &str = "nyx!";
const CRITICAL_DELTA: f64 = -0.5;
const CRITICAL_MODIFIER: f64 = 2.0;

fn closure_bonus(closure: Option<&str>) -> f64 {
    match closure {
        Some("lim") => 1.2,
        Some("zur") => 0.8,
        _ => 1.0,
    }
}

/// Folds entropy operators left to right; later operators override earlier
/// ones, except that `nyx!` doubles a non-zero delta.
fn entropy(operators: &[String]) -> (f64, f64) {
    operators.iter().fold((0.0, 1.0), |(delta, modifier), op| {
        if op == CRITICAL_OPERATOR {
            let delta = if delta != 0.0 { delta * 2.0 } else { CRITICAL_DELTA };
            (delta, CRITICAL_MODIFIER)
        } else {
            operator_effect(op).unwrap_or((delta, modifier))
        }
    })
}

fn complexity_multiplier(structure: &StructureRecord) -> f64 {
    let mut multiplier = 1.0;
    if structure.agent.is_some() {
        multiplier += 0.2;
    }
    if structure.validation.is_some() {
        multiplier += 0.3;
    }
    if structure.effect.is_some() {
        multiplier += 0.2;
    }
    multiplier += structure.actions.len() as f64 * 0.1;
    multiplier += f64::from(structure.nesting_level) * 0.5;
    multiplier
}

/// Structure-derived XP of a token sequence and its analysis.
///
/// Unknown tokens add nothing to the base. Uncertainty markers multiply in
/// `1 + xp_modifier` each; markers without a modifier are neutral.
pub fn structure_xp(lexicon: &Lexicon, structure: &StructureRecord, tokens: &[String]) -> StructureXp {
    let base_xp: f64 = tokens
        .iter()
        .filter_map(|token| lexicon.difficulty_of(token))
        .map(|difficulty| f64::from(difficulty) * XP_PER_DIFFICULTY)
        .sum();

    let (entropy_delta, entropy_modifier) = entropy(&structure.entropy_operators);
    let complexity_multiplier = complexity_multiplier(structure);
    let validation_bonus = closure_bonus(structure.closure.as_deref());
    let uncertainty_bonus: f64 = structure
        .uncertainty_markers
        .iter()
        .filter_map(|marker| lexicon.lookup(marker).and_then(|m| m.xp_modifier))
        .fold(1.0, |bonus, modifier| bonus * (1.0 + modifier));

    let xp = base_xp * entropy_modifier * complexity_multiplier * validation_bonus * uncertainty_bonus;
    let final_xp = if xp > 0.0 { xp.round() as u64 } else { 0 };

    StructureXp {
        base_xp,
        entropy_modifier,
        complexity_multiplier,
        validation_bonus,
        uncertainty_bonus,
        final_xp,
        entropy_delta,
    }
}
