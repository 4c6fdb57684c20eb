use extropia_lexicon::{LearnedSet, Lexicon};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

const DISTRACTORS: usize = 3;
const XP_PER_LEVEL: u32 = 10;

/// A multiple-choice question asking for the gloss of one morpheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exercise {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
    pub explanation: String,
    pub target_morpheme: String,
    pub xp_reward: u32,
}

/// Picks a random available morpheme and builds an identification question.
///
/// Returns `None` once nothing is left to learn.
pub fn generate_exercise<R: Rng + ?Sized>(
    lexicon: &Lexicon,
    learned: &LearnedSet<'_>,
    rng: &mut R,
) -> Option<Exercise> {
    let available = lexicon.available_tokens(learned);
    let target = lexicon.lookup(available.choose(rng)?)?;

    let others: Vec<_> = lexicon
        .morphemes()
        .iter()
        .filter(|m| m.token != target.token)
        .collect();

    let mut options: Vec<(bool, &str)> = others
        .choose_multiple(rng, DISTRACTORS)
        .map(|m| (false, m.english.as_str()))
        .collect();
    options.push((true, target.english.as_str()));
    options.shuffle(rng);

    let correct_answer = options.iter().position(|(correct, _)| *correct)?;

    Some(Exercise {
        kind: "morpheme_identification",
        question: format!("What does the morpheme '{}' mean?", target.token),
        options: options.into_iter().map(|(_, gloss)| gloss.to_string()).collect(),
        correct_answer,
        explanation: format!(
            "'{}' means \"{}\" - {}",
            target.token, target.english, target.function
        ),
        target_morpheme: target.token.clone(),
        xp_reward: u32::from(target.difficulty) * XP_PER_LEVEL,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_exercise_targets_available_morphemes() {
        let lex = Lexicon::builtin().unwrap();
        let learned = LearnedSet::new();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let exercise = generate_exercise(&lex, &learned, &mut rng).unwrap();

            assert!(["ka", "sho", "ver"].contains(&exercise.target_morpheme.as_str()));
            assert_eq!(exercise.options.len(), 4);
            assert_eq!(exercise.xp_reward, 10);

            let target = lex.lookup(&exercise.target_morpheme).unwrap();
            assert_eq!(exercise.options[exercise.correct_answer], target.english);
            assert!(exercise.explanation.starts_with(&format!("'{}' means", target.token)));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let lex = Lexicon::builtin().unwrap();
        let learned: LearnedSet = ["ka", "sho", "ver", "nyx"].into_iter().collect();

        let first = generate_exercise(&lex, &learned, &mut StdRng::seed_from_u64(7));
        let second = generate_exercise(&lex, &learned, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn test_nothing_left_to_learn() {
        let lex = Lexicon::builtin().unwrap();
        let learned: LearnedSet = lex.tokens().collect();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_exercise(&lex, &learned, &mut rng).is_none());
    }
}
