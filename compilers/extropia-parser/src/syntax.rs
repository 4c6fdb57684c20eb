use extropia_lexicon::Lexicon;
use extropia_protocol::{Category, StructureRecord};

/// Loop-control tokens with a fixed role.
const INITIATOR: &str = "sho";
const CLOSURES: [&str; 2] = ["lim", "zur"];
/// The entropy token that names the loop's effect rather than an action.
const EFFECT: &str = "ek";

/// Role a known token plays in a loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopRole {
    Agent,
    Initiator,
    Action,
    Validation,
    Closure,
    Effect,
    UncertaintyMarker,
    EntropyOperator,
}

/// Role of `token` given its dictionary category.
pub fn role_of(token: &str, category: &Category) -> LoopRole {
    match category {
        Category::Agent => LoopRole::Agent,
        Category::LoopControl if token == INITIATOR => LoopRole::Initiator,
        Category::LoopControl if CLOSURES.contains(&token) => LoopRole::Closure,
        Category::LoopControl => LoopRole::Action,
        Category::Validation => LoopRole::Validation,
        Category::Entropy if token == EFFECT => LoopRole::Effect,
        Category::Entropy => LoopRole::Action,
        Category::Uncertainty => LoopRole::UncertaintyMarker,
        Category::EntropyOperator => LoopRole::EntropyOperator,
        Category::Other(_) => LoopRole::Action,
    }
}

/// Single left-to-right fold of tokens into loop roles.
///
/// Tokens missing from the lexicon are skipped here; the validator reports
/// them. Repeated single-slot roles keep the last occurrence.
pub fn analyze<'a, I>(lexicon: &Lexicon, tokens: I) -> StructureRecord
where
    I: IntoIterator<Item = &'a String>,
{
    let mut structure = StructureRecord::default();

    for token in tokens {
        let Some(morpheme) = lexicon.lookup(token) else {
            continue;
        };

        let token = token.clone();
        match role_of(&token, &morpheme.category) {
            LoopRole::Agent => structure.agent = Some(token),
            LoopRole::Initiator => structure.initiator = Some(token),
            LoopRole::Action => structure.actions.push(token),
            LoopRole::Validation => structure.validation = Some(token),
            LoopRole::Closure => structure.closure = Some(token),
            LoopRole::Effect => structure.effect = Some(token),
            LoopRole::UncertaintyMarker => structure.uncertainty_markers.push(token),
            LoopRole::EntropyOperator => structure.entropy_operators.push(token),
        }
    }

    structure
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_role_routing() {
        let lex = Lexicon::builtin().unwrap();
        let input = tokens(&["ka", "sho", "rep", "zen", "ek", "log", "ver", "zo", "nyx-", "lim"]);
        let s = analyze(&lex, &input);

        assert_eq!(s.agent.as_deref(), Some("ka"));
        assert_eq!(s.initiator.as_deref(), Some("sho"));
        assert_eq!(s.actions, tokens(&["rep", "zen", "log"]));
        assert_eq!(s.effect.as_deref(), Some("ek"));
        assert_eq!(s.validation.as_deref(), Some("ver"));
        assert_eq!(s.uncertainty_markers, tokens(&["zo"]));
        assert_eq!(s.entropy_operators, tokens(&["nyx-"]));
        assert_eq!(s.closure.as_deref(), Some("lim"));
        assert_eq!(s.nesting_level, 0);
    }

    #[test]
    fn test_last_occurrence_wins() {
        let lex = Lexicon::builtin().unwrap();
        let s = analyze(&lex, &tokens(&["ka", "mu", "ver", "tok", "lim", "zur"]));
        assert_eq!(s.agent.as_deref(), Some("mu"));
        assert_eq!(s.validation.as_deref(), Some("tok"));
        assert_eq!(s.closure.as_deref(), Some("zur"));
    }

    #[test]
    fn test_unknown_tokens_are_skipped() {
        let lex = Lexicon::builtin().unwrap();
        let s = analyze(&lex, &tokens(&["xyz", "ka", "qq"]));
        assert_eq!(s.agent.as_deref(), Some("ka"));
        assert!(s.actions.is_empty());
    }

    #[test]
    fn test_role_of_custom_category() {
        assert_eq!(role_of("sho", &Category::LoopControl), LoopRole::Initiator);
        assert_eq!(role_of("zur", &Category::LoopControl), LoopRole::Closure);
        // Closure tokens only close loops under loop_control
        assert_eq!(role_of("lim", &Category::Other("misc".to_string())), LoopRole::Action);
        assert_eq!(role_of("ek", &Category::Validation), LoopRole::Validation);
    }
}
