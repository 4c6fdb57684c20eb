use extropia_lexicon::Lexicon;
use extropia_protocol::StructureRecord;
use thiserror::Error;

/// Grammar violations. Any of these makes a loop invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("Unknown morphemes: {}", .0.join(", "))]
    UnknownMorphemes(Vec<String>),

    #[error("No closure specified - loops must end with lim or zur")]
    MissingClosure,
}

/// Advisories that never affect validity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarWarning {
    #[error("No agent specified - consider adding {}", agent_list(.0))]
    MissingAgent(Vec<String>),

    #[error("No actions specified - consider adding morphemes between initiation and closure")]
    NoActions,
}

fn agent_list(agents: &[String]) -> String {
    match agents {
        [] => "an agent".to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub errors: Vec<GrammarError>,
    pub warnings: Vec<GrammarWarning>,
}

/// Runs every loop rule. Errors come out as unknown tokens, then closure;
/// warnings as agent, then actions.
pub fn check_loop(lexicon: &Lexicon, tokens: &[String], structure: &StructureRecord) -> Findings {
    let mut findings = Findings::default();

    findings.errors.extend(check_unknown(lexicon, tokens));
    findings.errors.extend(check_closure(structure));

    findings.warnings.extend(check_agent(lexicon, structure));
    findings.warnings.extend(check_actions(structure));

    findings
}

fn check_unknown(lexicon: &Lexicon, tokens: &[String]) -> Option<GrammarError> {
    let unknown: Vec<String> = tokens
        .iter()
        .filter(|token| !lexicon.contains(token))
        .cloned()
        .collect();

    if unknown.is_empty() {
        None
    } else {
        Some(GrammarError::UnknownMorphemes(unknown))
    }
}

fn check_closure(structure: &StructureRecord) -> Option<GrammarError> {
    structure.closure.is_none().then_some(GrammarError::MissingClosure)
}

fn check_agent(lexicon: &Lexicon, structure: &StructureRecord) -> Option<GrammarWarning> {
    if structure.agent.is_some() {
        return None;
    }
    let agents = lexicon
        .agent_tokens()
        .into_iter()
        .map(str::to_string)
        .collect();
    Some(GrammarWarning::MissingAgent(agents))
}

fn check_actions(structure: &StructureRecord) -> Option<GrammarWarning> {
    structure.actions.is_empty().then_some(GrammarWarning::NoActions)
}
