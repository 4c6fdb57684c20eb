//! The process-wide lexicon: loaded once, read-only afterwards.

use std::sync::OnceLock;

use crate::Lexicon;

static LEXICON: OnceLock<Lexicon> = OnceLock::new();

/// Returns the process-wide lexicon, loading the built-in dictionary on first
/// use unless one was [`install`]ed.
pub fn global() -> &'static Lexicon {
    LEXICON.get_or_init(|| match Lexicon::builtin() {
        Ok(lexicon) => {
            tracing::info!(morphemes = lexicon.len(), "Loaded built-in lexicon");
            lexicon
        }
        Err(err) => {
            tracing::error!(error = %err, "Built-in lexicon is corrupt, continuing with an empty one");
            Lexicon::default()
        }
    })
}

/// Installs `lexicon` as the process-wide lexicon.
///
/// Must run before the first [`global`] call; afterwards the lexicon is handed
/// back unchanged.
pub fn install(lexicon: Lexicon) -> Result<&'static Lexicon, Lexicon> {
    let morphemes = lexicon.len();
    LEXICON.set(lexicon)?;
    tracing::info!(morphemes, "Installed lexicon");
    Ok(global())
}
