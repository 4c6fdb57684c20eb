use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use extropia_lexicon::{source, Lexicon};
use extropia_protocol::Category;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Compiles the JSON morpheme dictionary to an rkyv archive")]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Where to write the archive. Omit together with --check to only audit.
    #[arg(short, long, value_name = "FILE", required_unless_present = "check")]
    output: Option<PathBuf>,

    /// Version stamped into the archive.
    #[arg(long, default_value_t = source::SOURCE_VERSION)]
    dictionary_version: u32,

    /// Fail on audit findings instead of only reporting them.
    #[arg(long)]
    check: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    tracing::info!(input = %cli.input.display(), "Reading dictionary");
    let input_data = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    let mut dictionary = source::parse(&input_data)
        .with_context(|| format!("parsing {}", cli.input.display()))?;
    dictionary.version = cli.dictionary_version;

    let lexicon = Lexicon::from_dictionary(dictionary);
    report(&lexicon);

    let issues = lexicon.audit();
    for issue in &issues {
        tracing::warn!("{issue}");
    }
    if cli.check && !issues.is_empty() {
        bail!("dictionary audit found {} issue(s)", issues.len());
    }

    let Some(output) = cli.output else {
        tracing::info!("Audit passed, no output requested");
        return Ok(());
    };

    let bytes = lexicon.to_archive()?;
    fs::write(&output, &bytes).with_context(|| format!("writing {}", output.display()))?;

    tracing::info!(output = %output.display(), bytes = bytes.len(), "Archive written");
    Ok(())
}

fn report(lexicon: &Lexicon) {
    tracing::info!(
        version = lexicon.version(),
        morphemes = lexicon.len(),
        roots = lexicon.morphemes().iter().filter(|m| m.is_root()).count(),
        "Compiling dictionary"
    );

    let categories = [
        Category::Agent,
        Category::LoopControl,
        Category::Validation,
        Category::Entropy,
        Category::EntropyOperator,
        Category::Uncertainty,
    ];
    for category in &categories {
        tracing::debug!(category = category.label(), count = lexicon.morphemes_in(category).len());
    }

    let other = lexicon
        .morphemes()
        .iter()
        .filter(|m| matches!(m.category, Category::Other(_)))
        .count();
    tracing::debug!(category = "other", count = other);
}
