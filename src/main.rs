//! skos-autonumber CLI — rewrite SKOS concept URIs to autonumbers
//!
//! Parses a thesaurus file, replaces every concept URI under the base
//! namespace with a minted sequential identifier, and writes the
//! rewritten graph back out.

use anyhow::{bail, Context, Result};
use clap::Parser;
use skos_autonumber::rdf::{self, NamespaceManager, RdfFormat};
use skos_autonumber::renumber::{NamespaceMatch, RenumberConfig, Renumberer};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "skos-autonumber", version, about = "Rewrite SKOS concept URIs to autonumbers")]
struct Cli {
    /// Input RDF file (.ttl or .nt)
    input: PathBuf,

    /// Output file path
    #[arg(short, long)]
    output: PathBuf,

    /// YAML configuration file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base namespace of the thesaurus identifier space
    #[arg(long, env = "SKOS_AUTONUMBER_BASE")]
    base_namespace: Option<String>,

    /// Inclusive lower bound of the identifier range
    #[arg(long)]
    id_low: Option<u64>,

    /// Exclusive upper bound of the identifier range
    #[arg(long)]
    id_high: Option<u64>,

    /// Namespace match mode
    #[arg(long, value_enum)]
    namespace_match: Option<MatchMode>,

    /// Input format (defaults to the input file extension)
    #[arg(long, value_enum)]
    input_format: Option<Format>,

    /// Output format (defaults to the output file extension)
    #[arg(long, value_enum)]
    output_format: Option<Format>,

    /// Write the original → minted URI mapping as JSON
    #[arg(long)]
    mapping_out: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum MatchMode {
    Contains,
    Prefix,
}

impl From<MatchMode> for NamespaceMatch {
    fn from(mode: MatchMode) -> Self {
        match mode {
            MatchMode::Contains => NamespaceMatch::Contains,
            MatchMode::Prefix => NamespaceMatch::Prefix,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Format {
    Turtle,
    Ntriples,
}

impl From<Format> for RdfFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Turtle => RdfFormat::Turtle,
            Format::Ntriples => RdfFormat::NTriples,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    let input_format = resolve_format(cli.input_format, &cli.input)?;
    let output_format = resolve_format(cli.output_format, &cli.output)?;

    info!("reading {}", cli.input.display());
    let input = rdf::parse_file(&cli.input, input_format)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;
    info!("parsed {} triples", input.len());

    let outcome = Renumberer::new(&config)?.run(&input)?;

    let mut namespaces = NamespaceManager::new();
    namespaces.add_prefix("thes", &config.base_namespace);
    rdf::serialize_file(&outcome.graph, &cli.output, output_format, &namespaces)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!(
        "wrote {} triples to {} ({} concepts renamed)",
        outcome.report.output_triples,
        cli.output.display(),
        outcome.report.concepts_renamed
    );

    if let Some(path) = &cli.mapping_out {
        let mapping: BTreeMap<&str, &str> = outcome
            .mapping
            .iter()
            .map(|(original, minted)| (original, minted.as_str()))
            .collect();
        std::fs::write(path, serde_json::to_string_pretty(&mapping)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote mapping for {} concepts to {}", mapping.len(), path.display());
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<RenumberConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_yaml::from_str(&text)
                .with_context(|| format!("invalid config file {}", path.display()))?
        }
        None => RenumberConfig::default(),
    };

    if let Some(base) = &cli.base_namespace {
        config.base_namespace = base.clone();
    }
    if let Some(low) = cli.id_low {
        config.id_low = low;
    }
    if let Some(high) = cli.id_high {
        config.id_high = high;
    }
    if let Some(mode) = cli.namespace_match {
        config.namespace_match = mode.into();
    }

    if config.base_namespace.is_empty() {
        bail!("a base namespace is required (--base-namespace or config file)");
    }
    if config.id_low >= config.id_high {
        bail!(
            "identifier range [{}, {}) is empty",
            config.id_low,
            config.id_high
        );
    }

    Ok(config)
}

fn resolve_format(flag: Option<Format>, path: &Path) -> Result<RdfFormat> {
    if let Some(format) = flag {
        return Ok(format.into());
    }
    RdfFormat::from_extension(path).with_context(|| {
        format!(
            "cannot determine RDF format of {}; pass --input-format/--output-format",
            path.display()
        )
    })
}
