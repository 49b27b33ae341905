use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio::config::Config;
use folio::loader::{load_document, source_for, LoadedDocument};
use folio::report::{render_outline, render_skills, DocumentSummary};
use folio::{
    aggregate_skills, collect_labels, filter_document, filter_skills, LabelSelection, LoadError,
};

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Validate a resume document and inspect label-filtered views of it")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the document against the schema and print a summary
    Validate(SourceArg),
    /// List the labels used by the document and compare them to availableLabels
    Labels(SourceArg),
    /// Print the document restricted to the selected labels
    Filter {
        #[command(flatten)]
        source: SourceArg,
        #[command(flatten)]
        selection: SelectionArg,
        /// Print the filtered document as JSON instead of an outline
        #[arg(long)]
        json: bool,
    },
    /// Print every distinct skill with the dates of its earliest role
    Skills {
        #[command(flatten)]
        source: SourceArg,
        #[command(flatten)]
        selection: SelectionArg,
    },
}

#[derive(Args, Debug)]
struct SourceArg {
    /// File path or http(s) URL of the resume document (defaults to FOLIO_DATA_PATH)
    source: Option<String>,
}

#[derive(Args, Debug)]
struct SelectionArg {
    /// Label to filter by; repeat for more (matches any)
    #[arg(short, long = "label")]
    labels: Vec<String>,
}

impl SelectionArg {
    fn selection(&self) -> LabelSelection {
        LabelSelection::new(self.labels.iter().cloned())
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    // Logs go to stderr so stdout stays usable in scripts.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Validate(source) => {
            let loaded = load(&source, config).await?;
            println!("Validation successful: the resume data is valid.\n");
            println!("{}", DocumentSummary::from_document(&loaded.document));
            print_warnings(&loaded.warnings);
        }
        Command::Labels(source) => {
            let loaded = load(&source, config).await?;
            for label in collect_labels(&loaded.document) {
                println!("{label}");
            }
            print_warnings(&loaded.audit.warnings());
        }
        Command::Filter {
            source,
            selection,
            json,
        } => {
            let loaded = load(&source, config).await?;
            let selection = selection.selection();
            warn_unknown(&loaded, &selection);

            let filtered = filter_document(&loaded.document, &selection);
            if json {
                let out = serde_json::to_string_pretty(&filtered)
                    .context("Failed to serialize filtered document")?;
                println!("{out}");
            } else {
                print!("{}", render_outline(&filtered));
            }
        }
        Command::Skills { source, selection } => {
            let loaded = load(&source, config).await?;
            let selection = selection.selection();
            warn_unknown(&loaded, &selection);

            let skills = filter_skills(&aggregate_skills(&loaded.document), &selection);
            print!("{}", render_skills(&skills));
        }
    }
    Ok(())
}

async fn load(source: &SourceArg, config: &Config) -> Result<LoadedDocument> {
    let location = source.source.as_deref().unwrap_or(config.data_path.as_str());
    let timeout = Duration::from_secs(config.fetch_timeout_secs);
    let source = source_for(location, timeout)?;

    match load_document(source.as_ref()).await {
        Ok(loaded) => Ok(loaded),
        Err(LoadError::Schema(errors)) => {
            eprintln!("Validation failed for {location}:");
            for e in errors.errors() {
                eprintln!("  {e}");
            }
            Err(LoadError::Schema(errors)).context("Resume data does not match the schema")
        }
        Err(e) => Err(e).with_context(|| format!("Could not load resume data from {location}")),
    }
}

fn warn_unknown(loaded: &LoadedDocument, selection: &LabelSelection) {
    let known = collect_labels(&loaded.document);
    for label in selection.unknown(&known) {
        warn!("Label '{label}' matches nothing in this document");
    }
    if !selection.is_empty() {
        info!(
            "Filtering by: {}",
            selection.iter().collect::<Vec<_>>().join(", ")
        );
    }
}

fn print_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    println!("\nWarnings:");
    for w in warnings {
        println!("  {w}");
    }
}
