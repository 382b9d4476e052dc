use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use po_harvest_core::{
    DirectorySink, DropItem, GoogleTranslator, HarvestConfig, LogProgress, Session,
    SessionOutcome,
};

/// Harvest translatable strings from dropped sources, merge them with
/// existing .po catalogs, machine-translate what is missing, and write
/// one catalog per language/domain.
#[derive(Parser)]
#[command(name = "po-harvest", version)]
struct Cli {
    /// Dropped files or directories to harvest.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Directory that receives the generated catalogs.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Target languages; overrides the configured list.
    #[arg(short, long)]
    lang: Vec<String>,

    /// JSON config file with extraction functions, extensions, and
    /// endpoint overrides.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match HarvestConfig::load(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("error: {error}");
                return ExitCode::FAILURE;
            }
        },
        None => HarvestConfig::default(),
    };
    if !cli.lang.is_empty() {
        config.languages = cli.lang.clone();
    }

    let translator = match GoogleTranslator::new() {
        Ok(translator) => match &config.translation_endpoint {
            Some(endpoint) => translator.with_endpoint(endpoint.clone()),
            None => translator,
        },
        Err(error) => {
            eprintln!("error: {error}");
            return ExitCode::FAILURE;
        }
    };

    let sink = DirectorySink::new(&cli.out_dir);
    let mut session = Session::new(config, translator, sink, LogProgress::default());
    let items: Vec<DropItem> = cli.paths.iter().cloned().map(DropItem::Path).collect();

    match session.run(&items).await {
        Ok(SessionOutcome::Completed { files }) => {
            println!(
                "wrote {} catalog file(s) to {}",
                files.len(),
                cli.out_dir.display()
            );
            ExitCode::SUCCESS
        }
        Ok(SessionOutcome::NothingToExport) => {
            println!("No translation text has been found.");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
