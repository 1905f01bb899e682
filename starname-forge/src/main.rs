//! starname-forge CLI - regenerate the catalogue files

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use starname_forge::{
    extract_constellations, extract_star_names, fetch_page, write_catalogue, CONSTELLATIONS_FILE,
    STARS_FILE, WIKI_URL,
};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "starname-forge")]
#[command(about = "Rebuild the star and constellation catalogues from Wikipedia")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild starData.json
    Stars(SourceArgs),

    /// Rebuild constellationData.json
    Constellations(SourceArgs),

    /// Rebuild both catalogues from a single download
    All(SourceArgs),
}

#[derive(Args)]
struct SourceArgs {
    /// Read the page from a saved HTML file instead of downloading it
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Page to download
    #[arg(long, value_name = "URL", default_value = WIKI_URL)]
    url: String,

    /// Directory to write catalogue files into
    #[arg(long, value_name = "DIR", default_value = "data")]
    out_dir: PathBuf,
}

impl SourceArgs {
    fn page(&self) -> Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            None => {
                info!(url = %self.url, "downloading page");
                fetch_page(&self.url).with_context(|| format!("Failed to download {}", self.url))
            }
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: could not install logger: {}", e);
    }
}

fn forge_stars(html: &str, out_dir: &Path) -> Result<()> {
    let names = extract_star_names(html)?;
    let path = out_dir.join(STARS_FILE);
    write_catalogue(&path, &names)?;
    info!(count = names.len(), path = %path.display(), "wrote star names");
    Ok(())
}

fn forge_constellations(html: &str, out_dir: &Path) -> Result<()> {
    let names = extract_constellations(html)?;
    let path = out_dir.join(CONSTELLATIONS_FILE);
    write_catalogue(&path, &names)?;
    info!(count = names.len(), path = %path.display(), "wrote constellation names");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match &cli.command {
        Commands::Stars(args) => forge_stars(&args.page()?, &args.out_dir),
        Commands::Constellations(args) => forge_constellations(&args.page()?, &args.out_dir),
        Commands::All(args) => {
            let html = args.page()?;
            forge_stars(&html, &args.out_dir)?;
            forge_constellations(&html, &args.out_dir)
        }
    }
}
