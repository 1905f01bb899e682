//! starname-gen CLI - print random star names
//!
//! Thin wrapper over the library: parse the count, build the generator
//! from configuration, print one name per line.

// Exclude from coverage - CLI binary tested via integration tests
#![cfg_attr(tarpaulin, ignore)]

use clap::error::ErrorKind;
use clap::Parser;
use starname_generator::{CatalogueId, GeneratorConfig, SamplingRequest, StarNameGenerator};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

const USAGE: &str = "Usage: starname-gen <positive integer>";

/// Print random IAU star names (or constellation names).
#[derive(Parser, Debug)]
#[command(name = "starname-gen")]
#[command(version = starname_generator::VERSION)]
#[command(about = "Print random IAU star names")]
#[command(after_help = "EXAMPLES:
  # One star name
  starname-gen

  # Ten distinct star names
  starname-gen 10

  # Five constellations, repeats allowed, reproducible
  starname-gen 5 --constellations --allow-repeats --seed 42

ENVIRONMENT:
  STARNAME_DATA_DIR   directory holding starData.json and constellationData.json
  STARNAME_BASE_URL   base URL serving the same files (needs the `fetch` feature)
  STARNAME_SEED       fixed RNG seed
")]
struct Cli {
    /// How many names to print
    #[arg(value_name = "COUNT", default_value = "1", allow_negative_numbers = true)]
    count: String,

    /// Draw constellation names instead of star names
    #[arg(long = "constellations")]
    constellations: bool,

    /// Allow the same name to appear more than once
    #[arg(long = "allow-repeats")]
    allow_repeats: bool,

    /// Seed the random number generator for reproducible output
    #[arg(long = "seed", value_name = "N")]
    seed: Option<u64>,

    /// Read catalogues from this directory instead of the embedded copies
    #[arg(long = "data-dir", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Fetch catalogues from this base URL
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,

    /// JSON config file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Cli {
    /// File, then environment, then flags
    fn resolve_config(&self) -> starname_generator::Result<GeneratorConfig> {
        let file = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };
        let flags = GeneratorConfig {
            data_dir: self.data_dir.clone(),
            base_url: self.base_url.clone(),
            seed: self.seed,
        };
        Ok(file.merge(GeneratorConfig::from_env()?).merge(flags))
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
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

fn run(cli: &Cli, request: SamplingRequest) -> starname_generator::Result<Vec<String>> {
    let config = cli.resolve_config()?;
    let mut generator = StarNameGenerator::from_config(&config)?;
    debug!(source = generator.source_name(), "initializing generator");
    generator.init()?;

    let catalogue = if cli.constellations {
        CatalogueId::Constellations
    } else {
        CatalogueId::Stars
    };
    generator.sample(catalogue, request)
}

fn main() {
    // Terminate quietly when piped into head and friends
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprintln!("{}", USAGE);
                eprint!("{}", e);
                std::process::exit(1);
            }
        },
    };
    setup_logging(cli.verbose);

    let request = match SamplingRequest::parse(&cli.count, !cli.allow_repeats) {
        Ok(request) => request,
        Err(_) => {
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    match run(&cli, request) {
        Ok(names) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for name in names {
                if writeln!(out, "{}", name).is_err() {
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
