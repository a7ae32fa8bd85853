use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use tango_config::Config;
use tango_core::loader::load_pairs;
use tango_core::printer::print_aligned;
use tango_core::sampler::sample;


/// Print a random selection of word pairs from the configured word list.
#[derive(Parser)]
#[command(name = "tango", version)]
struct Cli {
    /// Config file to use instead of <home>/english/config.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How many pairs to print (overrides the configured count)
    #[arg(short = 'n', long)]
    count: Option<i64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    if let Err(e) = run(&cli, &mut stdout.lock()) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::resolve(),
    }
    .context("config error")?;

    let pairs = load_pairs(&config.word_file).context("word file error")?;
    if pairs.is_empty() {
        bail!("no word pairs found");
    }

    let count = cli.count.unwrap_or(config.count);
    let total = pairs.len();

    let mut rng = StdRng::seed_from_u64(clock_seed());
    let selected = sample(pairs, count, &mut rng);
    tracing::debug!("printing {} of {total} pairs", selected.len());

    print_aligned(&selected, out)?;

    Ok(())
}

/// Best-effort time seed; quiz selection does not need reproducibility.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
