// Long Way To The Top: run map CLI.
//
// Developer tool for inspecting generated run maps. Loads a song catalog
// (the embedded one by default), builds the run for a seed, and prints
// either an ASCII map per act or the whole run as JSON for renderers.
//
// Usage:
//   cargo run -p longway_cli -- [--seed N] [--act N] [--json] [--boss-top]
//     [--challenges] [--catalog songs.json] [--config map.json] [--debug]
//
// Without `--seed` the seed is taken from the clock and printed, so any map
// seen once can be regenerated.

mod render;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{LevelFilter, debug};
use longway_catalog::{Catalog, default_catalog};
use longway_map::{Act, MapConfig, RunGenerator};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Print Long Way To The Top run maps.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
struct Args {
    /// Run seed (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Only print this act (1-based)
    #[arg(short, long)]
    act: Option<usize>,

    /// Print the run as JSON instead of ASCII maps
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Draw the boss row at the top
    #[arg(short, long, default_value_t = false)]
    boss_top: bool,

    /// List every node's challenge under its map
    #[arg(short = 'c', long, default_value_t = false)]
    challenges: bool,

    /// Song catalog JSON file
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Map config JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if let Some(level) = log_override(args.debug) {
        logger.filter_level(level);
    }
    logger.init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// `--debug` wins over `RUST_LOG`; otherwise the environment decides.
fn log_override(debug: bool) -> Option<LevelFilter> {
    debug.then_some(LevelFilter::Debug)
}

fn run(args: &Args) -> Result<()> {
    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => default_catalog(),
    };
    debug!("catalog: {} songs", catalog.len());

    let config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read config {}", path.display()))?;
            MapConfig::from_json(&json)?
        }
        None => MapConfig::default(),
    };

    let generator = RunGenerator::new(&catalog, config)?;
    debug!(
        "config: {} acts of {} rows, {}..={} nodes per row",
        generator.config().total_acts,
        generator.config().rows_per_act,
        generator.config().min_nodes_per_row,
        generator.config().max_nodes_per_row
    );
    let seed = args.seed.unwrap_or_else(clock_seed);
    let run = generator.generate(seed);

    let acts: Vec<&Act> = match args.act {
        Some(index) => match run.act(index) {
            Some(act) => vec![act],
            None => bail!("act {index} does not exist (run has {})", run.acts.len()),
        },
        None => run.acts.iter().collect(),
    };

    if args.json {
        let text = if args.act.is_some() {
            serde_json::to_string_pretty(&acts)?
        } else {
            serde_json::to_string_pretty(&run)?
        };
        println!("{text}");
        return Ok(());
    }

    println!("Seed: {seed}");
    for act in acts {
        println!();
        print!("{}", render::render_act(act, args.boss_top));
        if args.challenges {
            print_challenges(act);
        }
    }
    Ok(())
}

fn print_challenges(act: &Act) {
    for (r, row) in act.rows.iter().enumerate() {
        for node in row {
            let titles: Vec<&str> = node
                .challenge
                .songs
                .iter()
                .map(|s| s.title.as_str())
                .collect();
            println!(
                "  [{r},{}] {}: {} ({})",
                node.col,
                node.challenge.name,
                node.challenge.summary,
                titles.join(", ")
            );
        }
    }
}

/// Seed from the wall clock, for runs nobody asked to reproduce yet.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(0)
}
