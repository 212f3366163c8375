//! Terminal front end: interactive play with suggestions, or one-shot analysis.

mod input;
mod render;
mod session;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gridblast_core::Position;
use gridblast_engine::{Dealer, Game, ScoreRules};
use gridblast_eval::EvalWeights;
use gridblast_search::SequenceSearch;
use session::Session;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// JSON file with evaluation weights; missing fields keep their defaults
    #[arg(long, global = true)]
    weights: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play in the terminal
    Play {
        /// Seed for the piece dealer; random when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Do not show the suggested sequence each turn
        #[arg(long)]
        no_hints: bool,
    },
    /// Print the best move sequence for a saved position
    Suggest {
        /// Position JSON: {"grid": [8 row bytes], "pieces": [{"shape": [[r, c], ...], "placed": false}]}
        position: PathBuf,

        /// Emit the sequence as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(args) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let weights = load_weights(args.weights.as_deref())?;
    let search = SequenceSearch::new(weights);

    match args.command {
        Command::Play { seed, no_hints } => play(&search, seed, no_hints),
        Command::Suggest { position, json } => suggest(&search, &position, json),
    }
}

fn load_weights(path: Option<&Path>) -> Result<EvalWeights> {
    let Some(path) = path else {
        return Ok(EvalWeights::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading weights from {}", path.display()))?;
    let weights: EvalWeights = serde_json::from_str(&text)
        .with_context(|| format!("parsing weights in {}", path.display()))?;
    log::info!("loaded weights from {}: {:?}", path.display(), weights);
    Ok(weights)
}

fn play(search: &SequenceSearch, seed: Option<u64>, no_hints: bool) -> Result<()> {
    let dealer = match seed {
        Some(seed) => {
            log::info!("dealer seed {seed}");
            Dealer::seeded(seed)
        }
        None => Dealer::from_entropy(),
    };

    let mut session = Session {
        game: Game::new(dealer, ScoreRules::classic()),
        hints: (!no_hints).then_some(search),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session
        .run(stdin.lock(), &mut stdout)
        .context("terminal io failed")?;
    Ok(())
}

fn suggest(search: &SequenceSearch, path: &Path, json: bool) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading position from {}", path.display()))?;
    let position: Position = serde_json::from_str(&text)
        .with_context(|| format!("parsing position in {}", path.display()))?;

    let (found, stats) = search.search_with_stats(&position.grid, &position.pieces);
    log::info!(
        "{} permutations, {} nodes, {} leaves, {} dead ends",
        stats.permutations,
        stats.nodes,
        stats.leaves,
        stats.dead_ends
    );

    let mut out = io::stdout().lock();
    if json {
        let sequence = found.as_ref().map(|f| &f.sequence);
        writeln!(out, "{}", serde_json::to_string(&sequence)?)?;
        return Ok(());
    }

    write!(out, "{}", render::board(&position.grid, 0))?;
    write!(out, "{}", render::pieces(&position.pieces))?;
    write!(out, "{}", render::suggestion(found.as_ref().map(|f| &f.sequence)))?;
    if let Some(found) = found {
        writeln!(out, "Evaluation: {}", found.score)?;
    }
    Ok(())
}
