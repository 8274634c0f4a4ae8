use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use party_games::config::{Placement, SnakeRules, WordleRules};
use party_games::core::Word;
use party_games::tui::{self, SnakeExit};
use party_games::wordle::{WordleExit, WordleSession};
use party_games::wordlists::loader;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "party_games")]
#[command(version, about = "Birthday Wordle and Cake Snake in your terminal")]
struct Cli {
    /// Write logs to this file (filter with `RUST_LOG`)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Guess the birthday word
    Wordle(WordleArgs),
    /// Catch cake before the clock runs out
    Snake(SnakeArgs),
}

#[derive(Args)]
struct WordleArgs {
    /// Secret word (default: HAPPY)
    #[arg(long, conflicts_with_all = ["target_file", "random_target"])]
    target: Option<String>,

    /// Pick the secret word at random from a word file (one per line)
    #[arg(long, conflicts_with = "random_target")]
    target_file: Option<PathBuf>,

    /// Pick the secret word at random from the built-in greetings
    #[arg(long)]
    random_target: bool,

    /// Read guesses line by line from stdin instead of the full-screen UI
    #[arg(long)]
    plain: bool,
}

#[derive(Args)]
struct SnakeArgs {
    /// Seed for cake and star placement
    #[arg(long)]
    seed: Option<u64>,

    /// Allow cakes to appear under the snake
    #[arg(long)]
    anywhere: bool,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn choose_target(args: &WordleArgs) -> Result<Word> {
    if let Some(text) = &args.target {
        return Word::new(text).with_context(|| format!("Invalid target word '{text}'"));
    }

    let pool = if let Some(path) = &args.target_file {
        loader::load_targets(path)
            .with_context(|| format!("Failed to read word file {}", path.display()))?
    } else if args.random_target {
        loader::greeting_targets()
    } else {
        return Ok(WordleRules::default().target);
    };

    match loader::pick_target(&pool, &mut rand::rng()) {
        Some(word) => Ok(word),
        None => bail!("No valid 5-letter words to choose from"),
    }
}

fn run_wordle(args: &WordleArgs) -> Result<()> {
    let rules = WordleRules::with_target(choose_target(args)?);

    let exit = if args.plain {
        let mut session = WordleSession::new(rules);
        let stdin = std::io::stdin();
        party_games::plain::play(
            &mut session,
            stdin.lock(),
            std::io::stdout(),
            std::thread::sleep,
        )?
    } else {
        tui::run_wordle(rules)?
    };

    match exit {
        WordleExit::Completed => println!("Happy birthday! Puzzle solved."),
        WordleExit::Quit => {}
    }
    Ok(())
}

fn run_snake(args: &SnakeArgs) -> Result<()> {
    let rules = SnakeRules {
        placement: if args.anywhere {
            Placement::Anywhere
        } else {
            Placement::FreeCell
        },
        ..SnakeRules::default()
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let prize_per_point = rules.prize_per_point;
    match tui::run_snake(rules, rng)? {
        SnakeExit::Finished(score) => println!(
            "Final score: {score} -> +{} VND",
            score.saturating_mul(prize_per_point)
        ),
        SnakeExit::Quit => {}
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    match &cli.command {
        Command::Wordle(args) => run_wordle(args),
        Command::Snake(args) => run_snake(args),
    }
}
