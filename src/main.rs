use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use trivia::bank::{QuestionBank, loader};
use trivia::banner::{BannerInfo, print_banner, print_farewell};
use trivia::commands::{CommandRegistry, CommandResult, GameInfo, parse_answer};
use trivia::config::GameConfig;
use trivia::consts::default_bank_path;
use trivia::game::Game;
use trivia::logging;
use trivia::render::{self, terminal::TerminalRenderer};

#[derive(Parser)]
#[command(name = "trivia", version, about = "A freight-train trivia quiz.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Question bank (JSON). Defaults to ~/.trivia/questions.json, then the built-in set
    #[arg(short, long)]
    bank: Option<PathBuf>,

    /// Questions drawn per game
    #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    questions: Option<usize>,

    /// Pause after each answer, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Fix the question shuffle (same seed, same games)
    #[arg(long)]
    seed: Option<u64>,

    /// Log game transitions to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a question bank file and exit
    Check {
        /// Path to the JSON bank
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Some(Command::Check { path }) = &cli.command {
        return handle_check(path);
    }

    let (bank, bank_label) = load_bank(cli.bank.as_deref())?;

    let mut config = GameConfig::from_env();
    if let Some(questions) = cli.questions {
        config.questions_per_game = questions;
    }
    if let Some(ms) = cli.delay_ms {
        config.advance_delay = Duration::from_millis(ms);
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    print_banner(&BannerInfo {
        bank: &bank_label,
        bank_size: bank.len(),
        questions_per_game: config.questions_per_game,
        advance_delay: config.advance_delay,
    });

    let game = Game::new(bank, &config);
    let renderer = render::attach(game.subscribe(), Arc::new(TerminalRenderer::new()));
    let commands = CommandRegistry::new();
    let info = GameInfo {
        game: &game,
        bank: &bank_label,
    };

    // async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    println!();
    prompt()?;

    loop {
        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            prompt()?;
            continue;
        }

        // the renderer prints the prompt with every screen it draws
        match commands.dispatch(input, &info).await {
            CommandResult::Quit => break,
            CommandResult::Redrawn => {}
            CommandResult::Handled => prompt()?,
            CommandResult::NotACommand => {
                if !answer(&game, input) {
                    prompt()?;
                }
            }
        }
    }

    renderer.abort();
    print_farewell(game.games_finished());
    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

/// Submit a typed answer. Returns false when nothing was submitted, so no
/// screen is coming.
fn answer(game: &Game, input: &str) -> bool {
    let Some(selected) = parse_answer(input) else {
        eprintln!("  ✗ type an answer number, or /help for commands");
        return false;
    };
    match game.submit_answer(selected) {
        Ok(_) => true,
        Err(e) => {
            eprintln!("  ✗ {e}");
            false
        }
    }
}

/// Explicit path, else `~/.trivia/questions.json` if present, else the
/// built-in set.
fn load_bank(path: Option<&Path>) -> anyhow::Result<(QuestionBank, String)> {
    if let Some(path) = path {
        return Ok((loader::load(path)?, path.display().to_string()));
    }
    if let Some(path) = default_bank_path().filter(|p| p.exists()) {
        return Ok((loader::load(&path)?, path.display().to_string()));
    }
    Ok((loader::builtin()?, "built-in".to_string()))
}

fn handle_check(path: &Path) -> anyhow::Result<()> {
    let bank = loader::load(path)?;
    let images = bank.records().iter().filter(|r| r.image.is_some()).count();
    println!(
        "✓ {}: {} questions ({} with images)",
        path.display(),
        bank.len(),
        images
    );
    Ok(())
}
