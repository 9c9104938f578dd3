//! Jeopardy Board - CLI
//!
//! Trivia board with TUI and text modes, backed by a remote trivia API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use jeopardy::{
    commands::{lookup_category, pick_category_ids, run_simple},
    config::{Config, DEFAULT_BASE_URL, DEFAULT_MAX_ID},
    core::CategoryId,
    game::Game,
    output::{print_category, print_ids},
};
use std::fs::OpenOptions;
use std::time::Duration;
use tokio::runtime::Runtime;

#[derive(Parser)]
#[command(
    name = "jeopardy",
    about = "Jeopardy board in your terminal, backed by a remote trivia API",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root URL of the trivia API
    #[arg(long, global = true, env = "JEOPARDY_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Category ids are drawn from 1..=MAX_ID
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ID)]
    max_id: u32,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 10)]
    timeout_secs: u64,

    /// Seed for category selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Play with the bundled categories instead of the API
    #[arg(long, global = true)]
    offline: bool,

    /// Log file (filter with RUST_LOG)
    #[arg(long, global = true, default_value = "jeopardy.log")]
    log_file: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (reveal clues by typing coordinates)
    Simple,

    /// Fetch one category and print all of its clues
    Category {
        /// Category id on the trivia service
        id: u32,
    },

    /// Print a random selection of category ids
    Ids,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            max_id: self.max_id,
            timeout: Duration::from_secs(self.timeout_secs),
            seed: self.seed,
            offline: self.offline,
        }
    }
}

/// Send logs to a file so they never draw over the TUI
fn init_logging(path: &str) {
    let target: Box<dyn std::io::Write + Send> = match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
    {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(std::io::sink()),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(target))
        .init();
}

fn build_runtime() -> Result<Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file);
    log::info!("Starting jeopardy v{}", env!("CARGO_PKG_VERSION"));

    let result = run(cli);
    if let Err(ref err) = result {
        log::error!("Exited with error: {err:#}");
    }
    result
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    let mut game = Game::from_config(&config)?;
    let runtime = build_runtime()?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(game, runtime),
        Commands::Simple => run_simple(game, &runtime),
        Commands::Category { id } => {
            let id = CategoryId::new(id);
            let category = lookup_category(&game, &runtime, id)?;
            print_category(id, &category);
            Ok(())
        }
        Commands::Ids => {
            print_ids(&pick_category_ids(&mut game)?);
            Ok(())
        }
    }
}

fn run_play_command(game: Game<jeopardy::loader::Source>, runtime: Runtime) -> Result<()> {
    use jeopardy::interactive::{App, run_tui};

    let app = App::new(game, runtime);
    run_tui(app)
}
