use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use connect_n::ai::RandomAgent;
use connect_n::config::{AppConfig, FirstPlayer};
use connect_n::match_runner::play_match;
use connect_n::ui::App;
use connect_n::GameConfig;

/// Play Connect-N against a minimax computer opponent.
#[derive(Parser)]
#[command(name = "connect-n", about = "Play Connect-N against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_n.toml")]
    config: PathBuf,

    /// Pieces in a row needed to win (3-6)
    #[arg(short = 'n', long)]
    connect: Option<usize>,

    /// Computer search depth in plies
    #[arg(short, long)]
    depth: Option<u32>,

    /// Let the computer make the first move
    #[arg(long)]
    computer_first: bool,

    /// Play the engine against a random opponent and log results instead of
    /// starting the terminal UI
    #[arg(long)]
    headless: bool,

    /// Override games per colour in headless mode
    #[arg(long)]
    games: Option<usize>,

    /// Seed for the headless random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    init_tracing(if cli.headless { "info" } else { "warn" });

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(connect) = cli.connect {
        app_config.game.connect = connect;
    }
    if let Some(depth) = cli.depth {
        app_config.game.depth = depth;
    }
    if cli.computer_first {
        app_config.game.first = FirstPlayer::Computer;
    }
    if let Some(games) = cli.games {
        app_config.headless.games = games;
    }
    if cli.seed.is_some() {
        app_config.headless.seed = cli.seed;
    }
    app_config.validate().context("invalid settings")?;

    if cli.headless {
        run_headless(&app_config)
    } else {
        let config = app_config.game.to_game_config()?;
        run_tui(config).context("terminal UI failed")
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_headless(app_config: &AppConfig) -> Result<()> {
    let game = &app_config.game;
    let mut opponent = match app_config.headless.seed {
        Some(seed) => RandomAgent::with_seed(seed),
        None => RandomAgent::new(),
    };

    tracing::info!(
        connect = game.connect,
        depth = game.depth,
        games_per_colour = app_config.headless.games,
        "starting headless match against random opponent"
    );
    let summary = play_match(game.connect, game.depth, app_config.headless.games, &mut opponent)?;

    let avg_moves = summary.total_moves as f64 / summary.games().max(1) as f64;
    tracing::info!(
        wins = summary.wins,
        losses = summary.losses,
        draws = summary.draws,
        win_rate = %format!("{:.1}%", summary.win_rate() * 100.0),
        avg_moves = %format!("{avg_moves:.1}"),
        "match finished"
    );
    Ok(())
}

fn run_tui(config: GameConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
