//! Play a game by "voice": each input line is treated as one transcript.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use voice_chess::config::{ColorChoice, Config};
use voice_chess::core::Side;
use voice_chess::resolve::GameState;
use voice_chess::rules::StandardChess;
use voice_chess::session::{
    ConsoleListener, ConsoleSpeaker, Listener, RandomOpponent, ScriptListener, Session,
    SessionConfig, SessionEnd,
};
use voice_chess::speech::Normalizer;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorArg {
    White,
    Black,
}

#[derive(Debug, Parser)]
#[command(name = "voice_chess", about = "Play chess against the computer by voice")]
struct Cli {
    /// Config file (default: the platform config dir, `voice-chess/config.toml`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side you play
    #[arg(long, value_enum)]
    color: Option<ColorArg>,

    /// Seed the opponent for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Replay transcripts from a file, one utterance per line, instead of reading stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Start from this FEN instead of the standard position
    #[arg(long)]
    fen: Option<String>,

    /// Print the board after every move
    #[arg(long)]
    board: bool,

    /// Fixed opponent think time in milliseconds
    #[arg(long)]
    think_ms: Option<u64>,

    /// Log filter, e.g. `info` or `voice_chess=debug` (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path)?,
            None => Config::default(),
        },
    };

    if let Some(color) = cli.color {
        config.game.user_color = match color {
            ColorArg::White => ColorChoice::White,
            ColorArg::Black => ColorChoice::Black,
        };
    }
    if cli.seed.is_some() {
        config.opponent.seed = cli.seed;
    }
    if let Some(ms) = cli.think_ms {
        config.game.think_time_ms = [ms, ms];
    }
    if cli.board {
        config.display.show_board = true;
    }
    if cli.log_level.is_some() {
        config.log.level = cli.log_level.clone();
    }
    Ok(config)
}

fn play<L: Listener>(listener: L, config: &Config, fen: Option<&str>) -> anyhow::Result<SessionEnd> {
    let engine = match fen {
        Some(fen) => StandardChess::from_fen(fen)?,
        None => StandardChess::new(),
    };
    let user = Side::from(config.game.user_color);
    let state = GameState::new(engine, user);
    let speaker = ConsoleSpeaker::new(io::stdout());
    let opponent = RandomOpponent::new(config.opponent.seed);

    let mut session = Session::new(state, listener, speaker, opponent)
        .with_config(SessionConfig::from(config))
        .with_normalizer(Normalizer::new(config.speech.corrections.clone()));
    Ok(session.run())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli).context("loading configuration")?;
    init_logging(config.log.level.as_deref());
    tracing::debug!(?config, "starting");

    let end = match &cli.script {
        Some(path) => {
            let listener = ScriptListener::from_file(path)
                .with_context(|| format!("loading script {}", path.display()))?;
            // Scripts run unattended.
            let mut config = config.clone();
            config.game.think_time_ms = [0, 0];
            play(listener, &config, cli.fen.as_deref())?
        }
        None => {
            let stdin = io::stdin();
            play(ConsoleListener::new(stdin.lock()), &config, cli.fen.as_deref())?
        }
    };

    if let SessionEnd::GameOver(outcome) = end {
        if let Some(winner) = outcome.winner() {
            tracing::info!(%winner, "game won");
        }
    }
    Ok(())
}
