//! Wordle Game - CLI
//!
//! Guess a 5 to 8 letter word in word length + 1 tries.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    cli::Cli,
    commands::run_play,
    config::Settings,
    interactive::{App, run_tui},
    output::RenderStyle,
};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are not failures
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            // Nothing more to report if stderr itself is gone
            err.print().ok();
            return ExitCode::FAILURE;
        }
    };

    init_tracing();

    let mut settings = cli.into_settings();
    settings.style = settings
        .style
        .resolve(colored::control::SHOULD_COLORIZE.should_colorize());
    if settings.style == RenderStyle::Plain {
        colored::control::set_override(false);
    }

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never land on the board; quiet unless RUST_LOG is set
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(settings: &Settings) -> Result<()> {
    if settings.tui {
        run_tui_command(settings)
    } else {
        run_play(settings).map(|_| ())
    }
}

/// Open the TUI on a game of the requested size; the menu switches sizes
fn run_tui_command(settings: &Settings) -> Result<()> {
    let mut app = App::new(settings.words_dir.clone(), settings.rng(), settings.strict);
    app.select_size(settings.size)
        .with_context(|| format!("loading {}", settings.word_list_path().display()))?;
    run_tui(app)
}
