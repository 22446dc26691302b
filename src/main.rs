use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event;
use grid_snake::app::App;
use grid_snake::config::{DEFAULT_GRID, FRAME_POLL_MS};
use grid_snake::error::AppError;
use grid_snake::game::GameState;
use grid_snake::logging::{self, LogLevel};
use grid_snake::renderer;
use grid_snake::settings::{self, Overrides, Settings};
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use log::info;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for food placement, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity.
    #[arg(long = "log-level", value_enum)]
    log_level: Option<LogLevel>,

    /// Settings file to read instead of the default location.
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let settings = resolve_settings(&cli)?;
    let log_path = settings
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_path);
    logging::init(&log_path, settings.log_level)?;
    info!("starting grid-snake {}", env!("CARGO_PKG_VERSION"));

    let state = match settings.seed {
        Some(seed) => GameState::new_with_seed(DEFAULT_GRID, seed),
        None => GameState::new(DEFAULT_GRID),
    };
    let mut app = App::new(state);

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    game_loop(&mut session, &mut app)?;
    drop(session);

    info!("exiting with score {}", app.state().score);
    Ok(())
}

fn resolve_settings(cli: &Cli) -> Result<Settings, AppError> {
    let path = cli.settings.clone().unwrap_or_else(settings::settings_path);
    let file_settings = settings::load_settings(&path)?;

    Ok(file_settings.with_overrides(Overrides {
        log_file: cli.log_file.clone(),
        log_level: cli.log_level,
        seed: cli.seed,
    }))
}

fn game_loop(session: &mut TerminalSession, app: &mut App) -> Result<(), AppError> {
    let poll_timeout = Duration::from_millis(FRAME_POLL_MS);

    loop {
        let mut layout = None;
        session
            .terminal_mut()
            .draw(|frame| layout = Some(renderer::render(frame, app)))?;
        if let Some(layout) = layout {
            app.set_layout(layout);
        }

        if event::poll(poll_timeout)? {
            app.handle_event(event::read()?, Instant::now());
        }

        if app.should_quit() {
            break;
        }

        app.on_frame(Instant::now());
    }

    Ok(())
}
