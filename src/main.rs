//! signup-tui - terminal registration form
//!
//! A Ratatui front end for the registration form engine: live field
//! validation, password strength and a simulated sign-up.

mod app;
mod platform;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use signup_tui::account::SimulatedAccountService;
use signup_tui::config::AppConfig;
use signup_tui::submission::SubmissionEvent;
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "signup-tui.log";

#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    // The terminal belongs to the UI, so logs go to a file
    tracing_subscriber::registry()
        .with(env_filter(&config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer()),
        )
        .init();

    if let Some(err) = config_error {
        tracing::warn!("Ignoring unreadable config, using defaults: {err:#}");
    }

    let service = Arc::new(SimulatedAccountService::new(config.submit_delay()));
    let (mut app, mut events) = App::new(&config, service);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("signup-tui started");
    let result = run_app(&mut terminal, &mut app, &mut events).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("Exited with error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    remember_password_visibility(&config, &app);
    tracing::info!("signup-tui exited");
    Ok(())
}

/// Persist the last Ctrl+P choice as the new masking default
fn remember_password_visibility(config: &AppConfig, app: &App) {
    let mask = !app.show_passwords;
    if mask == config.mask_passwords() {
        return;
    }
    let updated = AppConfig {
        mask_passwords: Some(mask),
        ..config.clone()
    };
    if let Err(err) = updated.save() {
        tracing::warn!("Could not save config: {err:#}");
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    config
        .log_filter
        .as_deref()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("signup_tui=info"))
}

/// Append to a log file in the data directory, or discard if there is none
fn log_writer() -> BoxMakeWriter {
    let file = AppConfig::project_dirs().and_then(|dirs| {
        let dir = dirs.data_dir();
        fs::create_dir_all(dir).ok()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))
            .ok()
    });
    match file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(io::sink),
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut UnboundedReceiver<SubmissionEvent>,
) -> Result<()> {
    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while the progress gauge or banner is live (16ms = ~60fps)
        let poll_duration = if app.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
                        app.quit();
                    } else {
                        app.handle_key(key)?;
                    }
                }
                Event::Resize(_width, _height) => {
                    // Layout is recalculated on next draw
                }
                _ => {}
            }
        }

        // Deferred submission transitions
        while let Ok(event) = events.try_recv() {
            app.handle_submission_event(event);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
