// src/main.rs

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tracing::info;

mod app;
mod config;
mod core;
mod events;
mod headless;
mod logging;
mod ui;

use app::{App, UploadState, View};
use config::{Cli, Command, Settings};
use crate::core::client::{HttpApiClient, PrivGuardApi};
use crate::core::upload::UploadForm;
use events::AppEvent;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli);
    let log_path = logging::initialize_logging()?;
    info!(server = %settings.server, log = %log_path.display(), "Starting privguard-console.");

    let api: Arc<dyn PrivGuardApi> = Arc::new(HttpApiClient::new(&settings)?);

    match cli.command.clone().unwrap_or(Command::Tui) {
        Command::Tui => run_tui(api, settings).await,
        Command::Analyze { file } => {
            headless::run_analyze(api.as_ref(), UploadForm::new(file, settings.extra_fields)).await
        }
        Command::Dashboard { once } => headless::run_dashboard(api, settings.poll_interval, once).await,
    }
}

async fn run_tui(api: Arc<dyn PrivGuardApi>, settings: Settings) -> Result<()> {
    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;

    let outcome = event_loop(api, settings).await;

    // --- Restore Terminal ---
    // Runs on the error path too, so a failed draw never leaves the shell in raw mode.
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    outcome
}

async fn event_loop(api: Arc<dyn PrivGuardApi>, settings: Settings) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new(settings.extra_fields.clone());
    let (tx, mut rx) = mpsc::channel(16);
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

    let poller = tokio::spawn(core::poller::dashboard_poller_task(
        Arc::clone(&api),
        tx.clone(),
        shutdown_rx,
        settings.poll_interval,
    ));

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &api, &tx)?;
        }

        while let Ok(event) = rx.try_recv() {
            app.apply_event(event);
        }
        app.on_tick();
    }

    let _ = shutdown_tx.send(());
    poller.await?;
    Ok(())
}

/// Single entry point for terminal events.
fn handle_events(app: &mut App, api: &Arc<dyn PrivGuardApi>, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.quit();
                return Ok(());
            }
            match app.view {
                View::Dashboard => handle_dashboard_input(app, key),
                View::Upload => handle_upload_input(app, key, api, tx),
            }
        }
    }
    Ok(())
}

fn handle_dashboard_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Tab => app.next_view(),
        _ => {}
    }
}

fn handle_upload_input(app: &mut App, key: KeyEvent, api: &Arc<dyn PrivGuardApi>, tx: &mpsc::Sender<AppEvent>) {
    match app.upload_state {
        UploadState::Idle | UploadState::Failed(_) => match key.code {
            KeyCode::Esc => app.quit(),
            KeyCode::Tab => app.next_view(),
            KeyCode::Char(c) => app.input.push(c),
            KeyCode::Backspace => {
                app.input.pop();
            }
            KeyCode::Enter => {
                if let Some(form) = app.begin_upload() {
                    info!(file = %form.file.display(), "Upload submitted.");
                    core::uploader::spawn_submission(Arc::clone(api), form, tx.clone());
                }
            }
            _ => {}
        },
        UploadState::Uploading => match key.code {
            KeyCode::Esc => app.quit(),
            KeyCode::Tab => app.next_view(),
            _ => {}
        },
        UploadState::Finished => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.quit(),
            KeyCode::Char('n') => app.reset(),
            KeyCode::Char('e') => app.export_analysis(&logging::get_export_dir()),
            KeyCode::Tab => app.next_view(),
            KeyCode::Up => app.select_previous(),
            KeyCode::Down => app.select_next(),
            _ => {}
        },
    }
}
