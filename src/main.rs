//! Terminal entry point: logging, terminal setup and the event loop

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use portfolio_tui::app::App;
use portfolio_tui::catalog::Catalog;
use portfolio_tui::config::PortfolioConfig;
use portfolio_tui::contact::{ContactSettings, ContactWorkflow};
use portfolio_tui::mailer::EmailJsClient;
use portfolio_tui::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log to a file in the data directory so output does not corrupt the screen
fn log_writer() -> (BoxMakeWriter, bool) {
    let file = PortfolioConfig::data_dir().and_then(|dir| {
        fs::create_dir_all(&dir).ok()?;
        File::create(dir.join("portfolio-tui.log")).ok()
    });
    match file {
        Some(file) => (BoxMakeWriter::new(Arc::new(file)), false),
        None => (BoxMakeWriter::new(io::stderr), true),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let (writer, ansi) = log_writer();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi),
        )
        .init();

    // Load configuration and content before touching the terminal
    let config = PortfolioConfig::load().context("failed to load configuration")?;
    if !PortfolioConfig::exists() {
        // Leave an editable file with every key on first run
        if let Err(err) = config.save() {
            tracing::warn!("Could not write default configuration: {err}");
        }
    }
    let catalog = Catalog::load(config.catalog_path.as_deref())?;
    let sender = EmailJsClient::new(config.endpoint());
    tracing::info!(endpoint = sender.endpoint(), "Starting portfolio TUI");
    let workflow = ContactWorkflow::new(Arc::new(sender), ContactSettings::from_config(&config));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(catalog, workflow);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Apply any send outcomes that arrived since the last frame
        app.poll_outcomes();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll quickly while a message is in flight so the result shows promptly
        let poll_duration = if app.workflow.is_sending() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Let spawned send tasks make progress between polls
        tokio::task::yield_now().await;

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                app.handle_key(key);
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
