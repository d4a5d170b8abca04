mod api;
mod config;
mod controller;
mod data;
mod logging;
mod model;
mod timer;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::AppConfig;
use controller::AppController;
use model::AppModel;
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load();

    if let Err(e) = logging::init_logging(&config.log_dir) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== NiaTunes Starting ===");
    config.report();

    let model = Arc::new(AppModel::new(&config));
    model.restore_sessions().await;

    if let Err(e) = model.load_home().await {
        tracing::error!(error = %e, "Could not load the home page");
        model.set_error(format!("Could not load home: {}", e)).await;
    }

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let controller = AppController::new(model.clone());
    let res = run_app(&mut terminal, model.clone(), controller).await;

    // Nothing stays on air once the app is gone
    model.end_active_stream().await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("NiaTunes shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<AppModel>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        // Auto-clear old errors (after 5 seconds)
        model.auto_clear_old_errors().await;

        let snapshot = model.snapshot().await;
        terminal.draw(|f| AppView::render(f, &snapshot))?;

        // Short poll keeps the playback clock and live counters moving on screen
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }

        if model.should_quit().await {
            break;
        }
    }

    Ok(())
}
