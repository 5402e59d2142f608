use serp_studio::app::{App, AppMessage};
use serp_studio::cli::{config_report, parse_args, run_cli_command};
use serp_studio::config::StudioConfig;
use serp_studio::logging::{init_logging, LogTarget};
use serp_studio::studio::Studio;
use serp_studio::terminal::{setup_panic_hook, TerminalManager};
use serp_studio::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Redraw/animation tick.
const TICK: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());

    if !command.is_interactive() {
        if let Err(e) = init_logging(LogTarget::Stderr) {
            eprintln!("serp-studio: logging disabled: {}", e);
        }
        if let Some(result) = run_cli_command(command, StudioConfig::from_env).await {
            std::process::exit(if result? { 0 } else { 1 });
        }
        return Ok(());
    }

    let config = StudioConfig::from_env().map_err(config_report)?;

    // The TUI owns the screen, so logs go to a file
    if let Err(e) = init_logging(LogTarget::File(&config.log_path())) {
        eprintln!("serp-studio: logging disabled: {}", e);
    }
    tracing::info!(endpoint = %config.endpoint, "Starting serp-studio");

    setup_panic_hook();
    let mut term_manager = TerminalManager::new()?;
    let mut app = App::new(Studio::from_config(&config));

    let result = run_app(term_manager.terminal(), &mut app).await;

    term_manager.restore()?;
    if let Err(ref e) = result {
        tracing::error!("Event loop failed: {}", e);
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick(Instant::now());
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
