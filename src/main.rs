// ABOUTME: Main entry point for aristo-setup with TUI and CLI support
//
// Binary: aristo-setup
// Usage: aristo-setup [COMMAND]
// - No command: runs the setup wizard
// - catalog: print language, region or demo path lists
// - config: print the effective configuration

#![allow(missing_docs)]

use anyhow::{Context, Result};
use aristo_setup::app::{App, AppEvent, EventHandler};
use aristo_setup::cli::{self, Cli, Commands};
use aristo_setup::components::OnboardingComponent;
use aristo_setup::config::AppConfig;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, prelude::*};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};
use tracing::{debug, error, info};

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    let result = match &args.command {
        Some(Commands::Catalog(catalog_args)) => cli::catalog::execute(catalog_args, args.format),
        Some(Commands::Config) => cli::config::execute(&config, args.format),

        // TUI mode (explicit or default)
        Some(Commands::Tui) | None => {
            let mut app = App::new(&config);
            let component = OnboardingComponent::new();

            // Flush any pending terminal events so stray keypresses do not
            // land in the first input
            while event::poll(Duration::from_millis(10)).unwrap_or(false) {
                let _ = event::read();
            }

            match run_tui(&mut app, &component, &config).await {
                Ok(()) => print_completion(&mut app, &args),
                Err(e) => Err(e),
            }
        }
    };

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    result
}

fn print_completion(app: &mut App, args: &Cli) -> Result<()> {
    match app.take_completion() {
        Some(payload) => {
            let output = cli::output::format_completion(&payload, args.format, args.show_password)?;
            println!("{output}");
        }
        None => {
            info!("wizard closed before completion");
            eprintln!("Setup cancelled.");
        }
    }
    Ok(())
}

async fn run_tui(app: &mut App, component: &OnboardingComponent, config: &AppConfig) -> Result<()> {
    // Check if we have a proper TTY
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    crossterm::terminal::is_raw_mode_enabled().context("Terminal not compatible")?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Ensure terminal cleanup happens even if there's an error
    let result = run_tui_loop(app, component, config, &mut terminal).await;

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

#[allow(clippy::unused_async)] // Async for consistency with the tokio entry point
async fn run_tui_loop(
    app: &mut App,
    component: &OnboardingComponent,
    config: &AppConfig,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_rate = config.ui.tick_rate();
    let startup_guard = config.ui.startup_guard();
    let startup_time = Instant::now();
    let mut last_tick = Instant::now();

    info!(tick_rate_ms = config.ui.tick_rate_ms, "setup wizard started");

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            component.render(frame, area, &mut app.state);
        })?;

        // Wake up early when a deferred dropdown close falls due
        let mut timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));
        if let Some(deadline) = app.next_deadline() {
            timeout = timeout.min(deadline.saturating_duration_since(Instant::now()));
        }

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) => {
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    // Startup guard: Ignore key events during startup period
                    if startup_time.elapsed() < startup_guard {
                        debug!(
                            "Ignoring key event {:?} during startup guard period",
                            key_event.code
                        );
                        continue;
                    }

                    if let Some(app_event) = EventHandler::handle_key_event(key_event, &mut app.state) {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                }
                Event::Mouse(mouse_event) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
                        let click = AppEvent::MouseClick {
                            x: mouse_event.column,
                            y: mouse_event.row,
                        };
                        if let Some(app_event) = EventHandler::handle_mouse_event(click, &mut app.state) {
                            EventHandler::process_event(app_event, &mut app.state);
                        }
                    }
                }
                Event::Resize(_, _) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }

        app.tick(Instant::now());

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.state.should_quit {
            break;
        }
    }

    Ok(())
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use std::path::PathBuf;
    use tracing_subscriber::fmt::writer::BoxMakeWriter;
    use tracing_subscriber::prelude::*;

    // Create log directory if it doesn't exist
    let log_dir = dirs::home_dir()
        .map(|home| home.join(".aristo").join("logs"))
        .unwrap_or_else(|| PathBuf::from(".aristo/logs"));

    let _ = std::fs::create_dir_all(&log_dir);

    // Create JSONL log file with timestamp
    let log_file = log_dir.join(format!(
        "aristo-setup-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    // Logging must never draw over the TUI, so an unwritable log file
    // silently disables it
    let writer = match OpenOptions::new().create(true).append(true).open(&log_file) {
        Ok(file) => BoxMakeWriter::new(file),
        Err(_) => BoxMakeWriter::new(io::sink),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()             // Output in JSON Lines format
                .with_target(true)  // Include target module in JSON
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aristo_setup=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
