//! Aquaform TUI - terminal lead-capture wizard for water-ionizer consultations
//!
//! A Ratatui-based multi-step wizard that collects a lead record and hands it
//! off to a submission endpoint.

mod app;
mod config;
mod lead;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aquaform_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = TuiConfig::load().unwrap_or_default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
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
        let term_size = terminal.size()?;
        let terminal_height = term_size.height;
        let terminal_width = term_size.width;

        // Measure the viewport and advance the scroll animation
        app.tick(terminal_width);

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Run a submission accepted on the previous pass, now that a frame
        // showing the in-flight state is on screen
        app.process_pending_submit().await;

        // Faster polling while the viewport is animating (16ms = ~60fps),
        // normal polling (100ms) otherwise
        let poll_duration = if app.viewport.is_animating() {
            std::time::Duration::from_millis(16)
        } else {
            std::time::Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key)?;
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse, terminal_width, terminal_height)?;
                }
                Event::Resize(_width, _height) => {
                    // Viewport retargets on the next tick's measurement
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
