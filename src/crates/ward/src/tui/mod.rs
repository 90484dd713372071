//! Terminal User Interface (TUI) for Ward
//!
//! Provides an interactive multi-panel TUI for browsing the issue map,
//! filtering the issue list, and reporting new issues.

pub mod app;
pub mod detail;
pub mod forms;
pub mod handler;
pub mod map;
pub mod ui;

pub use app::{App, AppState, View};
pub use handler::InputHandler;
pub use ui::render_ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the interactive TUI
pub async fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initial draw
    terminal.draw(|f| {
        ui::render_ui(f, app);
    })?;

    let handler = InputHandler::new();

    // Main event loop
    loop {
        // Set timeout for event polling
        let timeout = Duration::from_millis(100);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) => handler.handle_key_event(app, key_event),
                Event::Mouse(mouse_event) => handler.handle_mouse_event(app, mouse_event),
                _ => {}
            }
        }

        // Pending submissions complete on the timer, not on input
        app.tick();

        if app.state.should_quit {
            break;
        }

        // Redraw
        terminal.draw(|f| {
            ui::render_ui(f, app);
        })?;
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
