//! gridpad - Terminal Grid Editor
//!
//! A fixed-size numeric grid with keyboard and mouse-driven cell focus,
//! single-cell editing, and persistence to a local file-backed store.

use std::io;
use std::path::PathBuf;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::{App, GridConfig};
use infrastructure::FileStore;
use presentation::{render_ui, InputHandler};

/// Entry point for the gridpad terminal grid editor.
///
/// Sets up the terminal interface, loads the grid from the local store,
/// runs the event loop until the user quits, and performs one final persist
/// on teardown.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues with the
/// terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let store = FileStore::new(PathBuf::from("."));
    let mut app = App::new(GridConfig::default(), Box::new(store));
    let res = run_app(&mut terminal, &mut app);

    // Final persist on teardown, regardless of how many updates preceded it.
    app.persist();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Renders the grid and processes keyboard and mouse input until the user
/// presses 'q' outside of an editing session.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') if !app.is_editing() => return Ok(()),
                _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
            },
            Event::Mouse(mouse) => InputHandler::handle_mouse_event(app, mouse),
            _ => {}
        }
    }
}
