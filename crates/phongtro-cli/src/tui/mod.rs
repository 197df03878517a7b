//! Interactive landlord inbox.

mod app;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::event::{Event, KeyEventKind};
use crossterm::{
    execute, terminal,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use phongtro_sdk::Client;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::time::Duration;

pub fn run_inbox(client: &Client) -> Result<()> {
    let mut app = App::new(client);
    app.refresh();

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, &app))?;

        if crossterm::event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = crossterm::event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.on_key(key);
        }
    }

    Ok(())
}

/// Enter alternate screen so we don't mess up the user's shell history;
/// restore terminal state on drop even when a handler errors out.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        execute!(io::stdout(), EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}
