//! Terminal session guard
//!
//! The terminal is put into raw mode on the alternate screen exactly once at
//! startup. Dropping the [`Session`] puts it back, on every exit path.

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::panic;

pub struct Session<B: Backend> {
    terminal: Terminal<B>,
    /// Whether dropping this session must restore the controlling terminal.
    owns_tty: bool,
}

impl Session<CrosstermBackend<Stdout>> {
    /// Switch the controlling terminal into raw mode on the alternate screen.
    pub fn acquire() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            restore_terminal();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| {
            restore_terminal();
        })?;
        Ok(Self {
            terminal,
            owns_tty: true,
        })
    }
}

impl<B: Backend> Session<B> {
    /// Wrap an arbitrary backend without touching the controlling terminal.
    #[allow(unused)]
    pub fn with_backend(backend: B) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            owns_tty: false,
        })
    }

    /// Draw one frame. The frame is resized to the terminal first, so
    /// geometry changes are picked up on the next draw.
    pub fn draw<F: FnOnce(&mut Frame)>(&mut self, render: F) -> io::Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    #[allow(unused)]
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Drop for Session<B> {
    fn drop(&mut self) {
        if self.owns_tty {
            restore_terminal();
            let _ = self.terminal.show_cursor();
        }
    }
}

/// Best-effort restore; errors are ignored since there is nowhere to report them.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Restore the terminal before the panic message is printed.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        original_hook(info);
    }));
}
