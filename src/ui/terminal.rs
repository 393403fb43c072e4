//! Terminal setup and teardown for the game screen.

use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

pub type FlappyTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Run `setup`; if it fails, run `restore` before handing back the error.
pub fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    setup().map_err(|e| {
        restore();
        e
    })
}

/// Enter raw mode and the alternate screen.
///
/// If anything after `enable_raw_mode` fails, the terminal is put back the
/// way it was.
pub fn enter() -> io::Result<FlappyTerminal> {
    enable_raw_mode()?;
    setup_or_restore(
        || {
            let mut stdout = io::stdout();
            stdout.execute(EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = io::stdout().execute(LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )
}

/// Leave raw mode and the alternate screen.
pub fn leave(terminal: &mut FlappyTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores() {
        let restored = Cell::new(false);
        let result: io::Result<()> = setup_or_restore(
            || Err(io::Error::new(io::ErrorKind::Other, "no tty")),
            || restored.set(true),
        );
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_does_not_restore() {
        let restored = Cell::new(false);
        let result = setup_or_restore(|| Ok(5), || restored.set(true));
        assert_eq!(result.unwrap(), 5);
        assert!(!restored.get());
    }
}
