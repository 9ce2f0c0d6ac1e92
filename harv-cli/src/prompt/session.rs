use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};

use super::{PromptError, PromptWidget, Transition};

/// Scoped raw-mode session owning an inline live area at the bottom of the
/// terminal scrollback. Raw mode is released on drop, whatever the exit
/// path, so a cancelled or failing prompt never leaves the terminal broken.
struct TerminalSession {
    rows_drawn: usize,
}

impl TerminalSession {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { rows_drawn: 0 })
    }

    /// Erase the previously drawn area and reprint `lines`.
    /// In raw mode every `\n` needs an accompanying `\r`.
    fn redraw(&mut self, lines: &[String]) -> io::Result<()> {
        let mut stdout = io::stdout();
        self.erase(&mut stdout)?;
        for line in lines {
            execute!(stdout, Print(line), Print("\r\n"))?;
        }
        stdout.flush()?;
        self.rows_drawn = lines.len();
        Ok(())
    }

    /// Move the cursor up to the top of the live area and clear everything
    /// below it.
    fn erase(&mut self, stdout: &mut io::Stdout) -> io::Result<()> {
        if self.rows_drawn == 0 {
            return Ok(());
        }
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            cursor::MoveUp(self.rows_drawn as u16),
            Clear(ClearType::FromCursorDown)
        )?;
        self.rows_drawn = 0;
        Ok(())
    }

    /// A resize reflows the scrollback under us; forget the old area rather
    /// than erase the wrong rows.
    fn invalidate(&mut self) {
        self.rows_drawn = 0;
    }

    fn finish(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        self.erase(&mut stdout)?;
        stdout.flush()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Drive `widget` to a terminal outcome: blocking key reads, one redraw per
/// state change, raw mode scoped to this call.
pub(crate) fn run<W: PromptWidget>(mut widget: W) -> Result<W::Output, PromptError> {
    let mut session = TerminalSession::new()?;
    session.redraw(&widget.lines())?;

    loop {
        let key = match event::read()? {
            Event::Key(key) => key,
            Event::Resize(_, _) => {
                session.invalidate();
                session.redraw(&widget.lines())?;
                continue;
            }
            _ => continue,
        };

        match widget.handle_key(key) {
            Transition::Continue => session.redraw(&widget.lines())?,
            Transition::Accept(value) => {
                session.finish()?;
                return Ok(value);
            }
            Transition::Cancel => {
                session.finish()?;
                return Err(PromptError::Cancelled);
            }
        }
    }
}
