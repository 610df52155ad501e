use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute,
        SetBackgroundColor, SetForegroundColor,
    },
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
    },
};

use crate::particles::SwirlError;

use super::{Canvas, Frame, Style};

/// Large enough to hold a busy frame without intermediate flushes.
const OUTPUT_BUFFER_SIZE: usize = 1 << 16;

/// Writes frames to a terminal, only emitting the cells which changed since
/// the previous frame.
pub struct Presenter<W: Write> {
    out: W,
    shown: Frame,
    needs_clear: bool,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            shown: Frame::new(0, 0),
            needs_clear: true,
        }
    }

    /// Forget what is on screen. The next presented frame starts by clearing
    /// the terminal and then draws every non-blank cell.
    pub fn invalidate(&mut self) {
        self.needs_clear = true;
    }

    /// Bring the terminal up to date with `frame`.
    ///
    /// Returns the number of cells which were written.
    pub fn present(&mut self, frame: &Frame) -> io::Result<usize> {
        if self.needs_clear || self.shown.size() != frame.size() {
            queue!(
                self.out,
                SetAttribute(Attribute::Reset),
                ResetColor,
                Clear(ClearType::All)
            )?;
            self.shown = Frame::new(frame.cols(), frame.rows());
            self.needs_clear = false;
        }

        let mut written = 0;
        let mut pen: Option<Style> = None;
        let mut cursor: Option<(u16, u16)> = None;
        for ((x, y, cell), (_, _, shown)) in
            frame.cells().zip(self.shown.cells())
        {
            if cell == shown {
                continue;
            }
            if cursor != Some((x, y)) {
                queue!(self.out, cursor::MoveTo(x, y))?;
            }
            if pen != Some(cell.style) {
                queue_style(&mut self.out, &cell.style)?;
                pen = Some(cell.style);
            }
            queue!(self.out, Print(cell.glyph))?;
            cursor = Some((x.saturating_add(1), y));
            written += 1;
        }

        if pen.is_some() {
            queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)?;
        }
        self.out.flush()?;
        self.shown.copy_from(frame);
        Ok(written)
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }
}

fn queue_style(out: &mut impl Write, style: &Style) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(style.foreground.unwrap_or(Color::Reset)),
        SetBackgroundColor(style.background.unwrap_or(Color::Reset))
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.blink {
        queue!(out, SetAttribute(Attribute::SlowBlink))?;
    }
    Ok(())
}

/// The attached terminal, in raw mode on the alternate screen.
///
/// The terminal is restored when this value is dropped, including when the
/// application exits with an error.
pub struct Terminal {
    presenter: Presenter<BufWriter<Stdout>>,
    active: bool,
}

impl Terminal {
    /// Switch the terminal into raw mode, enter the alternate screen, and
    /// hide the cursor.
    pub fn enter() -> Result<Self, SwirlError> {
        terminal::enable_raw_mode()?;
        let raw_mode = scopeguard::guard((), |_| {
            let _ = terminal::disable_raw_mode();
        });

        let mut out =
            BufWriter::with_capacity(OUTPUT_BUFFER_SIZE, io::stdout());
        execute!(
            out,
            EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )?;

        scopeguard::ScopeGuard::into_inner(raw_mode);
        log::debug!("Entered raw mode on the alternate screen");

        Ok(Self {
            presenter: Presenter::new(out),
            active: true,
        })
    }

    /// The terminal's current size as (columns, rows).
    pub fn size(&self) -> Result<(u16, u16), SwirlError> {
        Ok(terminal::size()?)
    }

    /// Clear the screen before the next frame is presented.
    pub fn invalidate(&mut self) {
        self.presenter.invalidate();
    }

    pub fn present(&mut self, frame: &Frame) -> Result<usize, SwirlError> {
        Ok(self.presenter.present(frame)?)
    }

    /// Leave the alternate screen and restore the terminal's previous mode.
    /// Calling this more than once does nothing.
    pub fn restore(&mut self) -> Result<(), SwirlError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let out = self.presenter.writer_mut();
        let screen = execute!(
            out,
            SetAttribute(Attribute::Reset),
            ResetColor,
            cursor::Show,
            LeaveAlternateScreen
        );
        let raw_mode = terminal::disable_raw_mode();
        screen?;
        raw_mode?;

        log::debug!("Restored the terminal");
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            log::error!("Unable to restore the terminal {:?}", err);
        }
    }
}
