//! The output stream shared by the status line and prompt echoes.

use std::io::{self, Write};

use crate::render::style::{ansi, Palette};
use crate::render::terminal::TerminalProbe;

/// Destination of everything fpb draws.
///
/// Owned by the stream reader, which is the only writer during a run.
pub struct Screen<W: Write> {
    out: W,
    palette: Palette,
    probe: Box<dyn TerminalProbe>,
}

impl<W: Write> Screen<W> {
    /// Wrap `out` with a color palette and a width probe.
    pub fn new(out: W, palette: Palette, probe: Box<dyn TerminalProbe>) -> Self {
        Self {
            out,
            palette,
            probe,
        }
    }

    /// Palette resolved for this stream.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Current terminal width, if any.
    pub fn width(&self) -> Option<usize> {
        self.probe.width()
    }

    /// Overwrite the current line with `line`, leaving the cursor on it.
    pub fn draw_status(&mut self, line: &str) -> io::Result<()> {
        write!(self.out, "\r{}{}", ansi::CLEAR_LINE, line)?;
        self.out.flush()
    }

    /// Move past the status line.
    pub fn newline(&mut self) -> io::Result<()> {
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    /// Show a prompt from the wrapped program.
    pub fn echo_prompt(&mut self, prompt: &str) -> io::Result<()> {
        let text = self.palette.prompt(prompt);
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    /// Write bytes through unchanged.
    pub fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)?;
        self.out.flush()
    }

    /// The underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::terminal::FixedWidth;

    fn screen(palette: Palette) -> Screen<Vec<u8>> {
        Screen::new(Vec::new(), palette, Box::new(FixedWidth(Some(80))))
    }

    #[test]
    fn status_overwrites_line() {
        let mut screen = screen(Palette::plain());
        screen.draw_status("hello").unwrap();
        assert_eq!(screen.get_ref().as_slice(), b"\r\x1b[Khello");
    }

    #[test]
    fn prompt_uses_palette() {
        let mut screen = screen(Palette::decorated());
        screen.echo_prompt("Overwrite? [y/N] ").unwrap();
        let out = String::from_utf8(screen.get_ref().clone()).unwrap();
        assert_eq!(out, "\x1b[93m\x1b[1mOverwrite? [y/N] \x1b[0m");
    }

    #[test]
    fn raw_bytes_pass_unchanged() {
        let mut screen = screen(Palette::decorated());
        screen.write_raw(b"error: \xff\n").unwrap();
        assert_eq!(screen.get_ref().as_slice(), b"error: \xff\n");
    }

    #[test]
    fn width_comes_from_probe() {
        assert_eq!(screen(Palette::plain()).width(), Some(80));
    }
}
