//! Terminal width queries.

use std::io;

use terminal_size::{terminal_size, terminal_size_of, Width};

/// Something that knows how wide the output terminal is.
///
/// Queried on every render so the bar follows window resizes.
pub trait TerminalProbe: Send {
    /// Current width in columns, or `None` when there is no terminal.
    fn width(&self) -> Option<usize>;
}

/// The terminal attached to this process.
///
/// Asks stdout first, then stderr, so redirecting ffmpeg's output to a file
/// still leaves a width for the status line.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveTerminal;

impl TerminalProbe for LiveTerminal {
    fn width(&self) -> Option<usize> {
        terminal_size()
            .or_else(|| terminal_size_of(io::stderr()))
            .map(|(Width(w), _)| w as usize)
    }
}

/// A terminal of fixed width, or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub Option<usize>);

impl TerminalProbe for FixedWidth {
    fn width(&self) -> Option<usize> {
        self.0
    }
}
