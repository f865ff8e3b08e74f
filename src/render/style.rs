//! Color handling for the status line and prompt echo.
//!
//! Color support is decided once at startup. The result is a [`Palette`]
//! whose codes are either ANSI SGR sequences or empty strings, so the
//! rendering code formats the same way in both modes.

/// ANSI escape sequences used by fpb.
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    /// Erase from the cursor to the end of the line.
    pub const CLEAR_LINE: &str = "\x1b[K";
}

/// Glyph for completed and pending bar cells.
pub const BAR_CELL: char = '━';
/// Glyph at the boundary between completed and pending cells.
pub const BAR_EDGE: char = '╸';

/// Codes applied to each part of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    reset: &'static str,
    bold: &'static str,
    percentage: &'static str,
    rate: &'static str,
    eta: &'static str,
    bar: &'static str,
    prompt: &'static str,
    alert: &'static str,
}

impl Palette {
    /// No escape sequences at all.
    pub const fn plain() -> Self {
        Self {
            reset: "",
            bold: "",
            percentage: "",
            rate: "",
            eta: "",
            bar: "",
            prompt: "",
            alert: "",
        }
    }

    /// Colored output for interactive terminals.
    pub const fn decorated() -> Self {
        Self {
            reset: ansi::RESET,
            bold: ansi::BOLD,
            percentage: ansi::YELLOW,
            rate: ansi::RED,
            eta: ansi::BLUE,
            bar: ansi::GREEN,
            prompt: ansi::BRIGHT_YELLOW,
            alert: ansi::BRIGHT_RED,
        }
    }

    /// Pick a palette for a stream.
    ///
    /// Windows consoles are always plain; elsewhere color requires a tty.
    pub fn for_stream(is_terminal: bool) -> Self {
        if cfg!(windows) || !is_terminal {
            Self::plain()
        } else {
            Self::decorated()
        }
    }

    /// Pick a palette for this process's stderr.
    pub fn detect() -> Self {
        Self::for_stream(atty::is(atty::Stream::Stderr))
    }

    /// Whether any escape sequences are emitted.
    pub fn is_decorated(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Trailing statistics: percentage, ratio, throughput and ETA.
    ///
    /// Throughput reads `fps` whatever the unit, matching ffmpeg's own
    /// status line.
    pub fn info(&self, percentage: f64, current: u64, total: u64, rate: f64, eta: &str) -> String {
        format!(
            " {pc}{percentage:.1}%{r} • {current}/{total} • {rc}{rate:.0}fps{r} • ETA {ec}{eta}{r}",
            pc = self.percentage,
            rc = self.rate,
            ec = self.eta,
            r = self.reset,
        )
    }

    /// Bar of `width` cells with `filled` of them highlighted.
    ///
    /// The edge glyph marks the boundary unless the bar is full.
    pub fn bar(&self, filled: usize, width: usize) -> String {
        if width == 0 {
            return String::new();
        }
        let filled = filled.min(width);
        let mut out = String::with_capacity(width * 3 + 16);
        out.push_str(self.bar);
        out.extend(std::iter::repeat(BAR_CELL).take(filled));
        if filled < width {
            out.push(BAR_EDGE);
        }
        out.push_str(self.reset);
        let pending = width.saturating_sub(filled + 1);
        out.extend(std::iter::repeat(BAR_CELL).take(pending));
        out
    }

    /// Highlighted prompt text.
    pub fn prompt(&self, text: &str) -> String {
        format!("{}{}{}{}", self.prompt, self.bold, text, self.reset)
    }

    /// Highlighted interruption notice.
    pub fn alert(&self, text: &str) -> String {
        format!("{}{}{}{}", self.alert, self.bold, text, self.reset)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}
