//! The redrawn progress line.
//!
//! Layout of one render:
//!
//! ```text
//! clip.mp4 ━━━━━━━━━━━━╸━━━━━━━━━━━━ 50.0% • 45/90 • 3fps • ETA 00:30
//! ^label   ^bar                     ^info
//! ```
//!
//! The bar takes whatever width the label and info leave over.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::render::screen::Screen;
use crate::render::style::Palette;
use crate::render::text::{display_len, format_duration, truncate_label};
use crate::stream::Unit;

/// Width limits for composing a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub fallback_width: usize,
    pub min_terminal_width: usize,
    pub min_bar_width: usize,
    pub label_max_len: usize,
}

impl From<&Config> for Layout {
    fn from(config: &Config) -> Self {
        Self {
            fallback_width: config.fallback_width,
            min_terminal_width: config.min_terminal_width,
            min_bar_width: config.min_bar_width,
            label_max_len: config.label_max_len,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl Layout {
    /// Cells left for the bar.
    ///
    /// Narrow terminals, or layouts leaving fewer than `min_bar_width`
    /// cells, are laid out as if `fallback_width` columns were available.
    pub fn bar_width(&self, terminal_width: usize, label_width: usize, info_width: usize) -> usize {
        let used = label_width + 1 + info_width;
        match terminal_width.checked_sub(used) {
            Some(space)
                if space >= self.min_bar_width && terminal_width >= self.min_terminal_width =>
            {
                space
            }
            _ => self
                .fallback_width
                .saturating_sub(used)
                .max(self.min_bar_width),
        }
    }
}

/// Values shown by one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a> {
    pub desc: &'a str,
    pub current: u64,
    pub total: u64,
    pub unit: Unit,
    pub elapsed: Duration,
}

impl Frame<'_> {
    /// Share of the work done, 0 when the total is unknown.
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            self.current as f64 / self.total as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Seconds left at the current pace, 0 until progress is measurable.
    pub fn remaining_secs(&self) -> f64 {
        if self.current > 0 && self.total > 0 {
            let left = self.total as f64 - self.current as f64;
            self.elapsed.as_secs_f64() * left / self.current as f64
        } else {
            0.0
        }
    }

    /// Units processed per second of wall time.
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.current as f64 / secs
        } else {
            0.0
        }
    }
}

/// Compose the full status line for `frame`.
pub fn compose(
    frame: &Frame<'_>,
    terminal_width: Option<usize>,
    layout: &Layout,
    palette: &Palette,
) -> String {
    let width = terminal_width.unwrap_or(layout.fallback_width);
    let percentage = frame.percentage();
    let eta = format_duration(frame.remaining_secs());
    let info = palette.info(percentage, frame.current, frame.total, frame.rate(), &eta);

    let label = truncate_label(frame.desc, layout.label_max_len);
    let bar_width = layout.bar_width(width, label.width(), display_len(&info));
    let filled = (bar_width as f64 * percentage / 100.0) as usize;

    format!("{} {}{}", label, palette.bar(filled, bar_width), info)
}

/// Progress display for one run.
///
/// Description, total and unit are fixed at construction.
#[derive(Debug)]
pub struct ProgressBar {
    desc: String,
    total: u64,
    current: u64,
    unit: Unit,
    start: Instant,
    last_render: Option<Instant>,
    min_interval: Duration,
    layout: Layout,
}

impl ProgressBar {
    /// Create a bar; the ETA clock starts now.
    pub fn new(desc: impl Into<String>, total: u64, unit: Unit, config: &Config) -> Self {
        Self {
            desc: desc.into(),
            total,
            current: 0,
            unit,
            start: Instant::now(),
            last_render: None,
            min_interval: config.min_render_interval,
            layout: Layout::from(config),
        }
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Record `current` and redraw unless the last redraw was too recent.
    ///
    /// Returns whether a redraw happened. Skipped redraws are not queued.
    pub fn update<W: Write>(&mut self, current: u64, screen: &mut Screen<W>) -> io::Result<bool> {
        self.current = current;

        let now = Instant::now();
        if let Some(last) = self.last_render {
            if now.duration_since(last) < self.min_interval {
                return Ok(false);
            }
        }
        self.last_render = Some(now);

        self.render(screen)?;
        Ok(true)
    }

    /// Jump to 100%, redraw regardless of timing, and end the line.
    pub fn finish<W: Write>(&mut self, screen: &mut Screen<W>) -> io::Result<()> {
        self.current = self.total;
        self.last_render = Some(Instant::now());
        self.render(screen)?;
        screen.newline()
    }

    fn render<W: Write>(&self, screen: &mut Screen<W>) -> io::Result<()> {
        let frame = Frame {
            desc: &self.desc,
            current: self.current,
            total: self.total,
            unit: self.unit,
            elapsed: self.start.elapsed(),
        };
        let line = compose(&frame, screen.width(), &self.layout, &screen.palette());
        screen.draw_status(&line)
    }
}
