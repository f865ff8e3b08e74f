//! Fixed settings for the wrapper.
//!
//! fpb reads no config file and no flags of its own; every argument belongs
//! to ffmpeg. The values here are the constants the pipeline runs with,
//! gathered in one place so tests can swap the wrapped program.

use std::time::Duration;

/// Settings shared by the supervisor, the progress model, and the renderer.
#[derive(Debug, Clone)]
pub struct Config {
    /// Program spawned with the user's arguments.
    pub program: String,
    /// Minimum time between two status line redraws.
    pub min_render_interval: Duration,
    /// Width assumed when the terminal width is unknown or too small.
    pub fallback_width: usize,
    /// Terminal widths below this use `fallback_width` for layout.
    pub min_terminal_width: usize,
    /// The bar never shrinks below this many cells.
    pub min_bar_width: usize,
    /// Labels longer than this are cut and end in `...`.
    pub label_max_len: usize,
    /// Label shown until the source file name is known.
    pub placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program: "ffmpeg".to_string(),
            min_render_interval: Duration::from_millis(50),
            fallback_width: 80,
            min_terminal_width: 20,
            min_bar_width: 5,
            label_max_len: 30,
            placeholder: "Processing".to_string(),
        }
    }
}

impl Config {
    /// Default settings wrapping a different program.
    pub fn wrapping(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }
}
