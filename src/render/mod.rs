//! Rendering of the status line.
//!
//! This module contains everything that ends up on the terminal: the
//! progress bar, its text helpers, the color palette, and the width probe.

mod bar;
mod screen;
pub mod style;
pub mod terminal;
pub mod text;

pub use bar::{compose, Frame, Layout, ProgressBar};
pub use screen::Screen;
pub use style::Palette;
pub use terminal::{FixedWidth, LiveTerminal, TerminalProbe};
pub use text::{display_len, format_duration, strip_for_width, truncate_label};
