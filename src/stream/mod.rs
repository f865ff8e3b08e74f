//! Interpretation of ffmpeg's diagnostic stream.
//!
//! # Module Structure
//!
//! - [`line`] - reassembles lines from single bytes
//! - [`facts`] - pattern matchers and the per-run [`Session`]
//! - [`model`] - converts positions to seconds or frames and owns the bar
//! - [`notifier`] - drives all of the above, one byte at a time

pub mod facts;
pub mod line;
pub mod model;
pub mod notifier;

pub use facts::Session;
pub use line::LineAccumulator;
pub use model::{ProgressModel, ProgressSample, Unit};
pub use notifier::ProgressNotifier;
