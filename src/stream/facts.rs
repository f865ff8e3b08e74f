//! Progress facts extracted from ffmpeg's diagnostic lines.
//!
//! Only four patterns matter:
//! - `Duration: 00:01:30.00` - total length of the input
//! - `from 'path/clip.mp4':` - input file, shown by its base name
//! - `29.97 fps` - frame rate of the input stream
//! - `time=00:00:45.00` - current output position
//!
//! Lines matching nothing are ignored.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static DURATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Duration: (\d{2}):(\d{2}):(\d{2})\.\d{2}").unwrap());

static POSITION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"time=(\d{2}):(\d{2}):(\d{2})\.\d{2}").unwrap());

static SOURCE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"from '(.*)':").unwrap());

static FRAME_RATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?) fps(?:[,\s]|$)").unwrap());

/// Convert clock components to whole seconds.
pub fn seconds(hours: u64, minutes: u64, secs: u64) -> u64 {
    (hours * 60 + minutes) * 60 + secs
}

fn clock_seconds(caps: &Captures<'_>) -> Option<u64> {
    let part = |i: usize| -> Option<u64> { caps.get(i)?.as_str().parse().ok() };
    Some(seconds(part(1)?, part(2)?, part(3)?))
}

/// Total duration in seconds from a `Duration:` line.
pub fn parse_duration(line: &str) -> Option<u64> {
    clock_seconds(&DURATION_PATTERN.captures(line)?)
}

/// Current position in seconds from a `time=` line.
pub fn parse_position(line: &str) -> Option<u64> {
    clock_seconds(&POSITION_PATTERN.captures(line)?)
}

/// Base name of the quoted input path.
pub fn parse_source(line: &str) -> Option<String> {
    let quoted = SOURCE_PATTERN.captures(line)?.get(1)?.as_str();
    let name = Path::new(quoted)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| quoted.to_string());
    (!name.is_empty()).then_some(name)
}

/// Frame rate, truncated to whole frames per second.
pub fn parse_frame_rate(line: &str) -> Option<u64> {
    let raw = FRAME_RATE_PATTERN.captures(line)?.get(1)?.as_str();
    raw.parse::<f64>().ok().map(|fps| fps as u64)
}

/// Facts learned about the current run.
///
/// Each fact is learned once: the first line that yields a non-zero (or
/// non-empty) value wins and later matches are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Input duration in seconds, 0 while unknown.
    pub total_duration: u64,
    /// Base name of the input file, empty while unknown.
    pub source_name: String,
    /// Input frame rate, 0 while unknown.
    pub frame_rate: u64,
}

impl Session {
    /// Create a session with nothing known yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Learn what `line` reveals.
    ///
    /// Returns the playback position in seconds when the line carries one.
    /// Positions are not facts: every match is reported.
    pub fn observe(&mut self, line: &str) -> Option<u64> {
        if self.total_duration == 0 {
            if let Some(duration) = parse_duration(line).filter(|&d| d > 0) {
                tracing::debug!(duration, "learned input duration");
                self.total_duration = duration;
            }
        }
        if self.source_name.is_empty() {
            if let Some(name) = parse_source(line) {
                tracing::debug!(source = %name, "learned input name");
                self.source_name = name;
            }
        }
        if self.frame_rate == 0 {
            if let Some(fps) = parse_frame_rate(line).filter(|&f| f > 0) {
                tracing::debug!(fps, "learned frame rate");
                self.frame_rate = fps;
            }
        }
        parse_position(line)
    }
}
