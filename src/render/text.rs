//! Text measurement and formatting helpers for the status line.

use once_cell::sync::Lazy;
use regex::Regex;

static ANSI_SEQUENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*[mGKHfABCDEFGJSTuhlp]").unwrap());

const ELLIPSIS: &str = "...";

/// Format a duration in seconds to MM:SS format.
///
/// Fractional seconds are truncated; negative durations read `00:00`.
pub fn format_duration(seconds: f64) -> String {
    let total_secs = seconds as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Shorten a label to at most `max` characters.
///
/// Longer labels keep their first `max - 3` characters followed by `...`.
pub fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        return label.to_string();
    }
    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut out: String = label.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Remove escape sequences and replace non-ASCII characters with spaces.
///
/// The result has one byte per visible cell. Stripping repeats until no
/// sequence is left, so applying it twice changes nothing.
pub fn strip_for_width(text: &str) -> String {
    let mut stripped = ANSI_SEQUENCE.replace_all(text, "").into_owned();
    while ANSI_SEQUENCE.is_match(&stripped) {
        stripped = ANSI_SEQUENCE.replace_all(&stripped, "").into_owned();
    }
    stripped
        .chars()
        .map(|c| if c.is_ascii() { c } else { ' ' })
        .collect()
}

/// Visible width of text that may contain color codes.
pub fn display_len(text: &str) -> usize {
    strip_for_width(text).len()
}
