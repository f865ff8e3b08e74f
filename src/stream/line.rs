//! Line reconstruction from a raw byte stream.
//!
//! ffmpeg redraws its status line with `\r` and ends regular lines with
//! `\n`. Both terminate a line here; there is no distinction between a
//! line that will be overwritten and one that will not.

/// Accumulates bytes into lines, one byte at a time.
///
/// Bytes are kept raw until a line completes and are then decoded lossily,
/// so multi-byte file names split across reads survive intact.
#[derive(Debug, Default)]
pub struct LineAccumulator {
    partial: Vec<u8>,
    history: Vec<String>,
}

impl LineAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte.
    ///
    /// Returns the completed line when `byte` is `\r` or `\n`, without the
    /// terminator. Empty lines are returned too.
    pub fn feed(&mut self, byte: u8) -> Option<String> {
        match byte {
            b'\r' | b'\n' => Some(self.take_partial()),
            _ => {
                self.partial.push(byte);
                None
            }
        }
    }

    /// The not yet terminated line.
    pub fn partial(&self) -> &[u8] {
        &self.partial
    }

    /// Finalize the in-progress line without a terminator.
    ///
    /// The line is recorded in the history like any other completed line.
    pub fn take_partial(&mut self) -> String {
        let line = String::from_utf8_lossy(&self.partial).into_owned();
        self.partial.clear();
        self.history.push(line.clone());
        line
    }

    /// Completed lines, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}
