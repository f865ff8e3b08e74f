//! Interactive prompt relay.
//!
//! ffmpeg asks `File 'out.mp4' already exists. Overwrite? [y/N] ` on its
//! stderr and then waits on stdin. The prompt never ends with a newline, so
//! it is spotted in the unterminated line and relayed to the user, whose
//! answer is written back to ffmpeg.
//!
//! # Module Structure
//!
//! - [`worker`] - background loop that reads answers and writes them to
//!   the wrapped program

mod worker;

use std::io::{BufRead, Write};
use std::sync::mpsc::{channel, Sender};
use std::thread::{self, JoinHandle};

pub use worker::{forward_loop, ForwardRequest};

/// Trailing text of a confirmation prompt.
pub const PROMPT_SUFFIX: &[u8] = b"[y/N] ";

/// Whether an unterminated line ends in a confirmation prompt.
pub fn is_prompt(partial: &[u8]) -> bool {
    partial.ends_with(PROMPT_SUFFIX)
}

/// Handle to the answer-forwarding worker.
pub struct PromptForwarder {
    requests: Sender<ForwardRequest>,
    worker: JoinHandle<usize>,
}

impl PromptForwarder {
    /// Start a worker reading answers from `input` and writing them to `sink`.
    pub fn spawn<R, W>(input: R, sink: W) -> std::io::Result<Self>
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        let (requests, rx) = channel();
        let worker = thread::Builder::new()
            .name("fpb-prompt".to_string())
            .spawn(move || forward_loop(rx, input, sink))?;
        Ok(Self { requests, worker })
    }

    /// Ask for one line of input to be relayed. Never blocks.
    pub fn request(&self, prompt: &str) {
        let request = ForwardRequest {
            prompt: prompt.to_string(),
        };
        if self.requests.send(request).is_err() {
            tracing::debug!("prompt worker is gone, answer will not be forwarded");
        }
    }

    /// Stop accepting prompts and wait for pending answers.
    ///
    /// Blocks while the worker waits on input, so only callers whose input
    /// is finite (a buffer, a file) should use it. The supervisor never
    /// does: its input is the user's terminal. Returns the number of
    /// answers delivered.
    pub fn shutdown(self) -> usize {
        drop(self.requests);
        self.worker.join().unwrap_or(0)
    }
}
