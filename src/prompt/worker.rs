//! Background worker that relays user answers to the wrapped program.
//!
//! Receives one request per detected prompt, reads one line from the user's
//! input for each, and writes that line to the program's stdin. Requests
//! are handled one at a time, so two prompts never race for the same input.

use std::io::{BufRead, Write};
use std::sync::mpsc::Receiver;

/// A prompt waiting for an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardRequest {
    /// The prompt text as shown to the user, carried for diagnostics.
    pub prompt: String,
}

/// Worker loop that answers forward requests.
///
/// Exits when the request channel is closed (all senders dropped) or the
/// input reaches end of file. Either way `sink` is dropped, so the program
/// sees its stdin close. Returns the number of answers delivered.
pub fn forward_loop<R: BufRead, W: Write>(
    requests: Receiver<ForwardRequest>,
    mut input: R,
    mut sink: W,
) -> usize {
    let mut delivered = 0;
    while let Ok(request) = requests.recv() {
        let mut answer = Vec::new();
        match input.read_until(b'\n', &mut answer) {
            Ok(0) => {
                tracing::debug!(prompt = %request.prompt, "input closed, prompt not answered");
                break;
            }
            Err(e) => {
                tracing::debug!(prompt = %request.prompt, error = %e, "failed to read answer");
                continue;
            }
            Ok(_) => {}
        }

        // The program may already be gone; nothing to report then.
        match sink.write_all(&answer).and_then(|()| sink.flush()) {
            Ok(()) => {
                tracing::debug!(prompt = %request.prompt, bytes = answer.len(), "answer forwarded");
                delivered += 1;
            }
            Err(e) => tracing::debug!(error = %e, "failed to forward answer"),
        }
    }
    delivered
}
