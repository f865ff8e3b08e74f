//! Supervisor errors.
//!
//! Only setup and stream failures are errors. A failing ffmpeg run is a
//! normal [`Outcome`](crate::supervisor::Outcome), not an error.

use std::io;

/// Errors that stop the wrapper before ffmpeg's own exit status is known.
#[derive(Debug, thiserror::Error)]
pub enum SupervisorError {
    #[error("Error starting {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Error creating {stream} pipe")]
    Pipe { stream: &'static str },

    #[error("Error installing signal handler")]
    Signals(#[source] io::Error),

    #[error("Error starting background thread")]
    Thread(#[source] io::Error),

    #[error("Error reading {program} output")]
    Read {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Error waiting for {program}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}
