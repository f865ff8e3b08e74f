//! fpb - FFmpeg Progress Bar
//!
//! Wraps `ffmpeg`, hides its diagnostic output, and draws a single live
//! progress line instead. Arguments, stdout, interactive prompts and the
//! exit status pass through; the hidden diagnostics are shown only if
//! ffmpeg fails.
//!
//! # Usage
//!
//! ```no_run
//! use fpb::{Config, Supervisor};
//!
//! let args = vec!["-i".into(), "in.mp4".into(), "out.mkv".into()];
//! let outcome = Supervisor::for_terminal(Config::default())
//!     .run(&args, std::io::stderr())
//!     .unwrap();
//! std::process::exit(outcome.exit_code());
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod render;
pub mod stream;
pub mod supervisor;

pub use config::Config;
pub use error::SupervisorError;
pub use supervisor::{Outcome, Supervisor};
