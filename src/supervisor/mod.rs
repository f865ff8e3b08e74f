//! Runs the wrapped program and decides how fpb exits.
//!
//! # Architecture
//!
//! Three threads feed one channel that the caller blocks on:
//! - `fpb-reader` reads the program's stderr byte by byte through a
//!   [`ProgressNotifier`] and hands the notifier back when the stream ends
//! - `fpb-signals` reports the first SIGINT/SIGTERM and stops when the run
//!   returns
//! - `fpb-prompt` relays answers to the program's stdin (not on the channel)
//!
//! Whichever event arrives first decides the outcome. A panic on the
//! reader is reported as a read error rather than leaving the channel
//! silent.

mod signals;

use std::ffi::OsString;
use std::io::{self, BufRead, BufReader, Read, Stdin, Write};
use std::panic::{self, AssertUnwindSafe};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;

use crate::config::Config;
use crate::error::SupervisorError;
use crate::prompt::PromptForwarder;
use crate::render::{LiveTerminal, Palette, Screen, TerminalProbe};
use crate::stream::ProgressNotifier;

/// How a supervised run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The program exited successfully.
    Completed,
    /// The program failed with this exit code.
    Failed(i32),
    /// fpb received this signal and killed the program.
    Interrupted(i32),
}

impl Outcome {
    /// Exit status fpb should report.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Completed => 0,
            Self::Failed(code) => *code,
            Self::Interrupted(signal) => 128 + signal,
        }
    }
}

enum Event<W: Write> {
    Signal(i32),
    ReaderFinished {
        notifier: ProgressNotifier<W>,
        result: io::Result<()>,
    },
}

/// Spawns the wrapped program and supervises one run.
pub struct Supervisor<R> {
    config: Config,
    input: R,
    palette: Palette,
    probe: Box<dyn TerminalProbe>,
}

impl Supervisor<BufReader<Stdin>> {
    /// Supervisor answering prompts from stdin and drawing for stderr.
    pub fn for_terminal(config: Config) -> Self {
        Self::new(
            config,
            BufReader::new(io::stdin()),
            Palette::detect(),
            Box::new(LiveTerminal),
        )
    }
}

impl<R: BufRead + Send + 'static> Supervisor<R> {
    /// Supervisor with explicit answer source, colors and width probe.
    pub fn new(config: Config, input: R, palette: Palette, probe: Box<dyn TerminalProbe>) -> Self {
        Self {
            config,
            input,
            palette,
            probe,
        }
    }

    /// Run the program with `args`, drawing progress on `out`.
    ///
    /// A failing program is an [`Outcome`], not an error; its diagnostics
    /// are replayed on `out` before returning.
    pub fn run<W>(self, args: &[OsString], out: W) -> Result<Outcome, SupervisorError>
    where
        W: Write + Send + 'static,
    {
        let Self {
            config,
            input,
            palette,
            probe,
        } = self;
        let program = config.program.clone();

        let (events, rx) = mpsc::channel::<Event<W>>();
        let _listener =
            signals::listen(events.clone(), Event::Signal).map_err(SupervisorError::Signals)?;

        let mut child = Command::new(&program)
            .args(args)
            .stdin(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SupervisorError::Spawn {
                program: program.clone(),
                source,
            })?;
        tracing::debug!(program = %program, ?args, pid = child.id(), "spawned");

        let (stdin, stderr) = match (child.stdin.take(), child.stderr.take()) {
            (Some(stdin), Some(stderr)) => (stdin, stderr),
            (stdin, _) => {
                let stream = if stdin.is_none() { "stdin" } else { "stderr" };
                return Err(abort(&mut child, SupervisorError::Pipe { stream }));
            }
        };

        let forwarder = match PromptForwarder::spawn(input, stdin) {
            Ok(forwarder) => forwarder,
            Err(e) => return Err(abort(&mut child, SupervisorError::Thread(e))),
        };
        let screen = Screen::new(out, palette, probe);
        let mut notifier = ProgressNotifier::new(config, screen, Some(forwarder));

        let reader = thread::Builder::new()
            .name("fpb-reader".to_string())
            .spawn(move || {
                let result = pump_guarded(stderr, &mut notifier);
                let _ = events.send(Event::ReaderFinished { notifier, result });
            });
        if let Err(e) = reader {
            return Err(abort(&mut child, SupervisorError::Thread(e)));
        }

        match rx.recv() {
            Ok(Event::Signal(signal)) => {
                let _ = writeln!(io::stderr(), "{}", palette.alert("Exiting."));
                stop(&mut child);
                Ok(Outcome::Interrupted(signal))
            }
            Ok(Event::ReaderFinished {
                result: Err(source),
                ..
            }) => Err(abort(&mut child, SupervisorError::Read { program, source })),
            Ok(Event::ReaderFinished {
                mut notifier,
                result: Ok(()),
            }) => {
                let status = child
                    .wait()
                    .map_err(|source| SupervisorError::Wait { program, source })?;
                tracing::debug!(%status, "program exited");

                if status.success() {
                    notifier.finish();
                    Ok(Outcome::Completed)
                } else {
                    notifier.replay_diagnostics();
                    Ok(Outcome::Failed(exit_code(status)))
                }
            }
            Err(_) => {
                let source = io::Error::new(io::ErrorKind::Other, "output reader stopped");
                Err(abort(&mut child, SupervisorError::Read { program, source }))
            }
        }
    }
}

/// Feed everything `source` produces into `notifier`, until end of stream.
pub fn pump<S: Read, W: Write>(source: S, notifier: &mut ProgressNotifier<W>) -> io::Result<()> {
    let mut reader = BufReader::new(source);
    loop {
        let chunk = match reader.fill_buf() {
            Ok([]) => return Ok(()),
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        let len = chunk.len();
        notifier.process(chunk);
        reader.consume(len);
    }
}

/// [`pump`], with a panic while processing reported as an I/O error.
pub fn pump_guarded<S: Read, W: Write>(
    source: S,
    notifier: &mut ProgressNotifier<W>,
) -> io::Result<()> {
    panic::catch_unwind(AssertUnwindSafe(|| pump(source, notifier))).unwrap_or_else(|_| {
        Err(io::Error::new(io::ErrorKind::Other, "output reader panicked"))
    })
}

/// Kill and reap the program.
fn stop(child: &mut Child) {
    if let Err(e) = child.kill() {
        tracing::debug!(error = %e, "failed to kill program");
    }
    if let Err(e) = child.wait() {
        tracing::debug!(error = %e, "failed to reap program");
    }
}

/// Kill the program after a setup failure and pass the error on.
fn abort(child: &mut Child, err: SupervisorError) -> SupervisorError {
    stop(child);
    err
}

/// Exit code for a failed run; death by signal maps to `128 + signal`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
