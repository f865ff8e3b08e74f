//! Termination signal delivery.
//!
//! The first SIGINT or SIGTERM is turned into an event on the supervisor's
//! channel. Registering replaces the default "terminate now" behavior, so
//! the supervisor decides how to exit.

use std::io;
use std::sync::mpsc::Sender;

/// Active signal registration for one run.
///
/// Dropping it stops the listening thread and releases its event sender.
pub struct Listener {
    #[cfg(unix)]
    handle: signal_hook::iterator::Handle,
    #[cfg(unix)]
    thread: Option<std::thread::JoinHandle<()>>,
}

#[cfg(unix)]
impl Drop for Listener {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::debug!("signal thread panicked");
            }
        }
    }
}

/// Send `on_signal(signal)` on `events` when the process is interrupted.
#[cfg(unix)]
pub fn listen<E, F>(events: Sender<E>, on_signal: F) -> io::Result<Listener>
where
    E: Send + 'static,
    F: Fn(i32) -> E + Send + 'static,
{
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([libc::SIGINT, libc::SIGTERM])?;
    let handle = signals.handle();
    let thread = std::thread::Builder::new()
        .name("fpb-signals".to_string())
        .spawn(move || {
            // Ends without a signal once the handle is closed.
            if let Some(signal) = signals.forever().next() {
                tracing::debug!(signal, "termination signal received");
                let _ = events.send(on_signal(signal));
            }
        })?;
    Ok(Listener {
        handle,
        thread: Some(thread),
    })
}

/// Send `on_signal(SIGINT)` on `events` when Ctrl+C is pressed.
///
/// The handler lives for the rest of the process; later runs reuse it.
#[cfg(not(unix))]
pub fn listen<E, F>(events: Sender<E>, on_signal: F) -> io::Result<Listener>
where
    E: Send + 'static,
    F: Fn(i32) -> E + Send + 'static,
{
    let handler = move || {
        tracing::debug!("Ctrl+C received");
        let _ = events.send(on_signal(libc::SIGINT));
    };
    match ctrlc::try_set_handler(handler) {
        Ok(()) | Err(ctrlc::Error::MultipleHandlers) => Ok(Listener {}),
        Err(e) => Err(io::Error::new(io::ErrorKind::Other, e)),
    }
}
