//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::ffi::OsString;
use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};

use fpb::render::{FixedWidth, Palette};
use fpb::{Config, Outcome, Supervisor, SupervisorError};

/// Cloneable writer whose contents stay readable after being moved into a run.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Supervise `sh -c script`, answering prompts from `input`.
pub fn run_script(script: &str, input: &str) -> (Result<Outcome, SupervisorError>, String) {
    run_program(Config::wrapping("sh"), &["-c", script], input)
}

pub fn run_program(
    config: Config,
    args: &[&str],
    input: &str,
) -> (Result<Outcome, SupervisorError>, String) {
    let out = SharedBuffer::default();
    let args: Vec<OsString> = args.iter().map(OsString::from).collect();
    let supervisor = Supervisor::new(
        config,
        Cursor::new(input.as_bytes().to_vec()),
        Palette::plain(),
        Box::new(FixedWidth(Some(80))),
    );
    let result = supervisor.run(&args, out.clone());
    (result, out.contents())
}
