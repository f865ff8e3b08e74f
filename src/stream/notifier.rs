//! Byte-level driver for the progress display.
//!
//! Every byte of ffmpeg's stderr passes through [`ProgressNotifier::process_byte`]:
//! it is kept for replay, appended to the current line, checked for a
//! prompt, and, once a line completes, mined for progress facts.

use std::io::Write;

use crate::config::Config;
use crate::prompt::{is_prompt, PromptForwarder};
use crate::render::Screen;
use crate::stream::facts::Session;
use crate::stream::line::LineAccumulator;
use crate::stream::model::{ProgressModel, ProgressSample};

/// Turns the wrapped program's diagnostics into a progress display.
pub struct ProgressNotifier<W: Write> {
    lines: LineAccumulator,
    session: Session,
    model: ProgressModel,
    screen: Screen<W>,
    forwarder: Option<PromptForwarder>,
    diagnostics: Vec<u8>,
}

impl<W: Write> ProgressNotifier<W> {
    /// Create a notifier drawing on `screen`.
    ///
    /// Without a forwarder, prompts are still shown but not answered.
    pub fn new(config: Config, screen: Screen<W>, forwarder: Option<PromptForwarder>) -> Self {
        Self {
            lines: LineAccumulator::new(),
            session: Session::new(),
            model: ProgressModel::new(config),
            screen,
            forwarder,
            diagnostics: Vec::new(),
        }
    }

    /// Consume one byte of diagnostic output.
    pub fn process_byte(&mut self, byte: u8) {
        self.diagnostics.push(byte);

        if let Some(line) = self.lines.feed(byte) {
            self.handle_line(&line);
        } else if is_prompt(self.lines.partial()) {
            self.handle_prompt();
        }
    }

    /// Consume a chunk of diagnostic output.
    pub fn process(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.process_byte(byte);
        }
    }

    fn handle_line(&mut self, line: &str) {
        let Some(position) = self.session.observe(line) else {
            return;
        };
        if let Err(e) = self.model.update(&self.session, position, &mut self.screen) {
            tracing::debug!(error = %e, "failed to draw progress");
        }
    }

    fn handle_prompt(&mut self) {
        let prompt = self.lines.take_partial();
        tracing::debug!(prompt = %prompt, "prompt detected");

        if let Err(e) = self.screen.echo_prompt(&prompt) {
            tracing::debug!(error = %e, "failed to show prompt");
        }
        if let Some(forwarder) = &self.forwarder {
            forwarder.request(&prompt);
        }
    }

    /// Complete the progress bar after a successful run.
    pub fn finish(&mut self) {
        if let Err(e) = self.model.finish(&mut self.screen) {
            tracing::debug!(error = %e, "failed to draw final progress");
        }
    }

    /// Write every diagnostic byte received so far, unchanged.
    pub fn replay_diagnostics(&mut self) {
        if let Err(e) = self.screen.write_raw(&self.diagnostics) {
            tracing::warn!(error = %e, "failed to replay diagnostics");
        }
    }

    /// Everything ffmpeg wrote to stderr.
    pub fn diagnostics(&self) -> &[u8] {
        &self.diagnostics
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Completed diagnostic lines, oldest first.
    pub fn lines(&self) -> &[String] {
        self.lines.history()
    }

    pub fn last_sample(&self) -> Option<ProgressSample> {
        self.model.last_sample()
    }

    pub fn screen(&self) -> &Screen<W> {
        &self.screen
    }

    /// Detach the prompt forwarder.
    ///
    /// Pair with [`PromptForwarder::shutdown`] to wait until answers from a
    /// finite input have reached the program.
    pub fn take_forwarder(&mut self) -> Option<PromptForwarder> {
        self.forwarder.take()
    }
}
