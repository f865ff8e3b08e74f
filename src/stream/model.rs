//! Rolling progress state.
//!
//! Positions arrive as seconds. Once the input frame rate is known they are
//! reported in frames instead, and so is the total.

use std::io::{self, Write};

use crate::config::Config;
use crate::render::{ProgressBar, Screen};
use crate::stream::facts::Session;

/// What progress values count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Seconds,
    Frames,
}

impl Unit {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Frames => "frames",
        }
    }
}

/// One progress reading, resolved against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSample {
    pub current: u64,
    /// 0 while the duration is unknown.
    pub total: u64,
    pub unit: Unit,
}

impl ProgressSample {
    /// Express `current_secs` in the session's unit.
    pub fn resolve(session: &Session, current_secs: u64) -> Self {
        let fps = session.frame_rate;
        if fps > 0 {
            Self {
                current: current_secs.saturating_mul(fps),
                total: session.total_duration.saturating_mul(fps),
                unit: Unit::Frames,
            }
        } else {
            Self {
                current: current_secs,
                total: session.total_duration,
                unit: Unit::Seconds,
            }
        }
    }

    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            self.current as f64 / self.total as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Owns the progress bar, built on the first position update.
///
/// The bar keeps the description, total and unit it was built with, even
/// if the source name or frame rate turns up later.
#[derive(Debug)]
pub struct ProgressModel {
    config: Config,
    bar: Option<ProgressBar>,
    last: Option<ProgressSample>,
}

impl ProgressModel {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            bar: None,
            last: None,
        }
    }

    /// Feed a new position and forward it to the bar.
    pub fn update<W: Write>(
        &mut self,
        session: &Session,
        current_secs: u64,
        screen: &mut Screen<W>,
    ) -> io::Result<ProgressSample> {
        let sample = ProgressSample::resolve(session, current_secs);
        self.last = Some(sample);

        let config = &self.config;
        let bar = self.bar.get_or_insert_with(|| {
            let desc = if session.source_name.is_empty() {
                config.placeholder.as_str()
            } else {
                session.source_name.as_str()
            };
            tracing::debug!(
                desc,
                total = sample.total,
                unit = sample.unit.name(),
                "progress started"
            );
            ProgressBar::new(desc, sample.total, sample.unit, config)
        });
        bar.update(sample.current, screen)?;
        Ok(sample)
    }

    /// Complete the bar, if one was ever shown.
    pub fn finish<W: Write>(&mut self, screen: &mut Screen<W>) -> io::Result<()> {
        match self.bar.as_mut() {
            Some(bar) => bar.finish(screen),
            None => Ok(()),
        }
    }

    /// Most recent sample.
    pub fn last_sample(&self) -> Option<ProgressSample> {
        self.last
    }

    pub fn bar(&self) -> Option<&ProgressBar> {
        self.bar.as_ref()
    }
}
