//! Per-owner stage timing.
//!
//! Every worker and the processing thread owns its own [`Stopwatch`], so no
//! timer state is shared while work is running.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

/// Records the wall-clock duration of named stages.
#[derive(Debug)]
pub struct Stopwatch {
    name: String,
    started_at: Instant,
    stages: HashMap<String, Duration>,
}

impl Stopwatch {
    /// Starts a new stopwatch.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            started_at: Instant::now(),
            stages: HashMap::new(),
        }
    }

    /// Returns the stopwatch name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs `f` and adds its duration to the stage `stage`.
    pub fn track_stage<T>(&mut self, stage: &str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let ret = f();
        *self.stages.entry(stage.to_string()).or_default() += start.elapsed();
        ret
    }

    /// Returns the accumulated stage durations.
    pub fn stages(&self) -> &HashMap<String, Duration> {
        &self.stages
    }

    /// Returns the time elapsed since the stopwatch was started.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Stages sorted by duration, longest first. Ties are sorted by name.
    fn sorted_stages(&self) -> Vec<(&str, Duration)> {
        let mut stages: Vec<_> = self
            .stages
            .iter()
            .map(|(name, d)| (name.as_str(), *d))
            .collect();
        stages.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        stages
    }

    /// Formats the stage report without logging it.
    pub fn stages_report(&self) -> String {
        let stages = self
            .sorted_stages()
            .into_iter()
            .map(|(name, d)| format!("{name}: {d:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{} took {:?} with stages: {}",
            self.name,
            self.elapsed(),
            stages
        )
    }

    /// Logs the total duration at debug level.
    pub fn print(&self) {
        debug!("{} took {:?}", self.name, self.elapsed());
    }

    /// Logs the total duration together with every stage, at debug level.
    pub fn print_stages(&self) {
        debug!("{}", self.stages_report());
    }
}
