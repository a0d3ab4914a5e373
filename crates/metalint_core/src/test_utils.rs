use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{LinterError, ProcessorError};
use crate::issue::Issue;
use crate::linter::{LintContext, Linter};
use crate::processors::Processor;

type RunFn = dyn Fn(&LintContext) -> Result<Vec<Issue>, LinterError> + Send + Sync;

/// A linter backed by a closure.
pub struct FnLinter {
    name: String,
    run: Box<RunFn>,
}

impl FnLinter {
    pub fn new(
        name: &str,
        run: impl Fn(&LintContext) -> Result<Vec<Issue>, LinterError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.to_string(),
            run: Box::new(run),
        }
    }
}

impl Linter for FnLinter {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, ctx: &LintContext) -> Result<Vec<Issue>, LinterError> {
        (self.run)(ctx)
    }
}

/// Shared journal of processor calls, e.g. `"a.process"`, `"a.finish"`.
pub type Journal = Arc<Mutex<Vec<String>>>;

/// A processor that records its calls and optionally fails or rewrites.
pub struct RecordingProcessor {
    name: String,
    journal: Journal,
    fail: bool,
    suffix: Option<String>,
}

impl RecordingProcessor {
    pub fn new(name: &str, journal: &Journal) -> Self {
        Self {
            name: name.to_string(),
            journal: Arc::clone(journal),
            fail: false,
            suffix: None,
        }
    }

    /// Fails every `process` call.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Appends `suffix` to every issue text.
    pub fn appending(mut self, suffix: &str) -> Self {
        self.suffix = Some(suffix.to_string());
        self
    }
}

impl Processor for RecordingProcessor {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&mut self, mut issues: Vec<Issue>) -> Result<Vec<Issue>, ProcessorError> {
        self.journal.lock().push(format!("{}.process", self.name));
        if self.fail {
            // Mutate first to prove the runner keeps the previous output.
            issues.clear();
            return Err(ProcessorError::other("always fails"));
        }
        if let Some(suffix) = &self.suffix {
            for issue in &mut issues {
                issue.text.push_str(suffix);
            }
        }
        Ok(issues)
    }

    fn finish(&mut self) {
        self.journal.lock().push(format!("{}.finish", self.name));
    }
}

#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a subscriber that records every log line, returning both.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    capture_logs_at(tracing::Level::DEBUG, f)
}

/// Like [`capture_logs`], recording only lines at `level` or above.
pub fn capture_logs_at<T>(level: tracing::Level, f: impl FnOnce() -> T) -> (T, String) {
    let writer = CaptureWriter::default();
    let buf = Arc::clone(&writer.0);

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let ret = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buf.lock()).into_owned();
    (ret, logs)
}
