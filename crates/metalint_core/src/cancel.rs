//! Run-wide cancellation signal with an optional deadline.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;

/// A cloneable, cooperative cancellation signal.
///
/// The token fires either when [`cancel`](Self::cancel) is called or when its
/// deadline passes. Nothing is preempted: holders are expected to check the
/// token at their own suspension points.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    cancelled: AtomicBool,
    deadline: Option<Instant>,
    // Dropped on cancel, which disconnects `done`.
    trigger: Mutex<Option<Sender<()>>>,
    done: Receiver<()>,
}

impl CancellationToken {
    /// Creates a token without a deadline.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Creates a token that fires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(Instant::now().checked_add(timeout))
    }

    /// Creates a token that fires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self::build(Some(deadline))
    }

    fn build(deadline: Option<Instant>) -> Self {
        let (trigger, done) = crossbeam_channel::bounded(0);
        Self {
            inner: Arc::new(Inner {
                cancelled: AtomicBool::new(false),
                deadline,
                trigger: Mutex::new(Some(trigger)),
                done,
            }),
        }
    }

    /// Fires the token. Calling it more than once has no further effect.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
        self.inner.trigger.lock().take();
    }

    /// Returns true once the token was cancelled or its deadline passed.
    pub fn is_cancelled(&self) -> bool {
        if self.inner.cancelled.load(Ordering::SeqCst) {
            return true;
        }
        self.inner
            .deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Returns the deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.inner.deadline
    }

    /// Time left until the deadline, `None` without a deadline.
    pub fn remaining(&self) -> Option<Duration> {
        self.inner
            .deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// A receiver that becomes ready (disconnected) once [`cancel`](Self::cancel)
    /// is called. Use it in `select!` together with [`deadline_timer`](Self::deadline_timer).
    pub fn cancelled(&self) -> &Receiver<()> {
        &self.inner.done
    }

    /// A receiver that delivers a message when the deadline passes, or never.
    pub fn deadline_timer(&self) -> Receiver<Instant> {
        match self.inner.deadline {
            Some(deadline) => crossbeam_channel::at(deadline),
            None => crossbeam_channel::never(),
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_not_cancelled() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
        assert!(token.deadline().is_none());
        assert!(token.remaining().is_none());
    }

    #[test]
    fn test_cancel_is_visible_to_clones() {
        let token = CancellationToken::new();
        let clone = token.clone();

        token.cancel();
        token.cancel();

        assert!(clone.is_cancelled());
        assert!(clone.cancelled().recv().is_err());
    }

    #[test]
    fn test_elapsed_deadline_is_cancelled() {
        let token = CancellationToken::with_deadline(Instant::now());
        assert!(token.is_cancelled());
        assert_eq!(token.remaining(), Some(Duration::ZERO));
    }

    #[test]
    fn test_deadline_timer_fires() {
        let token = CancellationToken::with_timeout(Duration::from_millis(10));
        assert!(!token.is_cancelled());

        token.deadline_timer().recv().unwrap();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_deadline_timer_without_deadline_never_fires() {
        let token = CancellationToken::new();
        let timer = token.deadline_timer();
        assert!(timer.recv_timeout(Duration::from_millis(10)).is_err());
    }
}
