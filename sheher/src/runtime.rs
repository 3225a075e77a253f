//! Event-loop seam: clock, detached tasks, and cancellable timers.
//!
//! The browser implementation lives in the UI crate; tests use a tokio
//! `LocalSet` with paused time.

use std::time::Duration;

use futures::future::LocalBoxFuture;
use time::OffsetDateTime;

/// Single-threaded cooperative runtime the core schedules work on.
pub trait Runtime: Clone + 'static {
    /// Handle to a scheduled callback. Dropping it cancels the callback.
    type Timer: 'static;

    /// Current local wall-clock time.
    fn now(&self) -> OffsetDateTime;

    /// Run `task` to completion in the background. Nothing observes its result.
    fn spawn_detached(&self, task: LocalBoxFuture<'static, ()>);

    /// Invoke `callback` once after `delay` unless the returned timer is dropped first.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Timer;
}
