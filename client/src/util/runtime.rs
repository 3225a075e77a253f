//! Browser implementation of the core `Runtime`.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser (`hydrate`) detached tasks go to `leptos::task::spawn_local`
//! and timers are `gloo_timers` timeouts, which clear themselves on drop.
//! During SSR nothing is interactive, so tasks and timers are discarded.

#[cfg(test)]
#[path = "runtime_test.rs"]
mod runtime_test;

use std::time::Duration;

use futures::future::LocalBoxFuture;
use sheher::runtime::Runtime;
use time::OffsetDateTime;
#[cfg(any(test, feature = "hydrate"))]
use time::UtcOffset;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRuntime;

/// Pending timeout; dropping it clears the browser timer.
pub struct BrowserTimer {
    #[cfg(feature = "hydrate")]
    _timeout: gloo_timers::callback::Timeout,
}

impl Runtime for BrowserRuntime {
    type Timer = BrowserTimer;

    fn now(&self) -> OffsetDateTime {
        local_now()
    }

    fn spawn_detached(&self, task: LocalBoxFuture<'static, ()>) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(task);
        #[cfg(not(feature = "hydrate"))]
        drop(task);
    }

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> BrowserTimer {
        #[cfg(feature = "hydrate")]
        {
            BrowserTimer { _timeout: gloo_timers::callback::Timeout::new(timeout_millis(delay), callback) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, callback);
            BrowserTimer {}
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_now() -> OffsetDateTime {
    let date = js_sys::Date::new_0();
    from_js_date(date.get_time(), date.get_timezone_offset())
}

#[cfg(not(feature = "hydrate"))]
fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Build a local timestamp from `Date.getTime()` and `Date.getTimezoneOffset()`.
///
/// The JS offset is in minutes and has the opposite sign of a UTC offset.
#[cfg(any(test, feature = "hydrate"))]
#[allow(clippy::cast_possible_truncation)]
fn from_js_date(epoch_millis: f64, timezone_offset_minutes: f64) -> OffsetDateTime {
    let nanos = i128::from(epoch_millis as i64) * 1_000_000;
    let utc = OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH);
    let offset = UtcOffset::from_whole_seconds(-(timezone_offset_minutes as i32) * 60).unwrap_or(UtcOffset::UTC);
    utc.to_offset(offset)
}

#[cfg(any(test, feature = "hydrate"))]
fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
