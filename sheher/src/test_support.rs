//! Tokio-backed runtime and store fakes shared by the unit tests.
//!
//! Tests run inside a `LocalSet` on a paused current-thread runtime, so timer
//! behaviour is driven by `tokio::time::sleep` in the test body.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use time::OffsetDateTime;
use time::macros::datetime;
use tokio::task::{JoinHandle, LocalSet};

use crate::auth::FixedCredentials;
use crate::feedback::FeedbackRecord;
use crate::runtime::Runtime;
use crate::shell::{AppState, Shell, StateHandle};
use crate::store::{DocumentStore, StoreError};

pub const MORNING: OffsetDateTime = datetime!(2026-10-16 08:30:00 +05:30);

/// Aborts the wrapped task when dropped.
pub struct AbortOnDrop(JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

#[derive(Clone)]
pub struct TokioRuntime {
    now: Rc<RefCell<OffsetDateTime>>,
}

impl TokioRuntime {
    pub fn at(now: OffsetDateTime) -> Self {
        Self { now: Rc::new(RefCell::new(now)) }
    }

    pub fn set_now(&self, now: OffsetDateTime) {
        *self.now.borrow_mut() = now;
    }
}

impl Runtime for TokioRuntime {
    type Timer = AbortOnDrop;

    fn now(&self) -> OffsetDateTime {
        *self.now.borrow()
    }

    fn spawn_detached(&self, task: LocalBoxFuture<'static, ()>) {
        drop(tokio::task::spawn_local(task));
    }

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> AbortOnDrop {
        AbortOnDrop(tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            callback();
        }))
    }
}

/// Records every append and answers with a fixed outcome.
#[derive(Clone, Default)]
pub struct RecordingStore {
    pub appended: Rc<RefCell<Vec<(String, FeedbackRecord)>>>,
    pub fail_with: Option<StoreError>,
}

impl RecordingStore {
    pub fn failing(error: StoreError) -> Self {
        Self { appended: Rc::default(), fail_with: Some(error) }
    }
}

#[async_trait(?Send)]
impl DocumentStore for RecordingStore {
    async fn append(&self, collection: &str, record: FeedbackRecord) -> Result<(), StoreError> {
        self.appended.borrow_mut().push((collection.to_owned(), record));
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

/// Never completes, like a write stuck on a dead connection.
pub struct HangingStore;

#[async_trait(?Send)]
impl DocumentStore for HangingStore {
    async fn append(&self, _collection: &str, _record: FeedbackRecord) -> Result<(), StoreError> {
        futures::future::pending::<()>().await;
        Ok(())
    }
}

/// Shared state that counts writes, the way a signal notifies subscribers.
#[derive(Clone, Default)]
pub struct CountingState {
    pub state: Rc<RefCell<AppState>>,
    pub writes: Rc<Cell<usize>>,
}

impl StateHandle for CountingState {
    fn read<T>(&self, f: impl FnOnce(&AppState) -> T) -> Option<T> {
        Some(f(&self.state.borrow()))
    }

    fn update<T>(&self, f: impl FnOnce(&mut AppState) -> T) -> Option<T> {
        self.writes.set(self.writes.get() + 1);
        Some(f(&mut self.state.borrow_mut()))
    }
}

/// Storage that has already been torn down.
#[derive(Clone, Copy)]
pub struct DisposedState;

impl StateHandle for DisposedState {
    fn read<T>(&self, _f: impl FnOnce(&AppState) -> T) -> Option<T> {
        None
    }

    fn update<T>(&self, _f: impl FnOnce(&mut AppState) -> T) -> Option<T> {
        None
    }
}

pub type TestShell = Shell<Rc<RefCell<AppState>>, TokioRuntime>;

pub fn shell_with(store: Rc<dyn DocumentStore>, runtime: TokioRuntime) -> TestShell {
    Shell::new(Rc::new(RefCell::new(AppState::default())), Box::new(FixedCredentials::demo()), store, runtime)
}

pub fn logged_in_shell(store: Rc<dyn DocumentStore>) -> TestShell {
    let shell = shell_with(store, TokioRuntime::at(MORNING));
    shell.login("admin", "password").unwrap();
    shell
}

pub fn snapshot(shell: &TestShell) -> AppState {
    shell.state().borrow().clone()
}

/// Run `body` inside a `LocalSet` so `spawn_local` works.
pub async fn local<F: Future<Output = ()>>(body: F) {
    LocalSet::new().run_until(body).await;
}

/// Let spawned local tasks make progress without moving the clock.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
