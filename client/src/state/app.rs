//! Reactive storage for the shared `AppState`.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use sheher::shell::{AppState, Shell, StateHandle};

use crate::util::runtime::BrowserRuntime;

/// `AppState` held in a signal and provided via context.
#[derive(Clone, Copy, Debug)]
pub struct SignalState(pub RwSignal<AppState>);

impl StateHandle for SignalState {
    fn read<T>(&self, f: impl FnOnce(&AppState) -> T) -> Option<T> {
        self.0.try_with_untracked(f)
    }

    fn update<T>(&self, f: impl FnOnce(&mut AppState) -> T) -> Option<T> {
        self.0.try_update(f)
    }
}

/// The shell as the browser runs it.
pub type AppShell = Shell<SignalState, BrowserRuntime>;

/// Context handle for the shell.
///
/// The shell holds `Rc`s and timers, so it only exists in the browser, in
/// local (non-`Send`) storage. Server renders get an empty handle and every
/// action on it is a no-op.
#[derive(Clone, Copy)]
pub struct ShellHandle(Option<StoredValue<AppShell, LocalStorage>>);

impl ShellHandle {
    /// Shell over `app` for this page load.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn new(app: RwSignal<AppState>) -> Self {
        use sheher::auth::FixedCredentials;

        let shell = Shell::new(
            SignalState(app),
            Box::new(FixedCredentials::demo()),
            crate::net::firestore::feedback_store(),
            BrowserRuntime,
        );
        Self(Some(StoredValue::new_local(shell)))
    }

    /// Server renders are never interactive; no shell is built.
    #[cfg(not(feature = "hydrate"))]
    #[must_use]
    pub fn new(_app: RwSignal<AppState>) -> Self {
        Self(None)
    }

    /// Run `f` against the shell, or return `None` when there is none.
    pub fn with<T>(&self, f: impl FnOnce(&AppShell) -> T) -> Option<T> {
        self.0.and_then(|shell| shell.try_with_value(f))
    }
}
