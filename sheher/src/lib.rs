//! # sheher
//!
//! Application state and submission core for the Udaipur city companion.
//!
//! ARCHITECTURE
//! ============
//! Everything here is independent of rendering and of any particular event
//! loop. The UI crate supplies a [`runtime::Runtime`] (browser timers and
//! `spawn_local`) and a [`shell::StateHandle`] (a reactive signal); tests
//! supply tokio-backed equivalents.
//!
//! - [`mood`]: time-of-day mood derivation.
//! - [`auth`]: credential verification seam and the session flag.
//! - [`view`]: active tab, profile menu, and route choice.
//! - [`feedback`]: feedback vocabulary, events, and the fire-and-forget submitter.
//! - [`store`]: document-store seam and its error type.
//! - [`firestore`]: Firestore REST document encoding and configuration.
//! - [`shell`]: the composite `AppState` and the only place that wires the rest together.

pub mod auth;
pub mod feedback;
pub mod firestore;
pub mod mood;
pub mod runtime;
pub mod shell;
pub mod store;
pub mod view;

#[cfg(test)]
mod test_support;
