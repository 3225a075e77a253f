//! Client-side state glue.
//!
//! DESIGN
//! ======
//! `AppState` itself lives in `sheher`. This module only adapts a Leptos
//! signal to the core's `StateHandle` so the shell can drive it and the
//! components can react to it.

pub mod app;
