//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read `AppState` from the context signal and send every user
//! action through the `Shell` handle; none of them mutate state directly.

pub mod feedback_bar;
pub mod mood_header;
pub mod places_panel;
pub mod profile_menu;
pub mod routes_panel;
pub mod tab_bar;
pub mod updates_panel;
