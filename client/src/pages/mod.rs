//! Page modules for the two screens of the shell.
//!
//! ARCHITECTURE
//! ============
//! `login` renders while the session is anonymous; `home` renders once it is
//! authenticated. Each page delegates rendering details to `components`.

pub mod home;
pub mod login;
