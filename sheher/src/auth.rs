//! Credential verification seam and the session flag.
//!
//! DESIGN
//! ======
//! The core only depends on a boolean `verify` contract. [`FixedCredentials`]
//! is a demo gate with one hardcoded pair and is not a security boundary;
//! deployments handling real users plug an identity provider in through
//! [`CredentialVerifier`] and keep the same two-state session transition.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Display name shown in the profile menu until a real profile exists.
pub const DEFAULT_USER_NAME: &str = "Tarush Jain";

/// User-visible message for a rejected credential pair.
pub const REJECTION_MESSAGE: &str = "Galat naam ya password. Kripya dobara koshish karo.";

/// Errors produced by the login gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    Rejected,
}

/// Capability that decides whether a credential pair opens a session.
pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool;
}

impl<F> CredentialVerifier for F
where
    F: Fn(&str, &str) -> bool,
{
    fn verify(&self, username: &str, password: &str) -> bool {
        self(username, password)
    }
}

/// Accepts exactly one username/password pair, compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCredentials {
    username: String,
    password: String,
}

impl FixedCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// The demo pair advertised on the login page.
    #[must_use]
    pub fn demo() -> Self {
        Self::new("admin", "password")
    }
}

impl CredentialVerifier for FixedCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Authenticated/anonymous status of the current page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
    user_name: String,
}

impl Default for Session {
    fn default() -> Self {
        Self { authenticated: false, user_name: DEFAULT_USER_NAME.to_owned() }
    }
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Mark the session authenticated. The caller has already run the gate.
    pub(crate) fn open(&mut self) {
        self.authenticated = true;
    }

    pub(crate) fn end(&mut self) {
        *self = Self::default();
    }
}
