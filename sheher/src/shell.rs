//! Composite application state and the shell that drives it.
//!
//! DESIGN
//! ======
//! All UI state lives in one [`AppState`] whose fields are private and only
//! change through the transitions below. The UI owns the storage (a reactive
//! signal in the browser, `Rc<RefCell<_>>` in tests) and exposes it through
//! [`StateHandle`]; [`Shell`] is the only writer.
//!
//! While the session is anonymous there is no active panel and panel actions
//! are ignored. Logout is the one composite reset and lives only here.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::auth::{AuthError, CredentialVerifier, Session};
use crate::feedback::{FeedbackContext, FeedbackKind, FeedbackState, FeedbackSubmitter};
use crate::mood::{self, MoodDescriptor};
use crate::runtime::Runtime;
use crate::store::DocumentStore;
use crate::view::{MenuItem, RouteChoice, Tab, ViewState};

/// Everything the UI renders from, for one page load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    session: Session,
    view: ViewState,
    route: RouteChoice,
    feedback: FeedbackState,
}

impl AppState {
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn route(&self) -> RouteChoice {
        self.route
    }

    #[must_use]
    pub fn feedback(&self) -> FeedbackState {
        self.feedback
    }

    /// Panel to render, or `None` while anonymous.
    #[must_use]
    pub fn active_panel(&self) -> Option<Tab> {
        self.session.is_authenticated().then_some(self.view.active_tab())
    }

    pub(crate) fn acknowledge_feedback(&mut self, kind: FeedbackKind) {
        self.feedback.acknowledge(kind);
    }

    pub(crate) fn hide_acknowledgment(&mut self) {
        self.feedback.hide_acknowledgment();
    }

    fn feedback_context(&self) -> FeedbackContext {
        FeedbackContext { route_type: self.route, active_tab: self.view.active_tab() }
    }

    fn reset(&mut self) {
        self.session.end();
        self.view.close_profile_menu();
        self.view.select_tab(Tab::Routes);
        self.route = RouteChoice::default();
        self.feedback = FeedbackState::default();
    }
}

/// Shared access to the UI-owned [`AppState`].
///
/// Both methods return `None` once the backing storage has been disposed.
pub trait StateHandle: Clone + 'static {
    fn read<T>(&self, f: impl FnOnce(&AppState) -> T) -> Option<T>;
    fn update<T>(&self, f: impl FnOnce(&mut AppState) -> T) -> Option<T>;
}

impl StateHandle for Rc<RefCell<AppState>> {
    fn read<T>(&self, f: impl FnOnce(&AppState) -> T) -> Option<T> {
        Some(f(&self.borrow()))
    }

    fn update<T>(&self, f: impl FnOnce(&mut AppState) -> T) -> Option<T> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Wires the login gate, tab controller, mood clock, and feedback submitter
/// onto one [`AppState`].
pub struct Shell<H: StateHandle, R: Runtime> {
    state: H,
    verifier: Box<dyn CredentialVerifier>,
    submitter: FeedbackSubmitter<R>,
    runtime: R,
}

impl<H: StateHandle, R: Runtime> Shell<H, R> {
    pub fn new(state: H, verifier: Box<dyn CredentialVerifier>, store: Rc<dyn DocumentStore>, runtime: R) -> Self {
        let submitter = FeedbackSubmitter::new(store, runtime.clone());
        Self { state, verifier, submitter, runtime }
    }

    #[must_use]
    pub fn state(&self) -> &H {
        &self.state
    }

    /// Mood for the current moment. Samples the clock on every call.
    #[must_use]
    pub fn mood(&self) -> MoodDescriptor {
        mood::compute(self.runtime.now())
    }

    /// Open the session if the verifier accepts the pair.
    ///
    /// Only a successful login writes to the state; a rejection leaves it
    /// untouched and notifies nobody.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] for an invalid pair, or when the state
    /// storage has already been disposed.
    pub fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        match self.state.read(|app| app.session.is_authenticated()) {
            Some(true) => return Ok(()),
            Some(false) => {}
            None => {
                log::warn!("app state disposed; ignoring login");
                return Err(AuthError::Rejected);
            }
        }
        if !self.verifier.verify(username, password) {
            log::info!("login rejected");
            return Err(AuthError::Rejected);
        }
        if self.state.update(|app| app.session.open()).is_none() {
            log::warn!("app state disposed; ignoring login");
            return Err(AuthError::Rejected);
        }
        log::info!("session opened");
        Ok(())
    }

    /// End the session and restore every view default.
    pub fn logout(&self) {
        self.submitter.cancel_acknowledgment();
        let _ = self.state.update(AppState::reset);
        log::info!("session closed");
    }

    pub fn select_tab(&self, tab: Tab) {
        self.update_authenticated(|app| app.view.select_tab(tab));
    }

    pub fn toggle_profile_menu(&self) {
        self.update_authenticated(|app| app.view.toggle_profile_menu());
    }

    pub fn close_profile_menu(&self) {
        self.update_authenticated(|app| app.view.close_profile_menu());
    }

    /// Every menu item closes the menu; logout also ends the session.
    pub fn choose_menu_item(&self, item: MenuItem) {
        match item {
            MenuItem::Profile | MenuItem::Settings => self.close_profile_menu(),
            MenuItem::Logout => self.logout(),
        }
    }

    pub fn select_route(&self, route: RouteChoice) {
        self.update_authenticated(|app| app.route = route);
    }

    /// Submit `kind` with the current route choice and panel as context.
    pub fn submit_feedback(&self, kind: FeedbackKind) {
        let context = self
            .state
            .read(|app| app.session.is_authenticated().then(|| app.feedback_context()))
            .flatten();
        match context {
            Some(context) => self.submitter.submit(&self.state, kind, context),
            None => log::warn!("ignoring {} feedback outside a session", kind.as_str()),
        }
    }

    fn update_authenticated(&self, f: impl FnOnce(&mut AppState)) {
        let _ = self.state.update(|app| {
            if app.session.is_authenticated() {
                f(app);
            }
        });
    }
}
