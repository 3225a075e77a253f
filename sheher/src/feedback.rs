//! Feedback vocabulary, events, and the fire-and-forget submitter.
//!
//! DESIGN
//! ======
//! A submission has three independent effects:
//!
//! 1. Local display state flips synchronously (last kind + banner visible).
//! 2. The record is written by a detached task. Its result never reaches the
//!    caller; failures go to the log and nowhere else.
//! 3. A hide callback is scheduled for [`ACKNOWLEDGMENT_WINDOW`] after the call.
//!    Only one is ever pending: storing a new timer drops, and so cancels, the
//!    previous one, which makes the latest submission govern the hide time.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use time::OffsetDateTime;

use crate::runtime::Runtime;
use crate::shell::StateHandle;
use crate::store::DocumentStore;
use crate::view::{RouteChoice, Tab};

/// Collection every feedback record is appended to.
pub const FEEDBACK_COLLECTION: &str = "feedback";

/// How long the acknowledgment banner stays up after a submission.
pub const ACKNOWLEDGMENT_WINDOW: Duration = Duration::from_millis(3000);

/// One-tap reactions offered by the panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    Calm,
    Okay,
    Heavy,
    Helpful,
    NotUseful,
}

impl FeedbackKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Okay => "okay",
            Self::Heavy => "heavy",
            Self::Helpful => "helpful",
            Self::NotUseful => "notuseful",
        }
    }
}

/// Reactions offered on `tab`, in display order. Places takes no feedback.
#[must_use]
pub fn vocabulary(tab: Tab) -> &'static [FeedbackKind] {
    match tab {
        Tab::Routes => &[FeedbackKind::Calm, FeedbackKind::Okay, FeedbackKind::Heavy],
        Tab::Updates => &[FeedbackKind::Helpful, FeedbackKind::Okay, FeedbackKind::NotUseful],
        Tab::Places => &[],
    }
}

/// Route choice and panel at the moment of a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackContext {
    pub route_type: RouteChoice,
    pub active_tab: Tab,
}

/// A single reaction, built at submit time and handed to the store once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackEvent {
    pub kind: FeedbackKind,
    pub route_type: RouteChoice,
    pub source_tab: Tab,
    pub submitted_at: OffsetDateTime,
}

impl FeedbackEvent {
    #[must_use]
    pub fn to_record(&self) -> FeedbackRecord {
        FeedbackRecord {
            feedback: self.kind.as_str().to_owned(),
            route_type: self.route_type.as_str().to_owned(),
            active_tab: self.source_tab.as_str().to_owned(),
            timestamp: self.submitted_at,
        }
    }
}

/// Store-facing shape of a feedback event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackRecord {
    pub feedback: String,
    pub route_type: String,
    pub active_tab: String,
    pub timestamp: OffsetDateTime,
}

/// What the UI keeps after a submission: the highlight and the banner flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeedbackState {
    last_kind: Option<FeedbackKind>,
    acknowledgment_visible: bool,
}

impl FeedbackState {
    #[must_use]
    pub fn last_kind(&self) -> Option<FeedbackKind> {
        self.last_kind
    }

    #[must_use]
    pub fn acknowledgment_visible(&self) -> bool {
        self.acknowledgment_visible
    }

    pub(crate) fn acknowledge(&mut self, kind: FeedbackKind) {
        self.last_kind = Some(kind);
        self.acknowledgment_visible = true;
    }

    pub(crate) fn hide_acknowledgment(&mut self) {
        self.acknowledgment_visible = false;
    }
}

/// Optimistic, non-blocking feedback submission.
pub struct FeedbackSubmitter<R: Runtime> {
    store: Rc<dyn DocumentStore>,
    runtime: R,
    hide_timer: RefCell<Option<R::Timer>>,
}

impl<R: Runtime> FeedbackSubmitter<R> {
    pub fn new(store: Rc<dyn DocumentStore>, runtime: R) -> Self {
        Self { store, runtime, hide_timer: RefCell::new(None) }
    }

    /// Record `kind` locally, persist it in the background, and (re)start the
    /// banner window. Never blocks and never reports failure.
    pub fn submit<H: StateHandle>(&self, state: &H, kind: FeedbackKind, context: FeedbackContext) {
        let submitted_at = self.runtime.now();
        if state.update(|app| app.acknowledge_feedback(kind)).is_none() {
            log::warn!("feedback state disposed; dropping {} submission", kind.as_str());
            return;
        }

        let event = FeedbackEvent {
            kind,
            route_type: context.route_type,
            source_tab: context.active_tab,
            submitted_at,
        };
        self.persist(event);
        self.restart_acknowledgment_window(state.clone());
    }

    /// Drop the pending banner timer, if any.
    pub fn cancel_acknowledgment(&self) {
        self.hide_timer.replace(None);
    }

    fn persist(&self, event: FeedbackEvent) {
        let store = Rc::clone(&self.store);
        let record = event.to_record();
        self.runtime.spawn_detached(Box::pin(async move {
            let feedback = record.feedback.clone();
            let tab = record.active_tab.clone();
            match store.append(FEEDBACK_COLLECTION, record).await {
                Ok(()) => log::debug!("feedback saved: kind={feedback} tab={tab}"),
                Err(e) => log::error!("error saving feedback: kind={feedback} tab={tab} error={e}"),
            }
        }));
    }

    fn restart_acknowledgment_window<H: StateHandle>(&self, state: H) {
        let timer = self.runtime.schedule(
            ACKNOWLEDGMENT_WINDOW,
            Box::new(move || {
                let _ = state.update(|app| app.hide_acknowledgment());
            }),
        );
        self.hide_timer.replace(Some(timer));
    }
}
