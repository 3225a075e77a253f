//! One-tap feedback buttons plus the transient thank-you banner.

use leptos::prelude::*;
use sheher::feedback::{FeedbackKind, vocabulary};
use sheher::shell::AppState;
use sheher::view::Tab;

use crate::content::{THANK_YOU, feedback_label};
use crate::state::app::ShellHandle;

#[component]
pub fn FeedbackBar(tab: Tab, prompt: &'static str) -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let shell = expect_context::<ShellHandle>();

    let acknowledged = move || app.with(|a| a.feedback().acknowledgment_visible());

    let buttons = vocabulary(tab)
        .iter()
        .copied()
        .map(|kind: FeedbackKind| {
            let (emoji, caption) = feedback_label(kind);
            let selected = move || app.with(|a| a.feedback().last_kind() == Some(kind));
            view! {
                <button
                    class="feedback-bar__choice"
                    class:feedback-bar__choice--selected=selected
                    data-kind=kind.as_str()
                    on:click=move |_| { shell.with(|s| s.submit_feedback(kind)); }
                >
                    <span class="feedback-bar__emoji">{emoji}</span>
                    <span class="feedback-bar__caption">{caption}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="feedback-bar">
            <h3>{prompt}</h3>
            <div class="feedback-bar__choices">{buttons}</div>
            <Show when=acknowledged>
                <p class="feedback-bar__thanks" role="status">{THANK_YOU}</p>
            </Show>
        </section>
    }
}
