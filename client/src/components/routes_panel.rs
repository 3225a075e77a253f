//! Routes panel: fast/calm choice, map placeholder, narrator card, feedback.

use leptos::prelude::*;
use sheher::mood::MoodDescriptor;
use sheher::shell::AppState;
use sheher::view::{RouteChoice, Tab};

use crate::components::feedback_bar::FeedbackBar;
use crate::content::{NARRATOR_TITLE, ROUTES_FEEDBACK_PROMPT, route_label, route_narration};
use crate::state::app::ShellHandle;

#[component]
pub fn RoutesPanel(mood: Signal<MoodDescriptor>) -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let shell = expect_context::<ShellHandle>();

    let route = move || app.with(AppState::route);
    let choice = move |option: RouteChoice| {
        view! {
            <button
                class="route-choice"
                class:route-choice--selected=move || route() == option
                data-route=option.as_str()
                on:click=move |_| { shell.with(|s| s.select_route(option)); }
            >
                {route_label(option)}
            </button>
        }
    };

    view! {
        <section class="panel panel--routes">
            <div class="route-choices">
                {choice(RouteChoice::Fast)}
                {choice(RouteChoice::Calm)}
            </div>
            <div
                class="route-map"
                style=move || {
                    let m = mood.get();
                    format!("background-color: {}; border-color: {}", m.map_color, m.container_color)
                }
            >
                <svg class="route-map__paths" viewBox="0 0 500 400" aria-hidden="true">
                    <path
                        d="M50,200 Q150,100 250,200 T450,200"
                        stroke="#6B8CA8"
                        stroke-width="3"
                        fill="none"
                        stroke-dasharray="5,5"
                    ></path>
                    <path d="M50,220 Q180,180 250,220 T450,220" stroke="#C87F5F" stroke-width="4" fill="none"></path>
                </svg>
                <div class="narrator-card">
                    <p class="narrator-card__title">{NARRATOR_TITLE}</p>
                    <p class="narrator-card__message">{move || route_narration(route())}</p>
                </div>
            </div>
            <FeedbackBar tab=Tab::Routes prompt=ROUTES_FEEDBACK_PROMPT/>
        </section>
    }
}
