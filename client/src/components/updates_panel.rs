//! City updates panel: timed updates, lake and weather cards, feedback.

use leptos::prelude::*;
use sheher::view::Tab;

use crate::components::feedback_bar::FeedbackBar;
use crate::content::{CITY_UPDATES, LAKE_STATUS, NoticeCard, UPDATES_FEEDBACK_PROMPT, UPDATES_TITLE, WEATHER_NOTE};

#[component]
pub fn UpdatesPanel() -> impl IntoView {
    let updates = CITY_UPDATES
        .iter()
        .map(|update| {
            view! {
                <div class="city-update">
                    <h4 class="city-update__period">{update.period}</h4>
                    <div class="city-update__card">
                        <p class="city-update__time">{update.time}</p>
                        <p class="city-update__message">{update.message}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="panel panel--updates">
            <div class="city-updates">
                <h2>{UPDATES_TITLE}</h2>
                {updates}
            </div>
            {notice(LAKE_STATUS)}
            {notice(WEATHER_NOTE)}
            <FeedbackBar tab=Tab::Updates prompt=UPDATES_FEEDBACK_PROMPT/>
        </section>
    }
}

fn notice(card: NoticeCard) -> impl IntoView {
    view! {
        <div class="notice-card">
            <h3>{card.title}</h3>
            <p>{card.message}</p>
        </div>
    }
}
