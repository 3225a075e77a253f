//! Heritage places panel. Display only; it offers no feedback.

use leptos::prelude::*;

use crate::content::{HERITAGE_PLACES, PLACES_TITLE, VISIT_TIP};

#[component]
pub fn PlacesPanel() -> impl IntoView {
    let places = HERITAGE_PLACES
        .iter()
        .map(|place| {
            view! {
                <article class="place-card">
                    <h3>{place.name}</h3>
                    <p class="place-card__description">{place.description}</p>
                    <p class="place-card__tagline">{place.tagline}</p>
                    <span class="place-card__timings">{place.timings}</span>
                </article>
            }
        })
        .collect_view();

    view! {
        <section class="panel panel--places">
            <h2>{PLACES_TITLE}</h2>
            <div class="place-list">{places}</div>
            <p class="visit-tip">{VISIT_TIP}</p>
        </section>
    }
}
