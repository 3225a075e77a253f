//! Home page: mood header, tab bar, and the active panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only while the session is authenticated. The mood is sampled
//! again whenever app state changes; there is no background clock tick. The
//! panel is keyed on a memo so it is rebuilt only when the tab changes.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use sheher::mood::{MoodDescriptor, compute};
use sheher::runtime::Runtime;
use sheher::shell::AppState;
use sheher::view::Tab;

use crate::components::mood_header::MoodHeader;
use crate::components::places_panel::PlacesPanel;
use crate::components::routes_panel::RoutesPanel;
use crate::components::tab_bar::TabBar;
use crate::components::updates_panel::UpdatesPanel;
use crate::state::app::{AppShell, ShellHandle};
use crate::util::runtime::BrowserRuntime;

#[component]
pub fn HomePage() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let shell = expect_context::<ShellHandle>();

    let mood = Signal::derive(move || -> MoodDescriptor {
        app.track();
        shell
            .with(AppShell::mood)
            .unwrap_or_else(|| compute(BrowserRuntime.now()))
    });

    let active_panel = Memo::new(move |_| app.with(AppState::active_panel));
    let panel = move || match active_panel.get() {
        Some(Tab::Routes) => view! { <RoutesPanel mood=mood/> }.into_any(),
        Some(Tab::Updates) => view! { <UpdatesPanel/> }.into_any(),
        Some(Tab::Places) => view! { <PlacesPanel/> }.into_any(),
        None => ().into_any(),
    };

    view! {
        <div
            class="home-page"
            data-mood=move || mood.get().name.as_str()
            style=move || format!("background-color: {}", mood.get().background_color)
        >
            <div class="home-page__courtyard">
                <MoodHeader mood=mood/>
                <TabBar/>
                {panel}
            </div>
        </div>
    }
}
