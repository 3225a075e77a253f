//! Greeting header with the time-of-day mood line and the profile button.

use leptos::prelude::*;
use sheher::mood::MoodDescriptor;
use sheher::shell::AppState;

use crate::components::profile_menu::ProfileMenu;
use crate::content::{GREETING, TAGLINE};
use crate::state::app::ShellHandle;

#[component]
pub fn MoodHeader(mood: Signal<MoodDescriptor>) -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let shell = expect_context::<ShellHandle>();

    let menu_open = move || app.with(|a| a.view().profile_menu_open());
    let on_profile_click = move |_| { shell.with(|s| s.toggle_profile_menu()); };

    view! {
        <header class="mood-header">
            <h1>{GREETING}</h1>
            <p class="mood-header__tagline">{TAGLINE}</p>
            <p class="mood-header__mood" style=move || format!("color: {}", mood.get().mood_accent_color)>
                {move || mood.get().mood_message}
            </p>
            <div class="mood-header__profile">
                <button
                    class="profile-button"
                    class:profile-button--open=menu_open
                    aria-label="Profile menu"
                    on:click=on_profile_click
                >
                    "👤"
                </button>
                <Show when=menu_open>
                    <ProfileMenu/>
                </Show>
            </div>
        </header>
    }
}
