//! Profile dropdown. Every item closes it; logout also ends the session.

use leptos::prelude::*;
use sheher::shell::AppState;
use sheher::view::MenuItem;

use crate::state::app::ShellHandle;

#[component]
pub fn ProfileMenu() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let shell = expect_context::<ShellHandle>();

    let user_name = move || app.with(|a| a.session().user_name().to_owned());
    let choose = move |item: MenuItem| move |_| { shell.with(|s| s.choose_menu_item(item)); };

    view! {
        <div class="profile-menu" role="menu">
            <div class="profile-menu__user">
                <p class="profile-menu__greeting">"Namaskar"</p>
                <p class="profile-menu__name">{user_name}</p>
            </div>
            <div class="profile-menu__items">
                <button class="profile-menu__item" role="menuitem" on:click=choose(MenuItem::Profile)>
                    "Profile"
                </button>
                <button class="profile-menu__item" role="menuitem" on:click=choose(MenuItem::Settings)>
                    "Settings"
                </button>
                <div class="profile-menu__divider"></div>
                <button
                    class="profile-menu__item profile-menu__item--logout"
                    role="menuitem"
                    on:click=choose(MenuItem::Logout)
                >
                    "Logout"
                </button>
            </div>
        </div>
    }
}
