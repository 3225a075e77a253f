//! Three-way tab bar bound to the active panel.

use leptos::prelude::*;
use sheher::shell::AppState;
use sheher::view::Tab;

use crate::content::tab_label;
use crate::state::app::ShellHandle;

#[component]
pub fn TabBar() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let shell = expect_context::<ShellHandle>();

    let tabs = Tab::ALL
        .into_iter()
        .map(|tab| {
            let is_active = move || app.with(|a| a.view().active_tab() == tab);
            view! {
                <button
                    class="tab-bar__tab"
                    class:tab-bar__tab--active=is_active
                    role="tab"
                    aria-selected=move || if is_active() { "true" } else { "false" }
                    on:click=move |_| { shell.with(|s| s.select_tab(tab)); }
                >
                    {tab_label(tab)}
                </button>
            }
        })
        .collect_view();

    view! { <nav class="tab-bar" role="tablist">{tabs}</nav> }
}
