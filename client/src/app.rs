//! Root application component with the shell and context providers.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use sheher::shell::AppState;

use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::app::ShellHandle;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the state signal and the shell, then gates the single page on the
/// session flag.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app = RwSignal::new(AppState::default());
    let shell = ShellHandle::new(app);

    provide_context(app);
    provide_context(shell);

    view! {
        <Stylesheet id="leptos" href="/pkg/udaipur.css"/>
        <Title text="Udaipur"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ShellView/>
            </Routes>
        </Router>
    }
}

/// Login page until a session exists, then the home page. Keyed on a memo of
/// the session flag so other state changes do not rebuild the page.
#[component]
fn ShellView() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let authenticated = Memo::new(move |_| app.with(|a| a.session().is_authenticated()));

    move || {
        if authenticated.get() {
            view! { <HomePage/> }.into_any()
        } else {
            view! { <LoginPage/> }.into_any()
        }
    }
}
