//! Login page: the only surface reachable without a session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use sheher::auth::REJECTION_MESSAGE;

use crate::content::{DEMO_CREDENTIALS_HINT, GREETING, LOGIN_FOOTER, LOGIN_INVITE, TAGLINE};
use crate::state::app::ShellHandle;

const MISSING_FIELDS_MESSAGE: &str = "Naam aur password dono bharo.";

/// Both fields are required; values are passed to the gate exactly as typed.
pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<(), &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let shell = expect_context::<ShellHandle>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if let Err(msg) = validate_login_input(&user, &pass) {
            message.set(Some(msg));
            return;
        }
        match shell.with(|s| s.login(&user, &pass)) {
            Some(Ok(())) => message.set(None),
            Some(Err(_)) | None => {
                password.set(String::new());
                message.set(Some(REJECTION_MESSAGE));
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-page__welcome">
                <h1>{GREETING}</h1>
                <p class="login-page__tagline">{TAGLINE}</p>
                <p class="login-page__invite">{LOGIN_INVITE}</p>
            </div>
            <div class="login-card">
                <form class="login-form" on:submit=on_submit>
                    <label for="username">"Naam"</label>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        placeholder="Apno naam likho"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="Password daalo"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Andar aao"
                    </button>
                </form>
                <Show when=move || message.get().is_some()>
                    <p class="login-message" role="alert">
                        {move || message.get().unwrap_or_default()}
                    </p>
                </Show>
                <p class="login-card__hint">{DEMO_CREDENTIALS_HINT}</p>
            </div>
            <p class="login-page__footer">{LOGIN_FOOTER}</p>
        </div>
    }
}
