//! Login form bound to the login submit action.

use leptos::prelude::*;
use wire::{ActionResult, LoginCredentials};

/// Email + password form. Submits as-is — validation is the server's job —
/// and renders the API's `detail` messages under the button.
#[component]
pub fn LoginForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let result = RwSignal::new(ActionResult::default());
    let transport_error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = LoginCredentials {
            email: email.get(),
            password: password.get(),
        };
        busy.set(true);
        transport_error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let prev = result.get_untracked();
            let session = crate::util::session::BrowserSession;
            match crate::net::api::submit_login(&prev, credentials, &session).await {
                Ok(next) => result.set(next),
                Err(e) => transport_error.set(format!("Login failed: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <input
                class="auth-form__input"
                type="email"
                name="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class="auth-form__input"
                type="password"
                name="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                "Login"
            </button>
            <p class="auth-form__feedback">{move || result.get().feedback_line()}</p>
            <Show when=move || !transport_error.get().is_empty()>
                <p class="auth-form__error">{move || transport_error.get()}</p>
            </Show>
        </form>
    }
}
