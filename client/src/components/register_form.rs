//! Register form bound to the registration submit action.

#[cfg(test)]
#[path = "register_form_test.rs"]
mod register_form_test;

use leptos::prelude::*;
use wire::{ActionResult, RegistrationFields};

/// Feedback shown under the register button: the API's `detail` messages
/// when it sent any, otherwise the raw result dump. Nothing is shown before
/// the first submission.
pub(crate) fn registration_feedback(result: &ActionResult) -> String {
    if result.is_empty() {
        return String::new();
    }
    let line = result.feedback_line();
    if line.is_empty() { result.dump() } else { line }
}

/// Name/email/nickname/password form. The remaining profile fields of the
/// registration payload are placeholder constants filled in by `wire`.
#[component]
pub fn RegisterForm() -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let nickname = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let result = RwSignal::new(ActionResult::default());
    let transport_error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let fields = RegistrationFields {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            nickname: nickname.get(),
            password: password.get(),
        };
        busy.set(true);
        transport_error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let prev = result.get_untracked();
            let session = crate::util::session::BrowserSession;
            match crate::net::api::submit_registration(&prev, fields, &session).await {
                Ok(next) => result.set(next),
                Err(e) => transport_error.set(format!("Registration failed: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="auth-form auth-form--register" on:submit=on_submit>
            <div class="auth-form__row">
                <input
                    class="auth-form__input"
                    type="text"
                    name="fname"
                    placeholder="First Name"
                    prop:value=move || first_name.get()
                    on:input=move |ev| first_name.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="text"
                    name="lname"
                    placeholder="Last Name"
                    prop:value=move || last_name.get()
                    on:input=move |ev| last_name.set(event_target_value(&ev))
                />
            </div>
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
                type="text"
                name="username"
                placeholder="Username"
                prop:value=move || nickname.get()
                on:input=move |ev| nickname.set(event_target_value(&ev))
            />
            <input
                class="auth-form__input"
                type="password"
                name="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <label class="auth-form__switch">
                "Are you a professional looking to provide lectures"
                <input type="checkbox" name="professional"/>
            </label>
            <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                "Continue"
            </button>
            <p class="auth-form__feedback">{move || registration_feedback(&result.get())}</p>
            <Show when=move || !transport_error.get().is_empty()>
                <p class="auth-form__error">{move || transport_error.get()}</p>
            </Show>
        </form>
    }
}
