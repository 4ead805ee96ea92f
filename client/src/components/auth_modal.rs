//! Modal overlay hosting the login or register form.

use leptos::prelude::*;

use crate::components::login_form::LoginForm;
use crate::components::register_form::RegisterForm;
use crate::state::ui::{AuthForm, UiState};

/// Fullscreen modal shown by the nav's Login/Register entries.
/// Backdrop click, the close button, and Escape all close it.
#[component]
pub fn AuthModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = Callback::new(move |()| ui.update(UiState::close_auth));

    view! {
        <div class="auth-modal__backdrop" on:click=move |_| close.run(())>
            <div
                class="auth-modal"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        close.run(());
                    }
                }
                tabindex="0"
            >
                <div class="auth-modal__header">
                    <h2>"Welcome to WIS Club"</h2>
                    <button class="auth-modal__close" on:click=move |_| close.run(()) title="Close">
                        "✕"
                    </button>
                </div>
                <Show
                    when=move || ui.get().auth_form == AuthForm::Login
                    fallback=|| view! { <RegisterForm/> }
                >
                    <LoginForm/>
                </Show>
            </div>
        </div>
    }
}
