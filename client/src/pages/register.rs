//! Standalone register route hosting the register form.

use leptos::prelude::*;

use crate::components::register_form::RegisterForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1>"Welcome to the Alumni Network!"</h1>
                <RegisterForm/>
            </div>
        </div>
    }
}
