//! Standalone login route hosting the login form.

use leptos::prelude::*;

use crate::components::login_form::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1>"Welcome to WIS Club"</h1>
                <LoginForm/>
            </div>
        </div>
    }
}
