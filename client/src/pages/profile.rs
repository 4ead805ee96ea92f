//! Profile route — the redirect target of a successful login.
//!
//! Session status is derived from the `access_token` cookie the login
//! action sets. Cookie reads only happen in the browser, so the signed-out
//! view is what the server renders.

use leptos::prelude::*;

use crate::util::session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let token = RwSignal::new(None::<String>);
    Effect::new(move || token.set(session::read_cookie(crate::net::api::ACCESS_TOKEN_COOKIE)));

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <Show
                when=move || token.get().is_some()
                fallback=|| view! { <p>"Log in to see your profile."</p> }
            >
                <p>"You are signed in."</p>
            </Show>
        </div>
    }
}
