//! Create-event route.
//!
//! The nav links here, but event creation has no API behind it yet, so the
//! page is a stub.

use leptos::prelude::*;

#[component]
pub fn CreateEventPage() -> impl IntoView {
    view! {
        <div class="create-page">
            <h1>"Create Event"</h1>
            <p>"Event creation is not open yet. Check back soon."</p>
        </div>
    }
}
