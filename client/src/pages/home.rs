//! Landing page with the hero banner.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-hero">
            <img class="home-hero__image" src="/images/alumni-hero.png" alt="Alumni Network"/>
            <h1 class="home-hero__heading">"Welcome to the Alumni Network!"</h1>
            <a class="home-hero__cta" href="/events">
                "Find Your Next Event"
            </a>
        </div>
    }
}
