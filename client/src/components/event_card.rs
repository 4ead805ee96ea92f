//! Reusable card component for entries on the events listing.

use leptos::prelude::*;

/// Display-only event card. Everything it shows comes in as props; there is
/// no lifecycle beyond the static listing.
#[component]
pub fn EventCard(
    title: String,
    host: String,
    start_time: String,
    location: String,
    details_url: String,
    #[prop(into)] date: Signal<String>,
    image: String,
) -> impl IntoView {
    let alt = format!("{title} event image");

    view! {
        <div class="event-card">
            <img class="event-card__image" src=image alt=alt/>
            <div class="event-card__body">
                <h3 class="event-card__title">{title}</h3>
                <p class="event-card__date">{move || date.get()}</p>
                <p class="event-card__time">{start_time}</p>
                <p class="event-card__location">{location}</p>
                <p class="event-card__host">{host}</p>
                <a class="event-card__details" href=details_url>
                    "Details"
                </a>
            </div>
        </div>
    }
}
