//! Events listing page.
//!
//! The listing is a static table rendered as a card grid; there is no event
//! API yet. Dates are filled in client-side so the cards read as scheduled
//! today.

use leptos::prelude::*;

use crate::components::event_card::EventCard;

/// Static listing entry. Display-only.
#[derive(Clone, Copy)]
struct EventInfo {
    title: &'static str,
    host: &'static str,
    start_time: &'static str,
    location: &'static str,
    details_url: &'static str,
    image: &'static str,
}

const EVENTS: &[EventInfo] = &[
    EventInfo {
        title: "Professional Development",
        host: "Cathy Gordio",
        start_time: "4:00 PM",
        location: "GITC 3600",
        details_url: "/events/professional-development",
        image: "https://source.unsplash.com/1600x900/?Professional",
    },
    EventInfo {
        title: "Tech Trends 2024",
        host: "John Doe",
        start_time: "2:00 PM",
        location: "Tech Hall",
        details_url: "/events/tech-trends",
        image: "https://source.unsplash.com/1600x900/?Technology",
    },
    EventInfo {
        title: "Design Thinking",
        host: "Alice Johnson",
        start_time: "1:00 PM",
        location: "Design Studio",
        details_url: "/events/design-thinking",
        image: "https://source.unsplash.com/1600x900/?Design",
    },
    EventInfo {
        title: "Career Fair Prep",
        host: "Miguel Santos",
        start_time: "3:00 PM",
        location: "Campus Center 220",
        details_url: "/events/career-fair-prep",
        image: "https://source.unsplash.com/1600x900/?Career",
    },
    EventInfo {
        title: "Alumni Networking Night",
        host: "Priya Raman",
        start_time: "6:30 PM",
        location: "Atrium Lounge",
        details_url: "/events/networking-night",
        image: "https://source.unsplash.com/1600x900/?Networking",
    },
    EventInfo {
        title: "Startup Pitch Night",
        host: "Dana Webb",
        start_time: "5:00 PM",
        location: "Innovation Lab",
        details_url: "/events/startup-pitch-night",
        image: "https://source.unsplash.com/1600x900/?Startup",
    },
];

/// Today's date label, browser-formatted. Empty on the server; an effect
/// fills it in after hydration so SSR output stays deterministic.
fn today_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_date_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

#[component]
pub fn EventsPage() -> impl IntoView {
    let date = RwSignal::new(String::new());
    Effect::new(move || date.set(today_label()));

    view! {
        <div class="events-page">
            <div class="events-page__grid">
                {EVENTS
                    .iter()
                    .map(|event| {
                        view! {
                            <EventCard
                                title=event.title.to_owned()
                                host=event.host.to_owned()
                                start_time=event.start_time.to_owned()
                                location=event.location.to_owned()
                                details_url=event.details_url.to_owned()
                                date=date
                                image=event.image.to_owned()
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
