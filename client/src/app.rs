//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav::NavBar;
use crate::pages::{
    create_event::CreateEventPage, events::EventsPage, home::HomePage, login::LoginPage,
    profile::ProfilePage, register::RegisterPage,
};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI state context and sets up client-side routing.
/// The nav bar lives inside the router so every page gets the same tabs
/// and the login/register modal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/wisclub.css"/>
        <Title text="Alumni Network"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("events") view=EventsPage/>
                <Route path=StaticSegment("create") view=CreateEventPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
            </Routes>
        </Router>
    }
}
