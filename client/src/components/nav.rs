//! Primary navigation menu with the login/register modal triggers.
//!
//! DESIGN
//! ======
//! The menu is a static ordered table. Route entries push a client-side
//! navigation; the Login/Register entries flip the form flag and open the
//! modal overlay instead of leaving the page.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::auth_modal::AuthModal;
use crate::state::ui::{AuthForm, UiState};

/// What clicking a nav entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Navigate to the entry's path.
    Route,
    /// Open the auth modal showing the given form.
    Modal(AuthForm),
}

/// Static entry in the primary navigation menu. Defined once, never mutated.
#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub title: &'static str,
    pub path: &'static str,
    pub target: NavTarget,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { title: "Home", path: "/", target: NavTarget::Route },
    NavItem { title: "Find Events", path: "/events", target: NavTarget::Route },
    NavItem { title: "Create Event", path: "/create", target: NavTarget::Route },
    NavItem { title: "Profile", path: "/profile", target: NavTarget::Route },
    NavItem { title: "Login", path: "#login", target: NavTarget::Modal(AuthForm::Login) },
    NavItem { title: "Register", path: "#register", target: NavTarget::Modal(AuthForm::Register) },
];

/// Index of the entry whose path equals the current pathname.
/// Modal entries carry hash paths, so they are never the active tab.
pub(crate) fn active_index(pathname: &str) -> Option<usize> {
    NAV_ITEMS.iter().position(|item| item.path == pathname)
}

/// Tab-style navigation bar shown on every page, plus the auth modal.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    // Pick up the stored theme preference once the browser is driving.
    Effect::new(move || {
        let enabled = crate::util::theme::read_preference();
        crate::util::theme::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <nav class="nav">
            <div class="nav__tabs" role="tablist">
                {NAV_ITEMS
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let navigate = navigate.clone();
                        view! {
                            <button
                                class="nav__tab"
                                class:nav__tab--active=move || active_index(&pathname.get()) == Some(index)
                                on:click=move |_| match item.target {
                                    NavTarget::Route => navigate(item.path, NavigateOptions::default()),
                                    NavTarget::Modal(form) => ui.update(|u| u.open_auth(form)),
                                }
                            >
                                {item.title}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    class="nav__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::theme::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
            </div>
            <Show when=move || ui.get().auth_modal_open>
                <AuthModal/>
            </Show>
        </nav>
    }
}
