use super::*;

#[test]
fn nav_table_lists_the_six_fixed_entries_in_order() {
    let titles: Vec<&str> = NAV_ITEMS.iter().map(|item| item.title).collect();
    assert_eq!(
        titles,
        ["Home", "Find Events", "Create Event", "Profile", "Login", "Register"]
    );

    let paths: Vec<&str> = NAV_ITEMS.iter().map(|item| item.path).collect();
    assert_eq!(paths, ["/", "/events", "/create", "/profile", "#login", "#register"]);
}

#[test]
fn route_entries_navigate_and_auth_entries_open_the_modal() {
    assert_eq!(NAV_ITEMS[0].target, NavTarget::Route);
    assert_eq!(NAV_ITEMS[1].target, NavTarget::Route);
    assert_eq!(NAV_ITEMS[2].target, NavTarget::Route);
    assert_eq!(NAV_ITEMS[3].target, NavTarget::Route);
    assert_eq!(NAV_ITEMS[4].target, NavTarget::Modal(AuthForm::Login));
    assert_eq!(NAV_ITEMS[5].target, NavTarget::Modal(AuthForm::Register));
}

#[test]
fn active_index_matches_the_current_pathname() {
    assert_eq!(active_index("/"), Some(0));
    assert_eq!(active_index("/events"), Some(1));
    assert_eq!(active_index("/profile"), Some(3));
    assert_eq!(active_index("/unknown"), None);
}

#[test]
fn modal_entries_are_never_the_active_tab() {
    // Pathnames never carry the hash, so hash paths cannot match.
    assert_eq!(active_index("/login"), None);
    assert_eq!(active_index("/register"), None);
}
