use super::*;

#[test]
fn toggle_flips_the_preference() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn read_preference_defaults_to_light_off_browser() {
    // Without a browser environment there is no stored preference.
    assert!(!read_preference());
}
