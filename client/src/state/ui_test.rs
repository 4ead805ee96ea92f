use super::*;

#[test]
fn default_state_starts_closed_on_login() {
    let ui = UiState::default();
    assert!(!ui.auth_modal_open);
    assert_eq!(ui.auth_form, AuthForm::Login);
    assert!(!ui.dark_mode);
}

#[test]
fn open_auth_sets_flag_and_opens() {
    let mut ui = UiState::default();
    ui.open_auth(AuthForm::Register);
    assert!(ui.auth_modal_open);
    assert_eq!(ui.auth_form, AuthForm::Register);
}

#[test]
fn reopening_with_other_form_switches_flag() {
    let mut ui = UiState::default();
    ui.open_auth(AuthForm::Register);
    ui.open_auth(AuthForm::Login);
    assert!(ui.auth_modal_open);
    assert_eq!(ui.auth_form, AuthForm::Login);
}

#[test]
fn close_auth_keeps_the_form_flag() {
    let mut ui = UiState::default();
    ui.open_auth(AuthForm::Register);
    ui.close_auth();
    assert!(!ui.auth_modal_open);
    assert_eq!(ui.auth_form, AuthForm::Register);
}
