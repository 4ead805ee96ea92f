//! Local UI chrome state (auth modal, theme).

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which form the auth modal is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthForm {
    #[default]
    Login,
    Register,
}

/// UI state for the nav modal and dark mode.
///
/// The modal is a plain open/closed toggle plus a single "which form" flag;
/// there are no transition guards.
#[derive(Clone, Debug)]
pub struct UiState {
    pub dark_mode: bool,
    pub auth_modal_open: bool,
    pub auth_form: AuthForm,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            auth_modal_open: false,
            auth_form: AuthForm::Login,
        }
    }
}

impl UiState {
    /// Open the modal showing the given form. Re-opening with another form
    /// just switches the flag.
    pub fn open_auth(&mut self, form: AuthForm) {
        self.auth_form = form;
        self.auth_modal_open = true;
    }

    /// Close the modal. The form flag is kept so re-opening restores it.
    pub fn close_auth(&mut self) {
        self.auth_modal_open = false;
    }
}
