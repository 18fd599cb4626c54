//! Application state definitions

use super::registration_form::RegistrationForm;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Company registration form
    #[default]
    Register,
    /// Pointer to the login flow
    Login,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Form state
    pub form: RegistrationForm,

    // Submission state
    pub submitting: bool,

    // UI state
    pub server_url: String,
    pub status_message: Option<String>,
    errors: Vec<String>,
}

impl AppState {
    /// Push an error message onto the error queue. The front of the
    /// queue is shown as a modal dialog until dismissed.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Dismiss the currently shown error
    pub fn dismiss_error(&mut self) {
        if !self.errors.is_empty() {
            self.errors.remove(0);
        }
    }

    /// Whether an error dialog is currently shown
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}
