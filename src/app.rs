//! Application state and core logic

use crate::api::RegistrationApi;
use crate::state::{AppState, FormButton, FormField, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use tracing::{error, info};

/// Validation messages shown when a submission is aborted client-side
const MSG_PASSWORDS_MISMATCH: &str = "Passwords do not match";
const MSG_PASSWORD_WEAK: &str = "Password should be at least 8 characters long and include \
     at least one number, one letter (uppercase and lowercase), and one symbol";
const MSG_FIELDS_MISSING: &str = "Make sure that all fields are filled!";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the registration backend
    api: Box<dyn RegistrationApi>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    #[allow(clippy::field_reassign_with_default)]
    pub fn new(api: Box<dyn RegistrationApi>, server_url: String) -> Self {
        let mut state = AppState::default();
        state.server_url = server_url;

        Self {
            state,
            api,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status message on key press
        self.state.status_message = None;

        match self.state.current_view {
            View::Register => self.handle_register_key(key).await?,
            View::Login => self.handle_login_key(key),
        }

        Ok(())
    }

    /// Handle keys in the registration form view
    async fn handle_register_key(&mut self, key: KeyEvent) -> Result<()> {
        let active = self.state.form.active_field;
        let on_buttons = active == FormField::Buttons;

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Button row navigation and activation
            KeyCode::Left | KeyCode::Right if on_buttons => {
                self.state.form.selected_button.toggle();
            }
            KeyCode::Enter if on_buttons => match self.state.form.selected_button {
                FormButton::Register => self.submit_registration().await,
                FormButton::LogIn => self.navigate_to_login(),
            },
            // Selector fields cycle through directory options
            KeyCode::Up if active.is_selector() => self.cycle_selector(active, false),
            KeyCode::Down if active.is_selector() => self.cycle_selector(active, true),
            KeyCode::Delete if active.is_selector() => self.clear_selector(active),
            // Enter advances to the next field
            KeyCode::Enter => self.state.form.next_field(),
            // Text input
            KeyCode::Char(c) => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the login view
    fn handle_login_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            self.state.current_view = View::Register;
        }
    }

    /// Switch to the login screen
    pub fn navigate_to_login(&mut self) {
        self.state.current_view = View::Login;
    }

    /// Cycle the active selector field through its option list
    fn cycle_selector(&mut self, field: FormField, forward: bool) {
        match field {
            FormField::Country => {
                let options = crate::directory::country_names();
                if let Some(next) = cycle_option(&options, &self.state.form.country, forward) {
                    self.state.form.change_country(next);
                }
            }
            FormField::City => {
                let options = crate::directory::city_options(&self.state.form.country);
                if let Some(next) = cycle_option(&options, &self.state.form.city, forward) {
                    self.state.form.change_city(next);
                }
            }
            FormField::Industry => {
                let options = crate::directory::industry_options();
                if let Some(next) = cycle_option(&options, &self.state.form.industry, forward) {
                    self.state.form.change_industry(next);
                }
            }
            _ => {}
        }
    }

    /// Clear the active selector field
    fn clear_selector(&mut self, field: FormField) {
        match field {
            FormField::Country => self.state.form.clear_country(),
            FormField::City => self.state.form.city.clear(),
            FormField::Industry => self.state.form.industry.clear(),
            _ => {}
        }
    }

    /// Run the client-side validations and submit the form.
    ///
    /// Validation order: password match, password strength, required
    /// fields. The first failure surfaces its message and aborts with
    /// no network call. A submission already in flight ignores the
    /// request.
    pub async fn submit_registration(&mut self) {
        if self.state.submitting {
            return;
        }

        if !self.state.form.passwords_match() {
            self.push_error(MSG_PASSWORDS_MISMATCH);
            return;
        }
        if !self.state.form.password_strong() {
            self.push_error(MSG_PASSWORD_WEAK);
            return;
        }
        if !self.state.form.required_fields_filled() {
            self.push_error(MSG_FIELDS_MISSING);
            return;
        }

        let request = self.state.form.payload();
        self.state.submitting = true;
        let result = self.api.register(&request).await;
        self.state.submitting = false;

        match result {
            Ok(()) => {
                info!("company {} registered", request.company_name);
                self.state.form.clear();
                self.state.status_message = Some("Sign up successful!".to_string());
            }
            Err(err) => {
                error!("registration failed: {err}");
                self.push_error(format!("Sign up failed: {}", err.user_message()));
            }
        }
    }
}

/// Next or previous entry of `options` relative to `current`, wrapping
/// around. An unselected current value lands on the first option.
fn cycle_option<'a>(options: &[&'a str], current: &str, forward: bool) -> Option<&'a str> {
    if options.is_empty() {
        return None;
    }

    let Some(position) = options.iter().position(|o| *o == current) else {
        return Some(options[0]);
    };

    let next = if forward {
        (position + 1) % options.len()
    } else if position == 0 {
        options.len() - 1
    } else {
        position - 1
    };
    Some(options[next])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockRegistrationApi, RegistrationError};
    use crossterm::event::{KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_mock(mock: MockRegistrationApi) -> App {
        App::new(Box::new(mock), "http://test.invalid".into())
    }

    fn fill_valid_form(app: &mut App) {
        let form = &mut app.state.form;
        form.company_name = "Acme Corp".into();
        form.contact_person_full_name = "Jane Doe".into();
        form.change_country("France");
        form.change_city("Paris");
        form.change_industry("Technology");
        form.email = "jane@acme.example".into();
        form.password = "Str0ng#Pass".into();
        form.re_write_password = "Str0ng#Pass".into();
    }

    mod cycle_option_fn {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_options() {
            assert_eq!(cycle_option(&[], "x", true), None);
        }

        #[test]
        fn test_unselected_lands_on_first() {
            assert_eq!(cycle_option(&["a", "b"], "", true), Some("a"));
            assert_eq!(cycle_option(&["a", "b"], "", false), Some("a"));
        }

        #[test]
        fn test_forward_and_backward_wrap() {
            let options = ["a", "b", "c"];
            assert_eq!(cycle_option(&options, "c", true), Some("a"));
            assert_eq!(cycle_option(&options, "a", false), Some("c"));
            assert_eq!(cycle_option(&options, "a", true), Some("b"));
        }
    }

    mod validation_aborts {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_mismatched_passwords_never_call_backend() {
            let mut mock = MockRegistrationApi::new();
            mock.expect_register().times(0);

            let mut app = app_with_mock(mock);
            fill_valid_form(&mut app);
            app.state.form.re_write_password = "Different#1".into();

            app.submit_registration().await;

            assert_eq!(app.state.current_error(), Some(MSG_PASSWORDS_MISMATCH));
            // Form untouched
            assert_eq!(app.state.form.company_name, "Acme Corp");
        }

        #[tokio::test]
        async fn test_weak_password_aborts() {
            let mut mock = MockRegistrationApi::new();
            mock.expect_register().times(0);

            let mut app = app_with_mock(mock);
            fill_valid_form(&mut app);
            app.state.form.password = "weakpass".into();
            app.state.form.re_write_password = "weakpass".into();

            app.submit_registration().await;

            assert_eq!(app.state.current_error(), Some(MSG_PASSWORD_WEAK));
        }

        #[tokio::test]
        async fn test_missing_fields_abort() {
            let mut mock = MockRegistrationApi::new();
            mock.expect_register().times(0);

            let mut app = app_with_mock(mock);
            fill_valid_form(&mut app);
            app.state.form.email.clear();

            app.submit_registration().await;

            assert_eq!(app.state.current_error(), Some(MSG_FIELDS_MISSING));
        }

        #[tokio::test]
        async fn test_validation_order_match_before_strength() {
            let mut mock = MockRegistrationApi::new();
            mock.expect_register().times(0);

            let mut app = app_with_mock(mock);
            // Both weak and mismatched: the mismatch message wins
            app.state.form.password = "a".into();
            app.state.form.re_write_password = "b".into();

            app.submit_registration().await;

            assert_eq!(app.state.current_error(), Some(MSG_PASSWORDS_MISMATCH));
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_successful_submission_resets_form() {
            let mut mock = MockRegistrationApi::new();
            mock.expect_register()
                .withf(|req| req.company_name == "Acme Corp" && req.country == "France")
                .times(1)
                .returning(|_| Ok(()));

            let mut app = app_with_mock(mock);
            fill_valid_form(&mut app);

            app.submit_registration().await;

            assert!(!app.state.has_errors());
            assert_eq!(app.state.form.company_name, "");
            assert_eq!(app.state.form.password, "");
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Sign up successful!")
            );
            assert!(!app.state.submitting);
        }

        #[tokio::test]
        async fn test_rejected_submission_surfaces_message_and_keeps_form() {
            let mut mock = MockRegistrationApi::new();
            mock.expect_register()
                .times(1)
                .returning(|_| Err(RegistrationError::Rejected("Email taken".into())));

            let mut app = app_with_mock(mock);
            fill_valid_form(&mut app);

            app.submit_registration().await;

            assert_eq!(
                app.state.current_error(),
                Some("Sign up failed: Email taken")
            );
            assert_eq!(app.state.form.company_name, "Acme Corp");
            assert_eq!(app.state.form.email, "jane@acme.example");
        }

        #[tokio::test]
        async fn test_in_flight_submission_ignores_resubmit() {
            let mut mock = MockRegistrationApi::new();
            mock.expect_register().times(0);

            let mut app = app_with_mock(mock);
            fill_valid_form(&mut app);
            app.state.submitting = true;

            app.submit_registration().await;

            assert!(!app.state.has_errors());
            assert_eq!(app.state.form.company_name, "Acme Corp");
        }
    }

    mod key_handling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_tab_cycles_fields() {
            let mut app = app_with_mock(MockRegistrationApi::new());
            assert_eq!(app.state.form.active_field, FormField::CompanyName);

            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(
                app.state.form.active_field,
                FormField::ContactPersonFullName
            );

            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            assert_eq!(app.state.form.active_field, FormField::Buttons);
        }

        #[tokio::test]
        async fn test_char_input_lands_in_active_field() {
            let mut app = app_with_mock(MockRegistrationApi::new());
            app.handle_key(key(KeyCode::Char('A'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('c'))).await.unwrap();
            assert_eq!(app.state.form.company_name, "Ac");

            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert_eq!(app.state.form.company_name, "A");
        }

        #[tokio::test]
        async fn test_country_selector_cycling_sets_default_city() {
            let mut app = app_with_mock(MockRegistrationApi::new());
            app.state.form.active_field = FormField::Country;

            app.handle_key(key(KeyCode::Down)).await.unwrap();
            assert_eq!(app.state.form.country, "Australia");
            assert_eq!(app.state.form.city, "Brisbane");

            app.handle_key(key(KeyCode::Delete)).await.unwrap();
            assert_eq!(app.state.form.country, "");
            assert_eq!(app.state.form.city, "");
            assert_eq!(app.state.form.phone_number, "");
        }

        #[tokio::test]
        async fn test_city_cycling_stays_within_country() {
            let mut app = app_with_mock(MockRegistrationApi::new());
            app.state.form.change_country("France");
            app.state.form.active_field = FormField::City;

            for _ in 0..8 {
                app.handle_key(key(KeyCode::Down)).await.unwrap();
                assert!(crate::directory::city_options("France")
                    .contains(&app.state.form.city.as_str()));
            }
        }

        #[tokio::test]
        async fn test_button_row_navigates_to_login_and_back() {
            let mut app = app_with_mock(MockRegistrationApi::new());
            app.state.form.active_field = FormField::Buttons;

            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.state.form.selected_button, FormButton::LogIn);

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::Login);

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Register);
        }

        #[tokio::test]
        async fn test_error_dialog_is_modal() {
            let mut app = app_with_mock(MockRegistrationApi::new());
            app.push_error("boom");

            // Keys other than Enter/Esc are swallowed while the dialog shows
            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            assert_eq!(app.state.form.company_name, "");
            assert!(app.state.has_errors());

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(!app.state.has_errors());
        }
    }
}
