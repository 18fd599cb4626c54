//! Registration form state and validation

use crate::directory;
use serde::Serialize;

/// Symbols accepted by the password strength rule.
const PASSWORD_SYMBOLS: &str = "#?!@$%^&*-";

/// Form fields in tab order. The button row is part of the cycle so
/// Tab reaches the Register / Log In buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    CompanyName,
    ContactPersonFullName,
    Country,
    City,
    PhoneNumber,
    Industry,
    Email,
    Password,
    ReWritePassword,
    Buttons,
}

impl FormField {
    pub const COUNT: usize = 10;

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::CompanyName,
            1 => Self::ContactPersonFullName,
            2 => Self::Country,
            3 => Self::City,
            4 => Self::PhoneNumber,
            5 => Self::Industry,
            6 => Self::Email,
            7 => Self::Password,
            8 => Self::ReWritePassword,
            _ => Self::Buttons,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::CompanyName => 0,
            Self::ContactPersonFullName => 1,
            Self::Country => 2,
            Self::City => 3,
            Self::PhoneNumber => 4,
            Self::Industry => 5,
            Self::Email => 6,
            Self::Password => 7,
            Self::ReWritePassword => 8,
            Self::Buttons => 9,
        }
    }

    /// Selector fields are driven by Up/Down over directory options
    /// rather than character input.
    pub fn is_selector(self) -> bool {
        matches!(self, Self::Country | Self::City | Self::Industry)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CompanyName => "Company Name",
            Self::ContactPersonFullName => "Contact Person Full Name",
            Self::Country => "Country",
            Self::City => "City",
            Self::PhoneNumber => "Phone Number",
            Self::Industry => "Industry",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ReWritePassword => "Re-write Password",
            Self::Buttons => "Actions",
        }
    }
}

/// Buttons on the form's button row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Register,
    LogIn,
}

impl FormButton {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Register => Self::LogIn,
            Self::LogIn => Self::Register,
        };
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::LogIn => "Log In",
        }
    }
}

/// JSON payload sent to the registration endpoint. Key names follow
/// the backend contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub company_name: String,
    pub contact_person_full_name: String,
    pub country: String,
    pub city: String,
    pub phone_number: String,
    pub industry: String,
    pub email: String,
    pub password: String,
    pub re_write_password: String,
}

/// State for the company registration form.
///
/// Created empty at startup, mutated by key events, reset to empty
/// after a successful submission. Validation never runs on edit, only
/// when a submission is attempted.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub company_name: String,
    pub contact_person_full_name: String,
    pub country: String,
    pub city: String,
    pub phone_number: String,
    pub industry: String,
    pub email: String,
    pub password: String,
    pub re_write_password: String,

    pub active_field: FormField,
    pub selected_button: FormButton,
}

impl RegistrationForm {
    /// Move to the next form field (wraps around).
    pub fn next_field(&mut self) {
        self.active_field = FormField::from_index((self.active_field.index() + 1) % FormField::COUNT);
    }

    /// Move to the previous form field (wraps around).
    pub fn prev_field(&mut self) {
        let index = self.active_field.index();
        self.active_field = if index == 0 {
            FormField::from_index(FormField::COUNT - 1)
        } else {
            FormField::from_index(index - 1)
        };
    }

    /// Handle character input for the active field.
    ///
    /// Selector fields ignore characters; the phone field accepts only
    /// digits and common phone punctuation.
    pub fn input_char(&mut self, c: char) {
        match self.active_field {
            FormField::CompanyName => self.company_name.push(c),
            FormField::ContactPersonFullName => self.contact_person_full_name.push(c),
            FormField::PhoneNumber => {
                if c.is_ascii_digit() || matches!(c, '+' | ' ' | '-') {
                    self.phone_number.push(c);
                }
            }
            FormField::Email => self.email.push(c),
            FormField::Password => self.password.push(c),
            FormField::ReWritePassword => self.re_write_password.push(c),
            FormField::Country | FormField::City | FormField::Industry | FormField::Buttons => {}
        }
    }

    /// Handle backspace for the active field.
    pub fn backspace(&mut self) {
        match self.active_field {
            FormField::CompanyName => {
                self.company_name.pop();
            }
            FormField::ContactPersonFullName => {
                self.contact_person_full_name.pop();
            }
            FormField::PhoneNumber => {
                self.phone_number.pop();
            }
            FormField::Email => {
                self.email.pop();
            }
            FormField::Password => {
                self.password.pop();
            }
            FormField::ReWritePassword => {
                self.re_write_password.pop();
            }
            FormField::Country | FormField::City | FormField::Industry | FormField::Buttons => {}
        }
    }

    /// Set the country and derive the dependent fields.
    ///
    /// The city resets to the first entry of the new country's sorted
    /// city list (empty when the country has none). An empty phone
    /// field is seeded with the country's dial code prefix.
    pub fn change_country(&mut self, country: &str) {
        self.country = country.to_string();
        self.city = directory::city_options(country)
            .first()
            .map(|c| c.to_string())
            .unwrap_or_default();

        if self.phone_number.is_empty() {
            if let Some(code) = directory::dial_code(country) {
                self.phone_number = format!("+{code} ");
            }
        }
    }

    /// Clear the country selection. The dependent city and the phone
    /// number are cleared with it.
    pub fn clear_country(&mut self) {
        self.country.clear();
        self.city.clear();
        self.phone_number.clear();
    }

    pub fn change_city(&mut self, city: &str) {
        self.city = city.to_string();
    }

    pub fn change_industry(&mut self, industry: &str) {
        self.industry = industry.to_string();
    }

    /// True iff the two password fields are byte-equal.
    pub fn passwords_match(&self) -> bool {
        self.password == self.re_write_password
    }

    /// Minimum-strength rule: at least 8 characters with at least one
    /// uppercase letter, one lowercase letter, one digit, and one
    /// symbol from `#?!@$%^&*-`.
    pub fn password_strong(&self) -> bool {
        self.password.chars().count() >= 8
            && self.password.chars().any(|c| c.is_ascii_uppercase())
            && self.password.chars().any(|c| c.is_ascii_lowercase())
            && self.password.chars().any(|c| c.is_ascii_digit())
            && self.password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
    }

    /// All fields except the two passwords must be non-empty before a
    /// submission is attempted.
    pub fn required_fields_filled(&self) -> bool {
        !self.company_name.is_empty()
            && !self.contact_person_full_name.is_empty()
            && !self.country.is_empty()
            && !self.city.is_empty()
            && !self.phone_number.is_empty()
            && !self.industry.is_empty()
            && !self.email.is_empty()
    }

    /// Build the wire payload from the current field values.
    pub fn payload(&self) -> RegistrationRequest {
        RegistrationRequest {
            company_name: self.company_name.clone(),
            contact_person_full_name: self.contact_person_full_name.clone(),
            country: self.country.clone(),
            city: self.city.clone(),
            phone_number: self.phone_number.clone(),
            industry: self.industry.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            re_write_password: self.re_write_password.clone(),
        }
    }

    /// Reset every field to empty and focus the first field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Display value of a field, passwords masked.
    pub fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::CompanyName => self.company_name.clone(),
            FormField::ContactPersonFullName => self.contact_person_full_name.clone(),
            FormField::Country => self.country.clone(),
            FormField::City => self.city.clone(),
            FormField::PhoneNumber => self.phone_number.clone(),
            FormField::Industry => self.industry.clone(),
            FormField::Email => self.email.clone(),
            FormField::Password => "*".repeat(self.password.chars().count()),
            FormField::ReWritePassword => "*".repeat(self.re_write_password.chars().count()),
            FormField::Buttons => String::new(),
        }
    }
}
