//! Application state module

mod app_state;
mod registration_form;

pub use app_state::*;
pub use registration_form::*;
