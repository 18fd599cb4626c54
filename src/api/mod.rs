//! Client module for the registration backend

mod client;
mod error;
mod traits;

pub use client::{RegistrationClient, DEFAULT_SERVER_URL};
pub use error::RegistrationError;
pub use traits::RegistrationApi;

#[cfg(test)]
pub use traits::MockRegistrationApi;
