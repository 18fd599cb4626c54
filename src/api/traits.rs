//! Trait abstraction for the registration client to enable mocking in tests

use super::error::RegistrationError;
use crate::state::RegistrationRequest;
use async_trait::async_trait;

/// Operations against the registration backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Submit a company registration
    async fn register(&self, request: &RegistrationRequest) -> Result<(), RegistrationError>;
}
