//! Registration client errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Rejected(String),
}

impl RegistrationError {
    /// Message suitable for the user-facing error dialog. Transport
    /// errors collapse to a generic message; server rejections carry
    /// the server's own message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(_) => "Network error".to_string(),
            Self::Rejected(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_user_message_is_server_message() {
        let err = RegistrationError::Rejected("Email taken".into());
        assert_eq!(err.user_message(), "Email taken");
        assert_eq!(err.to_string(), "Email taken");
    }
}
