use async_trait::async_trait;
use std::error::Error;

use super::types::EmailMessage;

/// Failure reported by the transport. The text is surfaced to clients as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendError {
  message: String,
}

impl SendError {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl Error for SendError {}

impl std::fmt::Display for SendError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.message)
  }
}

impl From<lettre::transport::smtp::Error> for SendError {
  fn from(err: lettre::transport::smtp::Error) -> Self {
    SendError::new(err.to_string())
  }
}

impl From<lettre::error::Error> for SendError {
  fn from(err: lettre::error::Error) -> Self {
    SendError::new(err.to_string())
  }
}

impl From<lettre::address::AddressError> for SendError {
  fn from(err: lettre::address::AddressError) -> Self {
    SendError::new(err.to_string())
  }
}

/// Outbound mail capability, registered in the environment bindings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
  async fn send(&self, message: EmailMessage) -> Result<(), SendError>;
}
