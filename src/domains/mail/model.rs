use axum::http::StatusCode;
use serde::Serialize;

use crate::email::{BodyPart, Identity, OutboundMessage, DEFAULT_BODY, DEFAULT_SUBJECT};

pub const DEFAULT_BINDING: &str = "SEB";
pub const SUCCESS_MESSAGE: &str = "Mail sent successfully";
pub const FAILURE_STATUS_MESSAGE: &str = "Error sending mail";

/// Outcome of one send attempt, serialized as the response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SendResult {
  Failed {
    status: u16,
    error: bool,
    #[serde(rename = "statusMessage")]
    status_message: String,
    message: String,
  },
  Sent {
    status: u16,
    message: String,
  },
}

impl SendResult {
  pub fn sent() -> Self {
    SendResult::Sent {
      status: StatusCode::OK.as_u16(),
      message: SUCCESS_MESSAGE.to_string(),
    }
  }

  pub fn failed(message: impl Into<String>) -> Self {
    SendResult::Failed {
      status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
      error: true,
      status_message: FAILURE_STATUS_MESSAGE.to_string(),
      message: message.into(),
    }
  }
}

/// Identities used for every outgoing message, plus the name of the sender binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
  pub binding: String,
  pub sender: Identity,
  pub recipient: Identity,
  pub envelope_from: String,
  pub envelope_to: String,
}

impl Default for MailConfig {
  fn default() -> Self {
    MailConfig {
      binding: DEFAULT_BINDING.to_string(),
      sender: Identity::new("Sender", "sender@example.com"),
      recipient: Identity::new("Recipient", "recipient@example.com"),
      envelope_from: "sender@example.com".to_string(),
      envelope_to: "recipient@example.com".to_string(),
    }
  }
}

impl MailConfig {
  pub fn outbound_message(&self) -> OutboundMessage {
    OutboundMessage {
      sender: self.sender.clone(),
      recipient: self.recipient.clone(),
      subject: DEFAULT_SUBJECT.to_string(),
      body: BodyPart::plain_text(DEFAULT_BODY),
    }
  }
}
