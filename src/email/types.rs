use lettre::{
  message::{header::ContentType, Mailbox, SinglePart},
  Address, Message,
};
use std::error::Error;

use crate::impl_service_error_conversions;

pub const DEFAULT_SUBJECT: &str = "An email generated in a worker";
pub const DEFAULT_BODY: &str = "Congratulations, you just sent an email from a worker.";

#[derive(Debug, Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
}

/// Transport envelope: SMTP-level sender and recipient plus the serialized message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
  pub from: String,
  pub to: String,
  pub raw: Vec<u8>,
}

impl EmailMessage {
  pub fn new(from: impl Into<String>, to: impl Into<String>, raw: Vec<u8>) -> Self {
    EmailMessage {
      from: from.into(),
      to: to.into(),
      raw,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
  pub name: String,
  pub addr: String,
}

impl Identity {
  pub fn new(name: impl Into<String>, addr: impl Into<String>) -> Self {
    Identity {
      name: name.into(),
      addr: addr.into(),
    }
  }

  fn to_mailbox(&self) -> Result<Mailbox, MessageBuildError> {
    let address: Address = self.addr.parse()?;
    let name = (!self.name.is_empty()).then(|| self.name.clone());
    Ok(Mailbox::new(name, address))
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyPart {
  pub content_type: String,
  pub data: String,
}

impl BodyPart {
  pub fn plain_text(data: impl Into<String>) -> Self {
    BodyPart {
      content_type: "text/plain".to_string(),
      data: data.into(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
  pub sender: Identity,
  pub recipient: Identity,
  pub subject: String,
  pub body: BodyPart,
}

impl OutboundMessage {
  /// Renders the message as RFC 5322 bytes ready for [`EmailMessage::raw`].
  pub fn to_raw(&self) -> Result<Vec<u8>, MessageBuildError> {
    let content_type = ContentType::parse(&self.body.content_type)
      .map_err(|_| MessageBuildError::Malformed(format!("invalid content type: {}", self.body.content_type)))?;

    let part = SinglePart::builder()
      .header(content_type)
      .body(self.body.data.clone());

    let message = Message::builder()
      .from(self.sender.to_mailbox()?)
      .to(self.recipient.to_mailbox()?)
      .subject(&self.subject)
      .singlepart(part)?;

    Ok(message.formatted())
  }
}

#[derive(Debug)]
pub enum MessageBuildError {
  InvalidAddress(String),
  Malformed(String),
}

impl Error for MessageBuildError {}

impl std::fmt::Display for MessageBuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MessageBuildError::InvalidAddress(msg) => write!(f, "Invalid Address: {}", msg),
      MessageBuildError::Malformed(msg) => write!(f, "Malformed Message: {}", msg),
    }
  }
}

impl_service_error_conversions!(MessageBuildError, Malformed, InvalidAddress);
