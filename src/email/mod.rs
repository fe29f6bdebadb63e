//! Email construction and delivery
//!
//! MIME messages are built with lettre and handed to an [`EmailSender`],
//! the capability that performs the actual network send.

mod sender;
mod service;
mod types;

pub use sender::{EmailSender, SendError};
pub use service::SmtpSender;
pub use types::{
  BodyPart, EmailMessage, Identity, MessageBuildError, OutboundMessage, SmtpConfig, DEFAULT_BODY, DEFAULT_SUBJECT,
};

#[cfg(test)]
pub use sender::MockEmailSender;
