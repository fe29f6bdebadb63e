use async_trait::async_trait;
use std::error::Error;

use super::model::{MailConfig, SendResult};
use crate::{
  bindings::EnvironmentBindings,
  email::{EmailMessage, MessageBuildError},
};

/// Faults outside the send call itself. These are not turned into a [`SendResult`].
#[derive(Debug)]
pub enum MailServiceError {
  MissingBinding(String),
  MessageBuild(String),
}

impl Error for MailServiceError {}

impl std::fmt::Display for MailServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MailServiceError::MissingBinding(name) => write!(f, "Missing Binding: {}", name),
      MailServiceError::MessageBuild(msg) => write!(f, "Message Build Error: {}", msg),
    }
  }
}

impl From<MessageBuildError> for MailServiceError {
  fn from(err: MessageBuildError) -> Self {
    MailServiceError::MessageBuild(err.to_string())
  }
}

#[async_trait]
pub trait MailService: Send + Sync {
  async fn send_mail(&self, env: &EnvironmentBindings, body: &[u8]) -> Result<SendResult, MailServiceError>;
}

pub struct MailServiceImpl {
  config: MailConfig,
}

impl MailServiceImpl {
  pub fn new(config: MailConfig) -> Self {
    Self { config }
  }
}

#[async_trait]
impl MailService for MailServiceImpl {
  async fn send_mail(&self, env: &EnvironmentBindings, body: &[u8]) -> Result<SendResult, MailServiceError> {
    // The request body is accepted but not consumed.
    tracing::debug!("Received send_mail request with {} byte body", body.len());

    let sender = env
      .email_sender(&self.config.binding)
      .ok_or_else(|| MailServiceError::MissingBinding(self.config.binding.clone()))?;

    let raw = self.config.outbound_message().to_raw()?;
    let message = EmailMessage::new(&self.config.envelope_from, &self.config.envelope_to, raw);

    match sender.send(message).await {
      Ok(()) => {
        tracing::info!("Mail sent to {}", self.config.envelope_to);
        Ok(SendResult::sent())
      }
      Err(e) => {
        tracing::error!("Failed to send mail to {}: {}", self.config.envelope_to, e);
        Ok(SendResult::failed(e.to_string()))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::email::{Identity, MockEmailSender, SendError, DEFAULT_BODY};
  use mockall::predicate;
  use std::sync::Arc;

  fn bindings_with(sender: MockEmailSender) -> EnvironmentBindings {
    EnvironmentBindings::new().with_sender("SEB", Arc::new(sender))
  }

  #[tokio::test]
  async fn test_send_mail_success() {
    let mut mock_sender = MockEmailSender::new();
    mock_sender.expect_send().times(1).returning(|_| Ok(()));

    let service = MailServiceImpl::new(MailConfig::default());
    let result = service.send_mail(&bindings_with(mock_sender), b"{}").await.unwrap();

    assert_eq!(
      result,
      SendResult::Sent {
        status: 200,
        message: "Mail sent successfully".to_string(),
      }
    );
  }

  #[tokio::test]
  async fn test_send_mail_failure_copies_error_text() {
    let mut mock_sender = MockEmailSender::new();
    mock_sender
      .expect_send()
      .times(1)
      .returning(|_| Err(SendError::new("boom")));

    let service = MailServiceImpl::new(MailConfig::default());
    let result = service.send_mail(&bindings_with(mock_sender), b"{}").await.unwrap();

    assert_eq!(
      result,
      SendResult::Failed {
        status: 500,
        error: true,
        status_message: "Error sending mail".to_string(),
        message: "boom".to_string(),
      }
    );
  }

  #[tokio::test]
  async fn test_send_mail_ignores_request_body() {
    let mut mock_sender = MockEmailSender::new();
    mock_sender
      .expect_send()
      .withf(|message| {
        let raw = String::from_utf8_lossy(&message.raw);
        raw.contains("Subject: An email generated in a worker")
          && raw.contains(DEFAULT_BODY)
          && !raw.contains("injected")
      })
      .times(1)
      .returning(|_| Ok(()));

    let service = MailServiceImpl::new(MailConfig::default());
    let body = br#"{"subject":"injected","text":"injected body","to":"injected@example.com"}"#;
    let result = service.send_mail(&bindings_with(mock_sender), body).await.unwrap();

    assert_eq!(result, SendResult::sent());
  }

  #[tokio::test]
  async fn test_send_mail_uses_configured_envelope() {
    let config = MailConfig {
      envelope_from: "bounce@example.org".to_string(),
      envelope_to: "inbox@example.org".to_string(),
      ..MailConfig::default()
    };

    let mut mock_sender = MockEmailSender::new();
    mock_sender
      .expect_send()
      .with(predicate::function(|message: &EmailMessage| {
        message.from == "bounce@example.org" && message.to == "inbox@example.org"
      }))
      .times(1)
      .returning(|_| Ok(()));

    let service = MailServiceImpl::new(config);
    let result = service.send_mail(&bindings_with(mock_sender), b"").await.unwrap();

    assert_eq!(result, SendResult::sent());
  }

  #[tokio::test]
  async fn test_send_mail_missing_binding_is_not_a_send_result() {
    let mut mock_sender = MockEmailSender::new();
    mock_sender.expect_send().times(0);

    let bindings = EnvironmentBindings::new().with_sender("OTHER", Arc::new(mock_sender));
    let service = MailServiceImpl::new(MailConfig::default());

    let result = service.send_mail(&bindings, b"{}").await;
    assert!(matches!(result, Err(MailServiceError::MissingBinding(ref name)) if name == "SEB"));
  }

  #[tokio::test]
  async fn test_send_mail_uses_configured_binding_name() {
    let mut mock_sender = MockEmailSender::new();
    mock_sender.expect_send().times(1).returning(|_| Ok(()));

    let config = MailConfig {
      binding: "ALERTS".to_string(),
      ..MailConfig::default()
    };
    let bindings = EnvironmentBindings::new().with_sender("ALERTS", Arc::new(mock_sender));

    let result = MailServiceImpl::new(config).send_mail(&bindings, b"{}").await.unwrap();
    assert_eq!(result, SendResult::sent());
  }

  #[tokio::test]
  async fn test_send_mail_build_failure_skips_send() {
    let mut mock_sender = MockEmailSender::new();
    mock_sender.expect_send().times(0);

    let config = MailConfig {
      sender: Identity::new("<SENDER_NAME>", "<SENDER_EMAIL>"),
      ..MailConfig::default()
    };

    let result = MailServiceImpl::new(config)
      .send_mail(&bindings_with(mock_sender), b"{}")
      .await;
    assert!(matches!(result, Err(MailServiceError::MessageBuild(_))));
  }
}
