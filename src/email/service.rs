use crate::email::{
  sender::{EmailSender, SendError},
  types::{EmailMessage, SmtpConfig},
};
use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  address::Envelope, transport::smtp::authentication::Credentials, Address, AsyncSmtpTransport, AsyncTransport,
  Tokio1Executor,
};

/// [`EmailSender`] backed by an SMTP relay.
pub struct SmtpSender {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpSender {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(SmtpSender {
      smtp_config,
      transporter,
    })
  }

  fn envelope(message: &EmailMessage) -> Result<Envelope, SendError> {
    let from: Address = message.from.parse()?;
    let to: Address = message.to.parse()?;
    Ok(Envelope::new(Some(from), vec![to])?)
  }
}

#[async_trait]
impl EmailSender for SmtpSender {
  async fn send(&self, message: EmailMessage) -> Result<(), SendError> {
    let envelope = Self::envelope(&message)?;

    tracing::debug!(
      "Relaying {} bytes via {}:{}",
      message.raw.len(),
      self.smtp_config.host,
      self.smtp_config.port
    );

    self.transporter.send_raw(&envelope, &message.raw).await?;

    Ok(())
  }
}
