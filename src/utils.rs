use anyhow::Context;
use std::{env, sync::Arc};

use crate::{
  bindings::EnvironmentBindings,
  domains::mail::model::{MailConfig, DEFAULT_BINDING},
  email::{Identity, SmtpConfig, SmtpSender},
};

pub mod error;

const DEFAULT_SMTP_PORT: u16 = 587;

pub fn load_mail_config() -> MailConfig {
  let defaults = MailConfig::default();

  let sender = Identity::new(
    env::var("MAIL_SENDER_NAME").unwrap_or(defaults.sender.name),
    env::var("MAIL_SENDER_EMAIL").unwrap_or(defaults.sender.addr),
  );
  let recipient = Identity::new(
    env::var("MAIL_RECIPIENT_NAME").unwrap_or(defaults.recipient.name),
    env::var("MAIL_RECIPIENT_EMAIL").unwrap_or(defaults.recipient.addr),
  );

  MailConfig {
    binding: env::var("MAIL_BINDING").unwrap_or_else(|_| DEFAULT_BINDING.to_string()),
    envelope_from: env::var("MAIL_ENVELOPE_FROM").unwrap_or_else(|_| sender.addr.clone()),
    envelope_to: env::var("MAIL_ENVELOPE_TO").unwrap_or_else(|_| recipient.addr.clone()),
    sender,
    recipient,
  }
}

pub fn load_smtp_config() -> anyhow::Result<SmtpConfig> {
  Ok(SmtpConfig {
    host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
    port: parse_smtp_port(env::var("SMTP_PORT").ok()),
    username: env::var("SMTP_USERNAME").context("SMTP_USERNAME not set")?,
    password: env::var("SMTP_PASSWORD").context("SMTP_PASSWORD not set")?,
  })
}

fn parse_smtp_port(raw: Option<String>) -> u16 {
  match raw {
    None => DEFAULT_SMTP_PORT,
    Some(value) => value.parse().unwrap_or_else(|_| {
      tracing::warn!("Invalid SMTP_PORT {:?}, falling back to {}", value, DEFAULT_SMTP_PORT);
      DEFAULT_SMTP_PORT
    }),
  }
}

/// Registers the SMTP relay under `binding`.
pub fn init_environment_bindings(binding: &str) -> anyhow::Result<EnvironmentBindings> {
  let smtp_sender = SmtpSender::new(load_smtp_config()?)?;
  Ok(EnvironmentBindings::new().with_sender(binding, Arc::new(smtp_sender)))
}
