use std::sync::Arc;

use crate::{
  bindings::EnvironmentBindings,
  domains::mail::{
    model::{MailConfig, SendResult},
    service::{MailService, MailServiceError, MailServiceImpl},
  },
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_mail(&self, body: &[u8]) -> impl std::future::Future<Output = Result<SendResult, MailServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub mail_service: Arc<MailServiceImpl>,
  pub bindings: EnvironmentBindings,
}

impl SharedAppState {
  pub fn new(bindings: EnvironmentBindings, config: MailConfig) -> Self {
    let mail_service = Arc::new(MailServiceImpl::new(config));

    Self { mail_service, bindings }
  }
}

impl AppState for SharedAppState {
  async fn send_mail(&self, body: &[u8]) -> Result<SendResult, MailServiceError> {
    self.mail_service.send_mail(&self.bindings, body).await
  }
}
