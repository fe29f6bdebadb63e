//! Named capabilities made available to request handlers.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::email::EmailSender;

#[derive(Clone, Default)]
pub struct EnvironmentBindings {
  senders: HashMap<String, Arc<dyn EmailSender>>,
}

impl EnvironmentBindings {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_sender(mut self, name: impl Into<String>, sender: Arc<dyn EmailSender>) -> Self {
    self.insert(name, sender);
    self
  }

  pub fn insert(&mut self, name: impl Into<String>, sender: Arc<dyn EmailSender>) {
    self.senders.insert(name.into(), sender);
  }

  pub fn email_sender(&self, name: &str) -> Option<Arc<dyn EmailSender>> {
    self.senders.get(name).cloned()
  }

  pub fn contains(&self, name: &str) -> bool {
    self.senders.contains_key(name)
  }
}

impl fmt::Debug for EnvironmentBindings {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut names: Vec<&String> = self.senders.keys().collect();
    names.sort();
    f.debug_struct("EnvironmentBindings").field("senders", &names).finish()
  }
}
