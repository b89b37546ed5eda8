use bramble_core::types::NamingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("{0}")]
  InvalidConfig(String),
  #[error(transparent)]
  Naming(#[from] NamingError),
}
