use thiserror::Error;

#[derive(Error, Debug)]
pub enum FromEnvError {
  #[error("Invalid value for environment variable {0}: {1}")]
  InvalidKey(String, anyhow::Error),
}

pub fn optional_var(key: &str) -> Option<String> {
  std::env::var(key).ok()
}
