//! This module configures `tracing_subscriber` to either write to a log file or standard output.
//!
//! Tracing is disabled by default.
use anyhow::anyhow;
use serde::Deserialize;
use serde::Serialize;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::from_env::{optional_var, FromEnvError};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", tag = "mode")]
pub enum TracerMode {
  /// Output the logs to stdout
  Stdout,
  /// Output the logs to an hourly rotated file
  #[serde(rename_all = "camelCase")]
  File {
    /// The directory where the log files will be written.
    directory: String,
    /// A prefix for the log file names.
    prefix: String,
    /// The maximum number of rotated files to keep.
    max_files: u32,
  },
}

impl TracerMode {
  pub fn from_env() -> Result<Option<Self>, FromEnvError> {
    let Some(mode) = optional_var("BRAMBLE_TRACING_MODE") else {
      return Ok(None);
    };

    match &*mode {
      "file" => Ok(Some(Self::file())),
      "stdout" => Ok(Some(Self::stdout())),
      value => Err(FromEnvError::InvalidKey(
        String::from("BRAMBLE_TRACING_MODE"),
        anyhow!("Invalid value: {}", value),
      )),
    }
  }

  /// Default STDOUT configuration
  pub fn stdout() -> Self {
    Self::Stdout
  }

  /// Default file configuration
  pub fn file() -> Self {
    Self::File {
      directory: std::env::temp_dir()
        .join("bramble_trace")
        .to_string_lossy()
        .to_string(),
      prefix: "bramble-tracing".to_string(),
      max_files: 4,
    }
  }
}

/// Holds the tracing setup alive
///
/// Dropping the tracer stops the background log writer, so it should live
/// for the whole process.
pub struct Tracer {
  #[allow(unused)]
  worker_guard: Option<WorkerGuard>,
}

impl Tracer {
  pub fn new(mode: TracerMode) -> anyhow::Result<Self> {
    let worker_guard = match mode {
      TracerMode::Stdout => {
        tracing_subscriber::fmt()
          .with_env_filter(EnvFilter::from_default_env())
          .try_init()
          .map_err(|err| {
            anyhow!(err).context("Failed to setup stdout tracing, is another tracer running?")
          })?;
        None
      }
      TracerMode::File {
        directory,
        prefix,
        max_files,
      } => {
        let file_appender = tracing_appender::rolling::Builder::new()
          .rotation(tracing_appender::rolling::Rotation::HOURLY)
          .max_log_files(max_files as usize)
          .filename_prefix(&prefix)
          .build(&directory)
          .map_err(|err| anyhow!(err))?;

        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::fmt()
          .with_env_filter(EnvFilter::from_default_env())
          .with_writer(non_blocking)
          .try_init()
          .map_err(|err| {
            anyhow!(err).context("Failed to setup file tracing, is another tracer running?")
          })?;

        Some(worker_guard)
      }
    };

    Ok(Self { worker_guard })
  }
}
