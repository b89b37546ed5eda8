use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::artifact_kind::ArtifactKind;
use super::build_mode::BuildMode;
use crate::hash::hash_bytes;

#[derive(Debug, Error, PartialEq)]
pub enum NamingError {
  #[error("A build hash is required to name production bundles")]
  MissingBuildHash,
  #[error("Invalid build hash {0:?}: expected a non-empty alphanumeric token")]
  InvalidBuildHash(String),
}

/// A cache-busting token embedded in production bundle names
///
/// Hashing the packaged artifact's contents (`of_contents`) is the
/// recommended way to obtain one: identical output keeps its name across
/// builds and any content change is guaranteed a fresh one. Executors that
/// track build identity some other way may supply their own token, as long
/// as it is filename-safe.
///
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct BuildHash(String);

impl BuildHash {
  pub fn new(hash: impl Into<String>) -> Result<Self, NamingError> {
    let hash = hash.into();

    if hash.is_empty() || !hash.chars().all(|c| c.is_ascii_alphanumeric()) {
      return Err(NamingError::InvalidBuildHash(hash));
    }

    Ok(BuildHash(hash))
  }

  /// Content-addressed hash of a packaged artifact.
  pub fn of_contents(contents: &[u8]) -> Self {
    BuildHash(hash_bytes(contents))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl std::fmt::Display for BuildHash {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

impl<'de> Deserialize<'de> for BuildHash {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    let hash = String::deserialize(deserializer)?;

    BuildHash::new(hash).map_err(serde::de::Error::custom)
  }
}

/// Produces output bundle names for the current build
///
/// Computed once per invocation and injected into every consumer that
/// needs an output name, so the output options, the style extraction
/// plugin and the dev server can never drift apart.
///
/// Development names are stable across builds (`bundle.js`), which keeps
/// iterative rebuilds and hot-reload bookkeeping simple. Production names
/// embed the build hash (`bundle.<hash>.js`) for cache busting.
///
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingStrategy {
  mode: BuildMode,
  build_hash: Option<BuildHash>,
}

impl NamingStrategy {
  /// Creates the strategy for a build, validating that production builds
  /// carry a hash.
  ///
  /// Missing the hash in production is a configuration error rather than
  /// something to default: shipping a non-unique production name would
  /// break cache invalidation. A hash supplied for a development build is
  /// dropped so development names stay stable.
  ///
  pub fn new(mode: BuildMode, build_hash: Option<BuildHash>) -> Result<Self, NamingError> {
    let build_hash = match mode {
      BuildMode::Development => None,
      BuildMode::Production => Some(build_hash.ok_or(NamingError::MissingBuildHash)?),
    };

    Ok(NamingStrategy { mode, build_hash })
  }

  pub fn development() -> Self {
    NamingStrategy {
      mode: BuildMode::Development,
      build_hash: None,
    }
  }

  pub fn production(build_hash: BuildHash) -> Self {
    NamingStrategy {
      mode: BuildMode::Production,
      build_hash: Some(build_hash),
    }
  }

  pub fn mode(&self) -> BuildMode {
    self.mode
  }

  pub fn build_hash(&self) -> Option<&BuildHash> {
    self.build_hash.as_ref()
  }

  /// The output file name for a bundle of the given kind.
  pub fn bundle_name(&self, kind: ArtifactKind) -> String {
    match &self.build_hash {
      None => format!("bundle.{}", kind.extension()),
      Some(hash) => format!("bundle.{}.{}", hash, kind.extension()),
    }
  }
}

impl<'de> Deserialize<'de> for NamingStrategy {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct RawNamingStrategy {
      mode: BuildMode,
      #[serde(default)]
      build_hash: Option<BuildHash>,
    }

    let raw = RawNamingStrategy::deserialize(deserializer)?;

    NamingStrategy::new(raw.mode, raw.build_hash).map_err(serde::de::Error::custom)
  }
}
