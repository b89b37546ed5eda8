use serde::Deserialize;
use serde::Serialize;

/// The build profile the pipeline is assembled for
///
/// Resolved once per invocation from an explicit environment signal and
/// immutable for the lifetime of the build. Development is the safe
/// default: it produces a correct build that merely lacks cache busting
/// and minification.
///
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum BuildMode {
  #[default]
  Development,
  Production,
}

impl BuildMode {
  /// The marker a signal must equal exactly to select a production build.
  pub const PRODUCTION_SIGNAL: &'static str = "production";

  /// Resolves the build mode from an external environment signal.
  ///
  /// Total over every input: only the exact production marker selects
  /// `Production`, everything else (a missing signal included) resolves to
  /// `Development`.
  ///
  pub fn from_signal(signal: Option<&str>) -> Self {
    match signal {
      Some(Self::PRODUCTION_SIGNAL) => BuildMode::Production,
      Some(signal) => {
        if !signal.is_empty() && signal != "development" {
          tracing::warn!(signal, "Unrecognized build mode signal, falling back to development");
        }

        BuildMode::Development
      }
      None => BuildMode::Development,
    }
  }

  pub fn is_development(&self) -> bool {
    matches!(self, BuildMode::Development)
  }

  pub fn is_production(&self) -> bool {
    matches!(self, BuildMode::Production)
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      BuildMode::Development => "development",
      BuildMode::Production => "production",
    }
  }
}

impl std::fmt::Display for BuildMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl Serialize for BuildMode {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    self.as_str().serialize(serializer)
  }
}

impl<'de> Deserialize<'de> for BuildMode {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;

    Ok(BuildMode::from_signal(Some(s.as_str())))
  }
}
