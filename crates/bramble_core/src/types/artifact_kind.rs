use serde::Deserialize;
use serde::Serialize;

/// The kind of bundle an output name is produced for
///
/// The pipeline emits exactly one script bundle and one style bundle;
/// this is only ever an input to naming.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ArtifactKind {
  Script,
  Style,
}

impl ArtifactKind {
  pub fn extension(&self) -> &'static str {
    match self {
      ArtifactKind::Script => "js",
      ArtifactKind::Style => "css",
    }
  }
}

impl Serialize for ArtifactKind {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    self.extension().serialize(serializer)
  }
}

impl<'de> Deserialize<'de> for ArtifactKind {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    let ext: String = Deserialize::deserialize(deserializer)?;

    match ext.as_str() {
      "js" => Ok(ArtifactKind::Script),
      "css" => Ok(ArtifactKind::Style),
      ext => Err(serde::de::Error::custom(format!(
        "Unknown bundle extension: {}",
        ext
      ))),
    }
  }
}
