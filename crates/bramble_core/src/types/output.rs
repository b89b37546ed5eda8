use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

/// Where the built bundles land
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
  /// The output folder for built artifacts
  pub dist_dir: PathBuf,

  /// The file name of the script bundle, produced by the naming strategy
  pub file_name: String,
}
