use std::path::PathBuf;

use indexmap::indexmap;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// A static file copied into the output directory verbatim
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticAsset {
  pub from: PathBuf,
  pub to: PathBuf,
}

/// Represents the source tree a pipeline is assembled for
///
/// Every path is declared relative to the project root and is never resolved
/// or read by this crate. The default layout is the conventional one: an
/// `src/index.js` entry with its template and icon next to it, emitting into
/// `dist`, with `@` aliased to the source directory.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLayout {
  /// The module the script bundle is built from
  pub entry: PathBuf,
  pub dist_dir: PathBuf,
  /// The document the entry plugin renders the bundle references into
  pub template: PathBuf,
  pub static_assets: Vec<StaticAsset>,
  /// Import prefixes resolved to source directories, in declaration order
  pub resolve_aliases: IndexMap<String, PathBuf>,
}

impl Default for ProjectLayout {
  fn default() -> Self {
    Self {
      entry: PathBuf::from("src/index.js"),
      dist_dir: PathBuf::from("dist"),
      template: PathBuf::from("src/index.html"),
      static_assets: vec![StaticAsset {
        from: PathBuf::from("src/favicon.ico"),
        to: PathBuf::from("favicon.ico"),
      }],
      resolve_aliases: indexmap! {
        String::from("@") => PathBuf::from("src")
      },
    }
  }
}

impl ProjectLayout {
  /// Lists the layout fields holding empty paths, by serialized name
  pub(crate) fn missing_paths(&self) -> Vec<String> {
    let mut missing = Vec::new();

    if self.entry.as_os_str().is_empty() {
      missing.push(String::from("entry"));
    }

    if self.dist_dir.as_os_str().is_empty() {
      missing.push(String::from("distDir"));
    }

    if self.template.as_os_str().is_empty() {
      missing.push(String::from("template"));
    }

    for (index, asset) in self.static_assets.iter().enumerate() {
      if asset.from.as_os_str().is_empty() || asset.to.as_os_str().is_empty() {
        missing.push(format!("staticAssets[{}]", index));
      }
    }

    missing
  }
}
