use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

/// A unit of whole-build behavior, applied once per build in declaration order
///
/// Plugin order encodes real dependencies between the steps, so cleaning the
/// output directory always precedes every plugin that writes into it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "plugin", rename_all = "camelCase")]
pub enum PipelinePlugin {
  /// Removes every artifact of the previous build from the output directory
  CleanDistDir,
  /// Generates the entry document from a template, wiring in the emitted
  /// bundles
  #[serde(rename_all = "camelCase")]
  HtmlTemplate { template: PathBuf, minify: bool },
  /// Copies a static file into the output directory verbatim
  #[serde(rename_all = "camelCase")]
  CopyFile { from: PathBuf, to: PathBuf },
  /// Writes extracted styles to a standalone stylesheet bundle
  #[serde(rename_all = "camelCase")]
  ExtractCss { file_name: String },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_with_a_plugin_tag() {
    assert_eq!(
      serde_json::to_string(&PipelinePlugin::CleanDistDir).unwrap(),
      r#"{"plugin":"cleanDistDir"}"#
    );
    assert_eq!(
      serde_json::to_string(&PipelinePlugin::ExtractCss {
        file_name: String::from("bundle.css"),
      })
      .unwrap(),
      r#"{"plugin":"extractCss","fileName":"bundle.css"}"#
    );
  }

  #[test]
  fn round_trips_through_json() {
    let plugins = vec![
      PipelinePlugin::CleanDistDir,
      PipelinePlugin::HtmlTemplate {
        template: PathBuf::from("src/index.html"),
        minify: true,
      },
      PipelinePlugin::CopyFile {
        from: PathBuf::from("src/favicon.ico"),
        to: PathBuf::from("favicon.ico"),
      },
      PipelinePlugin::ExtractCss {
        file_name: String::from("bundle.css"),
      },
    ];

    let json = serde_json::to_string(&plugins).unwrap();

    assert_eq!(
      serde_json::from_str::<Vec<PipelinePlugin>>(&json).unwrap(),
      plugins
    );
  }
}
