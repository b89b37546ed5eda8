use std::path::Path;

use bramble_core::types::BrowserTargets;
use serde::Deserialize;
use serde::Serialize;

use super::matcher::pattern_matcher;

/// A single unit of per-file processing, applied by the external executor
///
/// Steps are listed in declaration order and applied last-to-first, so a rule
/// declaring `[ExtractStyles, NormalizeCss, CompileSass]` compiles Sass first
/// and extracts the result last.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "camelCase")]
pub enum TransformStep {
  /// Moves compiled styles out of the script bundle into a standalone
  /// stylesheet, or injects them into the page when hot reloading
  #[serde(rename_all = "camelCase")]
  ExtractStyles { hot_reload: bool },
  /// Resolves imports and url() references inside stylesheets
  NormalizeCss,
  CompileSass,
  /// Rewrites scripts for the configured browser targets
  #[serde(rename_all = "camelCase")]
  TranspileScripts { targets: BrowserTargets },
  LintScripts,
}

/// Maps a glob pattern to the ordered steps for files it matches
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationRule {
  /// Glob matched against the file name or the full path of a source file
  pub pattern: String,
  /// Optional glob removing otherwise matching files from the rule
  #[serde(default)]
  pub exclude: Option<String>,
  pub steps: Vec<TransformStep>,
}

impl TransformationRule {
  pub fn matches(&self, path: &Path) -> bool {
    let is_match = pattern_matcher(path);

    if !is_match(&self.pattern) {
      return false;
    }

    match &self.exclude {
      Some(exclude) => !is_match(exclude),
      None => true,
    }
  }
}

/// Represents the ordered transformation rules of an assembled pipeline
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
///
/// use bramble_config::rule::RuleSet;
/// use bramble_config::rule::TransformStep;
/// use bramble_config::rule::TransformationRule;
///
/// let rules = RuleSet::new(vec![TransformationRule {
///   pattern: String::from("*.{css,sass,scss}"),
///   exclude: None,
///   steps: vec![TransformStep::NormalizeCss, TransformStep::CompileSass],
/// }]);
///
/// rules.for_path(&PathBuf::from("src/styles/app.scss"));
/// ```
///
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RuleSet(
  /// Rules in declaration order, scanned first to last
  Vec<TransformationRule>,
);

impl RuleSet {
  pub fn new(rules: Vec<TransformationRule>) -> Self {
    Self(rules)
  }

  /// Finds the first rule matching the given source path
  ///
  /// Rules are scanned in declaration order and the first match wins, so more
  /// specific rules belong ahead of broader ones. A path matching no rule, or
  /// matching only rules that exclude it, returns `None` and is left to the
  /// executor to handle.
  pub fn for_path(&self, path: &Path) -> Option<&TransformationRule> {
    self.0.iter().find(|rule| rule.matches(path))
  }
}
