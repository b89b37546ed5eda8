use serde::Deserialize;
use serde::Serialize;

/// Browser support targets for script transpilation, as browserslist
/// queries
///
/// Every build transpiles against one fixed baseline preset. Resolving the
/// queries into concrete browser versions is the transpiler's concern, so
/// the preset stays an opaque ordered query list here.
///
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct BrowserTargets(Vec<String>);

impl BrowserTargets {
  pub fn new(queries: Vec<String>) -> Self {
    BrowserTargets(queries)
  }

  /// The fixed baseline preset every build transpiles against.
  pub fn baseline() -> Self {
    BrowserTargets(vec![String::from("defaults")])
  }

  pub fn queries(&self) -> &[String] {
    &self.0
  }
}

impl Default for BrowserTargets {
  fn default() -> Self {
    Self::baseline()
  }
}
