use serde::Deserialize;
use serde::Serialize;

/// Parameters handed to the external dev server
///
/// Only meaningful for development builds; production assemblies carry no
/// dev-server options at all.
///
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerOptions {
  /// The port the dev server binds to
  pub port: u16,

  /// Whether updated modules are pushed into the running page without a
  /// full reload
  pub hot_reload: bool,
}

impl Default for DevServerOptions {
  fn default() -> Self {
    DevServerOptions {
      port: 8080,
      hot_reload: true,
    }
  }
}
