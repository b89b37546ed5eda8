use std::path::Path;
use std::path::PathBuf;

use bramble_core::types::ArtifactKind;
use bramble_core::types::BrowserTargets;
use bramble_core::types::BuildHash;
use bramble_core::types::BuildMode;
use bramble_core::types::DevServerOptions;
use bramble_core::types::NamingStrategy;
use bramble_core::types::OutputOptions;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use super::config_error::ConfigError;
use super::plugin::PipelinePlugin;
use super::project_layout::ProjectLayout;
use super::rule::RuleSet;
use super::rule::TransformStep;
use super::rule::TransformationRule;

/// Represents a fully assembled and validated build pipeline
#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
  pub mode: BuildMode,
  pub entry: PathBuf,
  pub output: OutputOptions,
  pub resolve_aliases: IndexMap<String, PathBuf>,
  pub rules: RuleSet,
  pub plugins: Vec<PipelinePlugin>,
  pub naming: NamingStrategy,
  pub source_maps: bool,
  pub dev_server: Option<DevServerOptions>,
}

impl PipelineConfig {
  /// Assembles the complete pipeline for the given layout and build mode
  ///
  /// Every decision that differs between development and production is made
  /// here: rule steps, plugin options, output naming, source maps and the
  /// dev server. The returned value is immutable and leaves no mode checks
  /// to its consumers.
  ///
  /// Production requires a build hash for cache busting; a hash supplied in
  /// development is dropped so development names stay stable.
  pub fn assemble(
    layout: ProjectLayout,
    mode: BuildMode,
    build_hash: Option<BuildHash>,
  ) -> Result<Self, ConfigError> {
    fn style_rule(mode: BuildMode) -> TransformationRule {
      TransformationRule {
        pattern: String::from("*.{css,sass,scss}"),
        exclude: None,
        steps: vec![
          TransformStep::ExtractStyles {
            hot_reload: mode.is_development(),
          },
          TransformStep::NormalizeCss,
          TransformStep::CompileSass,
        ],
      }
    }

    fn script_rule(mode: BuildMode) -> TransformationRule {
      let mut steps = vec![TransformStep::TranspileScripts {
        targets: BrowserTargets::baseline(),
      }];

      if mode.is_development() {
        steps.push(TransformStep::LintScripts);
      }

      TransformationRule {
        pattern: String::from("*.{js,mjs,cjs}"),
        exclude: Some(String::from("**/node_modules/**")),
        steps,
      }
    }

    let missing_paths = layout.missing_paths();
    if !missing_paths.is_empty() {
      return Err(ConfigError::InvalidConfig(format!(
        "Missing paths for the following layout fields: {:?}",
        missing_paths
      )));
    }

    let naming = NamingStrategy::new(mode, build_hash)?;

    let mut plugins = vec![
      PipelinePlugin::CleanDistDir,
      PipelinePlugin::HtmlTemplate {
        template: layout.template,
        minify: mode.is_production(),
      },
    ];

    for asset in layout.static_assets {
      plugins.push(PipelinePlugin::CopyFile {
        from: asset.from,
        to: asset.to,
      });
    }

    plugins.push(PipelinePlugin::ExtractCss {
      file_name: naming.bundle_name(ArtifactKind::Style),
    });

    let dev_server = if mode.is_development() {
      Some(DevServerOptions::default())
    } else {
      None
    };

    let config = PipelineConfig {
      mode,
      entry: layout.entry,
      output: OutputOptions {
        dist_dir: layout.dist_dir,
        file_name: naming.bundle_name(ArtifactKind::Script),
      },
      resolve_aliases: layout.resolve_aliases,
      rules: RuleSet::new(vec![style_rule(mode), script_rule(mode)]),
      plugins,
      naming,
      source_maps: mode.is_development(),
      dev_server,
    };

    tracing::debug!(
      mode = %config.mode,
      bundle = %config.output.file_name,
      "assembled build pipeline"
    );

    Ok(config)
  }

  /// Assembles the development preset over the default project layout
  pub fn development() -> Result<Self, ConfigError> {
    Self::assemble(ProjectLayout::default(), BuildMode::Development, None)
  }

  /// Assembles the production preset over the default project layout
  pub fn production(build_hash: BuildHash) -> Result<Self, ConfigError> {
    Self::assemble(
      ProjectLayout::default(),
      BuildMode::Production,
      Some(build_hash),
    )
  }

  pub fn rule_for(&self, path: &Path) -> Option<&TransformationRule> {
    self.rules.for_path(path)
  }
}
