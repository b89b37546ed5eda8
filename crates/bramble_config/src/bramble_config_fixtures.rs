use std::path::PathBuf;

use bramble_core::types::BrowserTargets;
use bramble_core::types::BuildHash;
use bramble_core::types::BuildMode;
use bramble_core::types::DevServerOptions;
use bramble_core::types::NamingStrategy;
use bramble_core::types::OutputOptions;
use indexmap::indexmap;

use super::pipeline_config::PipelineConfig;
use super::plugin::PipelinePlugin;
use super::rule::RuleSet;
use super::rule::TransformStep;
use super::rule::TransformationRule;

pub fn development_config() -> PipelineConfig {
  PipelineConfig {
    mode: BuildMode::Development,
    entry: PathBuf::from("src/index.js"),
    output: OutputOptions {
      dist_dir: PathBuf::from("dist"),
      file_name: String::from("bundle.js"),
    },
    resolve_aliases: indexmap! {
      String::from("@") => PathBuf::from("src")
    },
    rules: RuleSet::new(vec![
      TransformationRule {
        pattern: String::from("*.{css,sass,scss}"),
        exclude: None,
        steps: vec![
          TransformStep::ExtractStyles { hot_reload: true },
          TransformStep::NormalizeCss,
          TransformStep::CompileSass,
        ],
      },
      TransformationRule {
        pattern: String::from("*.{js,mjs,cjs}"),
        exclude: Some(String::from("**/node_modules/**")),
        steps: vec![
          TransformStep::TranspileScripts {
            targets: BrowserTargets::baseline(),
          },
          TransformStep::LintScripts,
        ],
      },
    ]),
    plugins: vec![
      PipelinePlugin::CleanDistDir,
      PipelinePlugin::HtmlTemplate {
        template: PathBuf::from("src/index.html"),
        minify: false,
      },
      PipelinePlugin::CopyFile {
        from: PathBuf::from("src/favicon.ico"),
        to: PathBuf::from("favicon.ico"),
      },
      PipelinePlugin::ExtractCss {
        file_name: String::from("bundle.css"),
      },
    ],
    naming: NamingStrategy::development(),
    source_maps: true,
    dev_server: Some(DevServerOptions {
      port: 8080,
      hot_reload: true,
    }),
  }
}

pub fn production_config(build_hash: BuildHash) -> PipelineConfig {
  PipelineConfig {
    mode: BuildMode::Production,
    entry: PathBuf::from("src/index.js"),
    output: OutputOptions {
      dist_dir: PathBuf::from("dist"),
      file_name: format!("bundle.{}.js", build_hash.as_str()),
    },
    resolve_aliases: indexmap! {
      String::from("@") => PathBuf::from("src")
    },
    rules: RuleSet::new(vec![
      TransformationRule {
        pattern: String::from("*.{css,sass,scss}"),
        exclude: None,
        steps: vec![
          TransformStep::ExtractStyles { hot_reload: false },
          TransformStep::NormalizeCss,
          TransformStep::CompileSass,
        ],
      },
      TransformationRule {
        pattern: String::from("*.{js,mjs,cjs}"),
        exclude: Some(String::from("**/node_modules/**")),
        steps: vec![TransformStep::TranspileScripts {
          targets: BrowserTargets::baseline(),
        }],
      },
    ]),
    plugins: vec![
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
        file_name: format!("bundle.{}.css", build_hash.as_str()),
      },
    ],
    naming: NamingStrategy::production(build_hash),
    source_maps: false,
    dev_server: None,
  }
}
