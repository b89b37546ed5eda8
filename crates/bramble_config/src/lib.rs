#[cfg(test)]
mod bramble_config_fixtures;
pub mod config_error;
pub mod matcher;
pub mod pipeline_config;
pub mod plugin;
pub mod project_layout;
pub mod rule;

pub use config_error::ConfigError;
pub use pipeline_config::PipelineConfig;
pub use project_layout::ProjectLayout;
