//! Opt-in tracing for executors embedding the pipeline.
//!
//! Disabled by default. Initialization should happen once, at process start,
//! and the returned tracer must be held for as long as logs should keep
//! flowing.
mod from_env;
mod tracer;

pub use tracer::Tracer;
pub use tracer::TracerMode;

/// Reads `BRAMBLE_TRACING_MODE` and initializes tracing accordingly
///
/// Returns `None` when the variable is unset. `RUST_LOG` controls the level
/// filter either way.
pub fn initialize_from_env() -> anyhow::Result<Option<Tracer>> {
  let Some(mode) = TracerMode::from_env()? else {
    return Ok(None);
  };

  Ok(Some(Tracer::new(mode)?))
}
