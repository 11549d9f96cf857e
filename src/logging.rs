//! Logger setup.
//!
//! The game draws on the alternate screen in raw mode, so log lines on stderr
//! would tear the picture. Logs only go to a file, and only when one is
//! configured; otherwise the `log` macros stay no-ops.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};

/// Install `env_logger` writing to `path`, filtered by `RUST_LOG` (default `info`).
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialised")?;
    Ok(())
}
