//! Command implementations.

mod info;
mod replay;
mod validate;

pub use info::run_info;
pub use replay::run_replay;
pub use validate::run_validate;

use std::path::Path;

use contracts::WindConfig;
use tracing::info;

use crate::error::{CliError, Result};

/// Load a configuration file, or fall back to defaults when none is given
fn load_config(path: Option<&Path>) -> Result<WindConfig> {
    let Some(path) = path else {
        info!("No configuration given, using defaults");
        return Ok(WindConfig::default());
    };

    if !path.exists() {
        return Err(CliError::config_not_found(path.display().to_string()));
    }

    Ok(config_loader::ConfigLoader::load_from_path(path)?)
}
