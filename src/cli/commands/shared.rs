use anyhow::Result;

use crate::cli::args::CommonArgs;
use crate::config::Config;

/// Loads the config file (if any) and applies command-line overrides.
pub fn load_config(common: &CommonArgs) -> Result<Config> {
    let mut config = Config::load()?;

    if !common.engines.is_empty() {
        config.engines = common.engines.clone();
    }
    if let Some(output) = &common.output {
        config.output = output.clone();
    }
    if let Some(format) = common.format {
        config.format = format;
    }
    if let Some(secs) = common.launch_timeout {
        config.launch_timeout_secs = secs;
    }

    config.validate()?;
    Ok(config)
}
