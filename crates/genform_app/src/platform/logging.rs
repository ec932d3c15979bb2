//! Platform logging initialization for genform.
//!
//! By default logs go to `./genform.log` so they don't interleave with the form.

use super::config::LogConfig;

pub fn initialize(config: &LogConfig) {
    engine_logging::initialize(config.target.into(), config.level.into(), &config.file);
}
