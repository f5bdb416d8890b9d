//! Configuration file loading for classifier-degrade
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DEGRADE_`-prefixed environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./degrade.toml` or `./.degrade.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/classifier-degrade/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCacheConfig, FileConfig, FileDegradationConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileReferenceConfig, FileReferenceEntry, FileRuleConfig,
};
pub use loader::ConfigLoader;
