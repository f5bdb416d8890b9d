//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Application directory under the user's config dir
const APP_DIR: &str = "classifier-degrade";
/// Project-level file names, checked in order
const PROJECT_FILES: [&str; 2] = ["degrade.toml", ".degrade.toml"];
/// Environment variable prefix
pub const ENV_PREFIX: &str = "DEGRADE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `DEGRADE_` environment variables, e.g. `DEGRADE_CACHE__TTL_SECONDS=600`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./degrade.toml` or `./.degrade.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/classifier-degrade/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Self::base();

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn base() -> Figment {
        Figment::new().merge(Serialized::defaults(FileConfig::default()))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/classifier-degrade/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [ env ] {}* variables", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./degrade.toml or ./.degrade.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.degradation.enable_cached_results);
        assert!(config.reference.use_defaults);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("classifier-degrade"));
    }

    #[test]
    fn test_explicit_file_merges_over_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                "[degradation]\nenable_partial_results = false\n\n[cache]\nttl_seconds = 120",
            )?;

            let config = ConfigLoader::load(Some(&PathBuf::from("custom.toml"))).map_err(|e| *e)?;
            assert!(!config.degradation.enable_partial_results);
            assert!(config.degradation.enable_fallback_data);
            assert_eq!(config.cache.ttl_seconds, 120);
            assert_eq!(config.cache.sweep_interval_seconds, 300);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "degrade.toml",
                "[cache]\nttl_seconds = 120\nsweep_interval_seconds = 60",
            )?;
            jail.set_env("DEGRADE_CACHE__TTL_SECONDS", "600");

            let config = ConfigLoader::load(Some(&PathBuf::from("degrade.toml"))).map_err(|e| *e)?;
            assert_eq!(config.cache.ttl_seconds, 600);
            assert_eq!(config.cache.sweep_interval_seconds, 60);
            Ok(())
        });
    }

    #[test]
    fn test_project_file_discovered() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(".degrade.toml", "[output]\nshow_progress = false")?;

            assert_eq!(
                ConfigLoader::project_config_path(),
                Some(PathBuf::from(".degrade.toml"))
            );
            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert!(!config.output.show_progress);
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_bad_types() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("bad.toml", "[cache]\nttl_seconds = \"soon\"\n")?;

            assert!(ConfigLoader::load(Some(&PathBuf::from("bad.toml"))).is_err());
            Ok(())
        });
    }
}
