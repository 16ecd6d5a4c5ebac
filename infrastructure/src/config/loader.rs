//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["nlq.toml", ".nlq.toml"];

/// Prefix for environment overrides (`NLQ_GATEWAY__URL` → `gateway.url`)
pub const ENV_PREFIX: &str = "NLQ_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (`NLQ_` prefix, `__` between section and key)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./nlq.toml` or `./.nlq.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/nlq/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

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

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/nlq/config.toml if set,
    /// otherwise falls back to ~/.config/nlq/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("nlq").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for debugging)
    pub fn config_sources(config_path: Option<&Path>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];
        lines.push(format!("  [ENV  ] Environment: {}*", ENV_PREFIX));

        if let Some(path) = config_path {
            let found = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Explicit: {}", found, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push("  [     ] Project: ./nlq.toml or ./.nlq.toml".to_string()),
        }

        if let Some(path) = Self::global_config_path() {
            let found = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", found, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().ends_with("nlq/config.toml"));
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.create_file(
                "nlq.toml",
                r#"
                [gateway]
                url = "http://gateway:4000/graphql"
                "#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.gateway.url, "http://gateway:4000/graphql");
            assert_eq!(config.gateway.timeout_seconds, 30);
            assert_eq!(config.server.port, 5001);
            Ok(())
        });
    }

    #[test]
    fn test_priority_order() {
        Jail::expect_with(|jail| {
            let xdg = jail.directory().join("xdg");
            std::fs::create_dir_all(xdg.join("nlq")).map_err(|e| e.to_string())?;
            std::fs::write(
                xdg.join("nlq").join("config.toml"),
                "[server]\nport = 6000\nhost = \"0.0.0.0\"\n[gateway]\nmax_retries = 1\n",
            )
            .map_err(|e| e.to_string())?;
            jail.set_env("XDG_CONFIG_HOME", xdg.display());

            jail.create_file(".nlq.toml", "[server]\nport = 7000\n")?;
            jail.create_file("custom.toml", "[gateway]\ntimeout_seconds = 9\n")?;
            jail.set_env("NLQ_GATEWAY__TIMEOUT_SECONDS", "3");
            jail.set_env("NLQ_CLASSIFIER__ENABLED", "false");

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.server.port, 7000);
            assert_eq!(config.gateway.max_retries, 1);
            assert_eq!(config.gateway.timeout_seconds, 3);
            assert!(!config.classifier.enabled);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.create_file("nlq.toml", "[server]\nport = \"not a port\"\n")?;
            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
