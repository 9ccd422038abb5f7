pub mod naming;

pub use crate::{config::naming::NamingConfig, defaults};
pub use clap::{Args, Parser};
use serde::Deserialize;
use std::{
    fs::File,
    io::Error,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::debug;

/// Error type returned by configuration operations.
#[derive(Error, Debug)]
pub enum PagerConfigError {
    #[error("Error processing file: {0:?}")]
    ConfigFileError(#[from] Error),
    #[error("Error processing YAML file: {0:?}")]
    SerdeYamlError(#[from] serde_yaml::Error),
    #[error("Invalid value for config key: {0:?}")]
    InvalidValue(String),
}

/// Result type returned by configuration operations.
pub type PagerConfigResult<T> = core::result::Result<T, PagerConfigError>;

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "Relay Pager",
    about = "Relay cursor connections over a dynamic GraphQL schema.",
    version
)]
pub struct PagerArgs {
    /// Log level passed to the relay pager.
    #[clap(long, default_value = defaults::LOG_LEVEL, value_parser(["info", "debug", "error", "warn", "trace"]), help = "Log level passed to the relay pager.")]
    pub log_level: String,

    /// Relay pager config file.
    #[clap(
        short,
        long,
        value_name = "FILE",
        help = "Relay pager config file."
    )]
    pub config: Option<PathBuf>,

    /// Enable verbose logging.
    #[clap(long, help = "Enable verbose logging.")]
    pub verbose: bool,
}

impl Default for PagerArgs {
    fn default() -> Self {
        Self {
            log_level: defaults::LOG_LEVEL.to_string(),
            config: None,
            verbose: defaults::VERBOSE_LOGGING,
        }
    }
}

#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
pub struct PagerConfig {
    pub log_level: String,
    pub verbose: bool,
    pub naming: NamingConfig,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::LOG_LEVEL.to_string(),
            verbose: defaults::VERBOSE_LOGGING,
            naming: NamingConfig::default(),
        }
    }
}

impl From<PagerArgs> for PagerConfig {
    fn from(args: PagerArgs) -> Self {
        Self {
            log_level: args.log_level,
            verbose: args.verbose,
            naming: NamingConfig::default(),
        }
    }
}

impl PagerConfig {
    /// Build the config from a file if one was given, otherwise from the command line.
    ///
    /// When `--config` is given, `--log-level` and `--verbose` are ignored.
    pub fn from_opts(args: PagerArgs) -> PagerConfigResult<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::from(args)),
        }
    }

    // When building the config via a file, any missing key or section is replaced
    // with its respective default value.
    pub fn from_file(path: impl AsRef<Path>) -> PagerConfigResult<Self> {
        let file = File::open(path.as_ref())?;

        let mut config = PagerConfig::default();

        let content: serde_yaml::Value = serde_yaml::from_reader(file)?;

        let log_level_key = serde_yaml::Value::String("log_level".into());
        let verbose_key = serde_yaml::Value::String("verbose".into());
        let naming_key = serde_yaml::Value::String("naming".into());

        if let Some(log_level) = content.get(log_level_key) {
            config.log_level = log_level
                .as_str()
                .ok_or_else(|| PagerConfigError::InvalidValue("log_level".into()))?
                .to_string();
        }

        if let Some(verbose) = content.get(verbose_key) {
            config.verbose = verbose
                .as_bool()
                .ok_or_else(|| PagerConfigError::InvalidValue("verbose".into()))?;
        }

        if let Some(section) = content.get(naming_key) {
            config.naming = serde_yaml::from_value(section.clone())?;
        }

        debug!("Loaded relay pager config from {:?}.", path.as_ref());

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_pager_config_will_supplement_top_level_config_vars() {
        let file_path: &str = "pager1.yaml";
        let config_str = r#"
    verbose: true
    "#;

        fs::write(file_path, config_str).unwrap();
        let config = PagerConfig::from_file(file_path).unwrap();

        assert!(config.verbose);
        assert_eq!(config.log_level, defaults::LOG_LEVEL.to_string());
        assert_eq!(config.naming, NamingConfig::default());

        fs::remove_file(file_path).unwrap();
    }

    #[test]
    fn test_pager_config_will_supplement_individual_naming_vars() {
        let file_path: &str = "pager2.yaml";
        let config_str = r#"
    ## Generated type names
    #
    naming:
      connection_suffix: Page
      page_info: PageDetails
    "#;

        fs::write(file_path, config_str).unwrap();
        let config = PagerConfig::from_file(file_path).unwrap();

        assert_eq!(config.naming.connection("Item"), "ItemPage".to_string());
        assert_eq!(config.naming.page_info, "PageDetails".to_string());
        assert_eq!(config.naming.edge("Item"), "ItemEdge".to_string());
        assert_eq!(config.naming.query_root, "Query".to_string());

        fs::remove_file(file_path).unwrap();
    }

    #[test]
    fn test_pager_config_rejects_invalid_values() {
        let file_path: &str = "pager3.yaml";
        let config_str = r#"
    verbose: sometimes
    "#;

        fs::write(file_path, config_str).unwrap();
        let err = PagerConfig::from_file(file_path).unwrap_err();
        assert!(matches!(err, PagerConfigError::InvalidValue(key) if key == "verbose"));

        fs::remove_file(file_path).unwrap();
    }

    #[test]
    fn test_pager_config_from_opts_without_file_uses_args() {
        let args = PagerArgs {
            log_level: "debug".to_string(),
            verbose: true,
            ..Default::default()
        };
        let config = PagerConfig::from_opts(args).unwrap();

        assert_eq!(config.log_level, "debug".to_string());
        assert!(config.verbose);
        assert_eq!(config.naming, NamingConfig::default());
    }

    #[test]
    fn test_pager_config_from_opts_prefers_file_over_flags() {
        let file_path: &str = "pager4.yaml";
        let config_str = r#"
    log_level: warn
    "#;

        fs::write(file_path, config_str).unwrap();
        let args = PagerArgs {
            log_level: "debug".to_string(),
            config: Some(PathBuf::from(file_path)),
            verbose: true,
        };
        let config = PagerConfig::from_opts(args).unwrap();

        assert_eq!(config.log_level, "warn".to_string());
        assert!(!config.verbose);

        fs::remove_file(file_path).unwrap();
    }
}
