//! User-level configuration

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use color_print::cformat;
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use serde::{Deserialize, Serialize};

use crate::open_link::default_open_link_command;
use crate::pull_request::ServiceRegistry;
use crate::styling::{eprintln, error_message, format_with_gutter, warning_message};

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "PRLINK_CONFIG_PATH";

/// Environment variable overriding `open-link-command`
pub const OPEN_LINK_COMMAND_ENV: &str = "PRLINK_OPEN_LINK_COMMAND";

/// Override for user config path, set via --config CLI flag
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Set the user config path override (called from CLI --config flag)
pub fn set_config_path(path: PathBuf) {
    CONFIG_PATH.set(path).ok();
}

/// Location of the user config file.
///
/// Priority: `--config` flag, then `PRLINK_CONFIG_PATH`, then the platform
/// config directory (`$XDG_CONFIG_HOME/prlink/config.toml` on Linux and macOS,
/// `%APPDATA%\prlink\config.toml` on Windows).
pub fn get_config_path() -> Option<PathBuf> {
    if let Some(path) = CONFIG_PATH.get() {
        return Some(path.clone());
    }

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV)
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }

    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("prlink").join("config.toml"))
}

fn is_config_path_explicit() -> bool {
    CONFIG_PATH.get().is_some() || std::env::var_os(CONFIG_PATH_ENV).is_some()
}

/// Failure to load the user config file.
#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, error: String },
    Parse { path: PathBuf, error: String },
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (action, path, error) = match self {
            ConfigError::Read { path, error } => ("read", path, error),
            ConfigError::Parse { path, error } => ("parse", path, error),
        };
        let path = path.display();
        write!(
            f,
            "{}\n{}",
            error_message(cformat!("Failed to {action} config <bold>{path}</>")),
            format_with_gutter(error.trim_end())
        )
    }
}

/// Personal settings for opening pull request links.
///
/// ```
/// use prlink::config::UserConfig;
///
/// let config = UserConfig::load_from_str(r#"
/// [services]
/// "git.work.com" = "gitlab:code.work.com"
/// "#).unwrap();
///
/// let registration = config.service_registry().resolve("git.work.com").unwrap();
/// assert_eq!(registration.domain, "code.work.com");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UserConfig {
    /// Shell command used to open links, with a `{{link}}` placeholder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_link_command: Option<String>,

    /// Remote host → `provider:domain` for self-hosted or remapped services.
    /// BTreeMap for deterministic listing order.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub services: BTreeMap<String, String>,

    /// Keys we don't recognize; warned about and otherwise ignored
    #[serde(flatten, default, skip_serializing)]
    pub unknown: BTreeMap<String, toml::Value>,
}

impl UserConfig {
    /// Load configuration from the config file and environment.
    ///
    /// A missing config file yields defaults. `PRLINK_OPEN_LINK_COMMAND`
    /// overrides `open-link-command` from the file.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match get_config_path() {
            Some(path) if path.exists() => {
                let config = Self::load_from_path(&path)?;
                config.warn_unknown_keys(&path);
                config
            }
            Some(path) if is_config_path_explicit() => {
                eprintln!(
                    "{}",
                    warning_message(format!("Config file not found: {}", path.display()))
                );
                Self::default()
            }
            _ => Self::default(),
        };

        if let Ok(command) = std::env::var(OPEN_LINK_COMMAND_ENV)
            && !command.is_empty()
        {
            log::debug!("Using {OPEN_LINK_COMMAND_ENV} for open-link-command");
            config.open_link_command = Some(command);
        }

        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from a TOML string.
    pub fn load_from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The open-link command, or the platform default when unset.
    pub fn open_link_command(&self) -> &str {
        self.open_link_command
            .as_deref()
            .unwrap_or(default_open_link_command())
    }

    /// Built-in services merged with the `[services]` section.
    pub fn service_registry(&self) -> ServiceRegistry {
        ServiceRegistry::with_overrides(self.services.clone())
    }

    fn warn_unknown_keys(&self, path: &Path) {
        for key in self.unknown.keys() {
            log::debug!("Unknown key {key} in {}", path.display());
            eprintln!(
                "{}",
                warning_message(cformat!(
                    "Config {} has unknown key <bold>{key}</> (will be ignored)",
                    path.display()
                ))
            );
        }
    }
}
