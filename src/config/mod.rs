//! Configuration system for prlink
//!
//! prlink reads a single user config file (`~/.config/prlink/config.toml`),
//! never written by the tool itself:
//!
//! ```toml
//! # Command used to open links; {{link}} is replaced with the quoted URL
//! open-link-command = "firefox --new-tab {{link}}"
//!
//! # Self-hosted services: remote host = "provider:web domain"
//! [services]
//! "git.work.com" = "gitlab:code.work.com"
//! ```
//!
//! `github.com`, `gitlab.com` and `bitbucket.org` are built in; entries under
//! `[services]` override them or add new hosts.

mod user;

pub use user::{
    CONFIG_PATH_ENV, ConfigError, OPEN_LINK_COMMAND_ENV, UserConfig, get_config_path,
    set_config_path,
};
