//! prlink error types and formatting
//!
//! **`GitError`** is a typed enum for domain errors that can be pattern-matched
//! and tested. Use `.into()` to convert to `anyhow::Error` while preserving the
//! type for `downcast_ref`. Display produces styled output for users.

use color_print::cformat;
use strum::IntoEnumIterator;

use crate::pull_request::ProviderKind;
use crate::styling::{error_message, format_with_gutter, hint_message, suggest_command};

/// Domain errors for building and opening pull request links.
///
/// # Usage
///
/// ```
/// use prlink::git::GitError;
///
/// let err: anyhow::Error = GitError::UnsupportedService {
///     host: "something.com".into(),
///     remote_url: "git@something.com:peter/calculator.git".into(),
/// }
/// .into();
///
/// assert!(matches!(
///     err.downcast_ref::<GitError>(),
///     Some(GitError::UnsupportedService { .. })
/// ));
/// ```
#[derive(Debug, Clone)]
pub enum GitError {
    /// Not on a branch, so there is nothing to open a pull request for
    DetachedHead,
    /// `git config` could not be read (not a missing key, which reads as empty)
    ConfigLookupFailed {
        key: String,
        error: String,
    },
    /// Remote host is neither built in nor configured under `[services]`
    UnsupportedService {
        host: String,
        remote_url: String,
    },
    /// A `[services]` entry matched the host but names an unknown provider or
    /// is not of the form `provider:domain`
    InvalidServiceConfig {
        host: String,
        definition: String,
    },
    OpenLinkFailed {
        command: String,
        error: String,
    },
}

impl std::error::Error for GitError {}

impl std::fmt::Display for GitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GitError::DetachedHead => write!(
                f,
                "{}\n{}",
                error_message("Not on a branch (detached HEAD)"),
                hint_message(cformat!(
                    "Pass a branch explicitly, or run <bright-black>git switch <<branch>></>"
                ))
            ),

            GitError::ConfigLookupFailed { key, error } => {
                write!(
                    f,
                    "{}",
                    error_message(cformat!("Failed to read git config <bold>{key}</>"))
                )?;
                if !error.is_empty() {
                    write!(f, "\n{}", format_with_gutter(error))?;
                }
                Ok(())
            }

            GitError::UnsupportedService { host, remote_url } => {
                let message = if host.is_empty() {
                    cformat!("Could not find a host in remote URL <bold>{remote_url}</>")
                } else {
                    cformat!("Unsupported git service <bold>{host}</>")
                };
                let services_cmd = suggest_command("services", &[], &[]);
                write!(
                    f,
                    "{}\n{}",
                    error_message(message),
                    hint_message(cformat!(
                        "To use a self-hosted instance, add it under <bright-black>[services]</> in the config; to list services, run <bright-black>{services_cmd}</>"
                    ))
                )
            }

            GitError::InvalidServiceConfig { host, definition } => {
                let providers = ProviderKind::iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                let message = match definition.split_once(':') {
                    Some((provider, _)) if provider.parse::<ProviderKind>().is_err() => cformat!(
                        "Unknown git service <bold>{provider}</> configured for <bold>{host}</>"
                    ),
                    _ => cformat!(
                        "Invalid service definition <bold>{definition}</> configured for <bold>{host}</>"
                    ),
                };
                write!(
                    f,
                    "{}\n{}",
                    error_message(message),
                    hint_message(cformat!(
                        "Expected <bright-black>provider:domain</>, where provider is one of {providers}"
                    ))
                )
            }

            GitError::OpenLinkFailed { command, error } => {
                write!(
                    f,
                    "{}",
                    error_message(cformat!("Failed to open link with <bold>{command}</>"))
                )?;
                if !error.is_empty() {
                    write!(f, "\n{}", format_with_gutter(error))?;
                }
                Ok(())
            }
        }
    }
}
