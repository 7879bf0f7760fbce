//! Git operations: remote URL parsing and config lookup

use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, bail};

mod error;
mod url;

pub use error::GitError;
pub use url::{RemoteUrl, RepoInformation, parse_remote_host};

use crate::pull_request::GitConfigSource;
use crate::shell_exec::run;

/// Which config file `git config` reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ConfigScope {
    Local,
    Global,
}

impl ConfigScope {
    fn flag(self) -> &'static str {
        match self {
            Self::Local => "--local",
            Self::Global => "--global",
        }
    }
}

/// A git working directory that commands run in.
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository for the process's current directory.
    pub fn current() -> anyhow::Result<Self> {
        let path = std::env::current_dir().context("Failed to read current directory")?;
        Ok(Self::at(path))
    }

    fn logging_context(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    fn git_command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("git");
        cmd.args(args);
        cmd.current_dir(&self.path);
        cmd
    }

    /// Run a git command in this repository and return its stdout.
    ///
    /// Non-zero exit is an error carrying git's stderr (or stdout, for
    /// commands that report there).
    pub fn run_command(&self, args: &[&str]) -> anyhow::Result<String> {
        let output = run(&mut self.git_command(args), Some(&self.logging_context()))
            .with_context(|| format!("Failed to execute: git {}", args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            for line in stderr.trim().lines() {
                log::debug!("  ! {}", line);
            }
            let stdout = String::from_utf8_lossy(&output.stdout);
            let error_msg = [stderr.trim(), stdout.trim()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            bail!("{}", error_msg);
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        for line in stdout.trim().lines() {
            log::debug!("  {}", line);
        }
        Ok(stdout)
    }

    /// Read a single config value from one scope.
    ///
    /// An unset key returns an empty string (`git config --get` exits 1 for
    /// that); anything else that fails is [`GitError::ConfigLookupFailed`].
    pub fn config_value(&self, scope: ConfigScope, key: &str) -> anyhow::Result<String> {
        let args = ["config", scope.flag(), "--get", key];
        let output = run(&mut self.git_command(&args), Some(&self.logging_context()))
            .with_context(|| format!("Failed to execute: git {}", args.join(" ")))?;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).trim().to_string());
        }
        if output.status.code() == Some(1) {
            log::debug!("  ({scope} {key} not set)");
            return Ok(String::new());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(GitError::ConfigLookupFailed {
            key: key.to_string(),
            error: stderr,
        }
        .into())
    }

    /// Name of the checked-out branch.
    ///
    /// Fails with [`GitError::DetachedHead`] when HEAD is detached.
    pub fn current_branch(&self) -> anyhow::Result<String> {
        let branch = self.run_command(&["branch", "--show-current"])?;
        let branch = branch.trim();
        if branch.is_empty() {
            return Err(GitError::DetachedHead.into());
        }
        Ok(branch.to_string())
    }
}

impl GitConfigSource for Repository {
    fn local(&self, key: &str) -> anyhow::Result<String> {
        self.config_value(ConfigScope::Local, key)
    }

    fn global(&self, key: &str) -> anyhow::Result<String> {
        self.config_value(ConfigScope::Global, key)
    }
}
