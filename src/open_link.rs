//! Opening links with a configurable shell command.
//!
//! The command is a template with a `{{link}}` placeholder, e.g.
//! `open {{link}}` or `firefox --new-tab {{link}}`. The link is quoted for the
//! shell before substitution, since pull request URLs contain `&` and `?`.

use std::borrow::Cow;
use std::collections::HashMap;

use minijinja::{Environment, UndefinedBehavior};

use crate::git::GitError;
use crate::pull_request::LinkOpener;
use crate::shell_exec::{ShellConfig, run_detached};

/// Platform default for `open-link-command`.
pub fn default_open_link_command() -> &'static str {
    let os = if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(windows) {
        "windows"
    } else {
        "unix"
    };
    platform_default(os, ShellConfig::get().is_posix())
}

/// Default opener for `os`, written for the shell that will run it.
///
/// On Windows that shell is Git Bash (whose `start` wraps `cmd /c start`) or,
/// without Git for Windows, PowerShell.
fn platform_default(os: &str, posix_shell: bool) -> &'static str {
    match (os, posix_shell) {
        ("macos", _) => "open {{link}}",
        ("windows", true) => "start \"\" {{link}}",
        ("windows", false) => "Start-Process {{link}}",
        _ => "xdg-open {{link}}",
    }
}

/// Opens links by running a shell command template.
#[derive(Debug, Clone)]
pub struct CommandOpener {
    template: String,
}

impl CommandOpener {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Render the command for `url`, quoting the link for the platform shell.
    ///
    /// Unknown template variables are an error rather than rendering empty.
    pub fn render(&self, url: &str) -> Result<String, GitError> {
        let shell = ShellConfig::get();
        let link = if shell.is_posix() {
            shell_escape::unix::escape(Cow::Borrowed(url)).into_owned()
        } else {
            format!("'{}'", url.replace('\'', "''"))
        };

        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        let render_error = |e: minijinja::Error| GitError::OpenLinkFailed {
            command: self.template.clone(),
            error: format!("Template error: {e}"),
        };
        let tmpl = env
            .template_from_named_str("open-link-command", &self.template)
            .map_err(render_error)?;
        let vars = HashMap::from([("link", link)]);
        let command = tmpl.render(&vars).map_err(render_error)?;

        log::debug!("[template:open-link-command] result={command:?}");
        Ok(command)
    }
}

impl Default for CommandOpener {
    fn default() -> Self {
        Self::new(default_open_link_command())
    }
}

impl LinkOpener for CommandOpener {
    fn open_link(&self, url: &str) -> anyhow::Result<()> {
        let command = self.render(url)?;
        let (status, stderr) = run_detached(&mut ShellConfig::get().command(&command))
            .map_err(|e| GitError::OpenLinkFailed {
                command: command.clone(),
                error: e.to_string(),
            })?;

        if !status.success() {
            let error = match status.code() {
                Some(code) if stderr.trim().is_empty() => format!("exit status {code}"),
                _ => stderr.trim().to_string(),
            };
            return Err(GitError::OpenLinkFailed { command, error }.into());
        }

        Ok(())
    }
}
