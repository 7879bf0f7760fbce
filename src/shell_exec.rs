//! Running external processes: git, and the user's open-link command.
//!
//! The open-link command is a shell string (`xdg-open {{link}}`,
//! `open -a Firefox {{link}}`), run with `sh -c` on Unix and with Git Bash or
//! PowerShell on Windows. Both entry points log a `[prlink-trace]` line with
//! the command, its duration and the outcome at debug level.

use std::io::{Read, Seek};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Output, Stdio};
use std::sync::OnceLock;
use std::time::Instant;

static SHELL: OnceLock<ShellConfig> = OnceLock::new();

/// The shell that interprets the open-link command.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub executable: PathBuf,
    /// Arguments placed before the command string
    pub args: Vec<String>,
    pub is_posix: bool,
}

impl ShellConfig {
    /// Shell for this platform, detected once per process.
    pub fn get() -> &'static ShellConfig {
        SHELL.get_or_init(detect_shell)
    }

    pub fn command(&self, shell_command: &str) -> Command {
        let mut cmd = Command::new(&self.executable);
        cmd.args(&self.args).arg(shell_command);
        cmd
    }

    /// Whether links must be quoted POSIX-style (sh, Git Bash) rather than for
    /// PowerShell.
    pub fn is_posix(&self) -> bool {
        self.is_posix
    }
}

#[cfg(unix)]
fn detect_shell() -> ShellConfig {
    ShellConfig {
        executable: PathBuf::from("sh"),
        args: vec!["-c".to_string()],
        is_posix: true,
    }
}

#[cfg(windows)]
fn detect_shell() -> ShellConfig {
    match find_git_bash() {
        Some(executable) => ShellConfig {
            executable,
            args: vec!["-c".to_string()],
            is_posix: true,
        },
        None => ShellConfig {
            executable: PathBuf::from("powershell.exe"),
            args: vec!["-NoProfile".to_string(), "-Command".to_string()],
            is_posix: false,
        },
    }
}

/// `bash.exe` from the Git for Windows install that provides `git.exe`.
///
/// Not `which bash`: that tends to hit the WSL launcher in System32.
#[cfg(windows)]
fn find_git_bash() -> Option<PathBuf> {
    let install_root = which::which("git")
        .ok()
        .and_then(|git| git.parent()?.parent().map(PathBuf::from));
    install_root
        .into_iter()
        .chain([PathBuf::from(r"C:\Program Files\Git")])
        .flat_map(|root| [root.join(r"bin\bash.exe"), root.join(r"usr\bin\bash.exe")])
        .find(|path| path.exists())
}

fn describe(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

fn trace(
    described: &str,
    context: Option<&str>,
    started: Instant,
    outcome: Result<ExitStatus, &std::io::Error>,
) {
    let context = context.map(|ctx| format!("context={ctx} ")).unwrap_or_default();
    let dur = started.elapsed().as_secs_f64() * 1000.0;
    match outcome {
        Ok(status) => log::debug!(
            "[prlink-trace] {context}cmd=\"{described}\" dur={dur:.1}ms ok={}",
            status.success()
        ),
        Err(e) => {
            log::debug!("[prlink-trace] {context}cmd=\"{described}\" dur={dur:.1}ms err=\"{e}\"")
        }
    }
}

/// Run `cmd` to completion and capture its output.
///
/// `context` names the repository for git commands, shown in the trace line.
pub fn run(cmd: &mut Command, context: Option<&str>) -> std::io::Result<Output> {
    let described = describe(cmd);
    match context {
        Some(ctx) => log::debug!("$ {described} [{ctx}]"),
        None => log::debug!("$ {described}"),
    }

    let started = Instant::now();
    let result = cmd.output();
    trace(&described, context, started, result.as_ref().map(|output| output.status));
    result
}

/// Run `cmd` and wait for it alone, not for processes it leaves running.
///
/// Openers like `xdg-open` may start the browser in the background, and that
/// browser inherits the opener's stdio. stdin and stdout are null and stderr
/// goes to an anonymous temp file, so nothing here waits on a pipe the
/// browser holds open. Returns the exit status and what was written to
/// stderr.
pub fn run_detached(cmd: &mut Command) -> std::io::Result<(ExitStatus, String)> {
    let described = describe(cmd);
    log::debug!("$ {described}");

    let started = Instant::now();
    let result = spawn_and_wait(cmd);
    trace(&described, None, started, result.as_ref().map(|(status, _)| *status));
    result
}

fn spawn_and_wait(cmd: &mut Command) -> std::io::Result<(ExitStatus, String)> {
    let mut stderr_file = tempfile::tempfile()?;
    let status = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::from(stderr_file.try_clone()?))
        .spawn()?
        .wait()?;

    let mut stderr = String::new();
    stderr_file.rewind()?;
    stderr_file.read_to_string(&mut stderr)?;
    Ok((status, stderr))
}
