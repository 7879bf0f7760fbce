//! Shared fixtures for integration tests.
//!
//! Each [`TestRepo`] owns a temp directory holding a git repository, an
//! isolated global git config and a prlink config file, so tests never see
//! the developer's own settings.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

pub struct TestRepo {
    _temp_dir: TempDir,
    root: PathBuf,
    home: PathBuf,
}

impl TestRepo {
    /// A repository on an unborn `main` branch with no remotes.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("repo");
        let home = temp_dir.path().join("home");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::create_dir_all(&home).unwrap();
        std::fs::write(home.join(".gitconfig"), "").unwrap();

        let repo = Self {
            _temp_dir: temp_dir,
            root,
            home,
        };
        repo.git(&["init", "--quiet", "--initial-branch=main"]);
        repo.write_config("");
        repo
    }

    /// A repository whose `origin` points at `url`.
    pub fn with_origin(url: &str) -> Self {
        let repo = Self::new();
        repo.git(&["remote", "add", "origin", url]);
        repo
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.join("prlink.toml")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).unwrap();
    }

    /// Run git in the repository with the isolated environment.
    pub fn git(&self, args: &[&str]) -> String {
        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(&self.root);
        self.configure(&mut cmd);
        let output = cmd.output().unwrap();
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Create a commit so HEAD can be detached.
    pub fn commit(&self) {
        self.git(&[
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "commit",
            "--quiet",
            "--allow-empty",
            "-m",
            "initial",
        ]);
    }

    /// `prlink` running in the repository.
    pub fn prlink(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin("prlink"));
        cmd.current_dir(&self.root);
        self.configure(&mut cmd);
        cmd
    }

    /// Open-link command that writes the link to `path` instead of opening it.
    pub fn recording_open_command(path: &Path) -> String {
        format!("printf '%s' {{{{link}}}} > '{}'", path.display())
    }

    fn configure(&self, cmd: &mut Command) {
        for (key, _) in std::env::vars() {
            if key.starts_with("PRLINK_") || key.starts_with("GIT_") || key == "RUST_LOG" {
                cmd.env_remove(&key);
            }
        }
        cmd.env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env("GIT_CONFIG_GLOBAL", self.home.join(".gitconfig"))
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("PRLINK_CONFIG_PATH", self.config_path())
            .env("NO_COLOR", "1")
            .env_remove("CLICOLOR_FORCE");
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
