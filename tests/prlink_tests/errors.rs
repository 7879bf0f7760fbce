use std::path::Path;

use insta_cmd::assert_cmd_snapshot;

use crate::common::{TestRepo, stderr};

#[test]
fn test_unsupported_service() {
    let repo = TestRepo::with_origin("git@something.com:peter/calculator.git");
    let opened = repo.root().join("opened");

    let mut cmd = repo.prlink();
    cmd.env(
        "PRLINK_OPEN_LINK_COMMAND",
        TestRepo::recording_open_command(&opened),
    )
    .args(["open", "feature/divide-operation"]);

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✗ Unsupported git service something.com
    ↳ To use a self-hosted instance, add it under [services] in the config; to list services, run prlink services
    ");
    assert!(!opened.exists());
}

#[test]
fn test_invalid_service_config() {
    let repo = TestRepo::with_origin("git@invalid.work.com:team/service.git");
    repo.write_config(
        r#"
[services]
"invalid.work.com" = "noservice:invalid.work.com"
"#,
    );

    let mut cmd = repo.prlink();
    cmd.args(["url", "main"]);

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✗ Unknown git service noservice configured for invalid.work.com
    ↳ Expected provider:domain, where provider is one of github, gitlab, bitbucket
    ");
}

#[test]
fn test_missing_remote() {
    let repo = TestRepo::new();

    let output = repo.prlink().args(["url", "main"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(
        stderr.contains("Could not find a host in remote URL"),
        "{stderr}"
    );
}

#[test]
fn test_detached_head() {
    let repo = TestRepo::with_origin("git@github.com:peter/calculator.git");
    repo.commit();
    repo.git(&["checkout", "--quiet", "--detach"]);

    let output = repo.prlink().arg("url").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Not on a branch"));
}

#[test]
fn test_config_parse_error() {
    let repo = TestRepo::with_origin("git@github.com:peter/calculator.git");
    repo.write_config("[services\n");

    let output = repo.prlink().args(["url", "main"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(stderr.contains("Failed to parse config"), "{stderr}");
    assert!(stderr.contains("prlink.toml"), "{stderr}");
}

#[test]
fn test_missing_explicit_config_warns() {
    let repo = TestRepo::with_origin("git@github.com:peter/calculator.git");

    let output = repo
        .prlink()
        .arg("--config")
        .arg(Path::new("/nonexistent/prlink.toml"))
        .args(["url", "main"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stderr(&output).contains("Config file not found"));
}

#[test]
fn test_unknown_config_key_warns() {
    let repo = TestRepo::with_origin("git@github.com:peter/calculator.git");
    repo.write_config("open-link-comand = \"true\"\n");

    let output = repo.prlink().args(["url", "main"]).output().unwrap();

    assert!(output.status.success());
    let stderr = stderr(&output);
    assert!(stderr.contains("unknown key open-link-comand"), "{stderr}");
}
