use insta_cmd::assert_cmd_snapshot;

use crate::common::{TestRepo, stderr, stdout};

const EXPECTED: &str =
    "https://bitbucket.org/johndoe/social_network/pull-requests/new?source=feature/profile-page&t=1";

#[test]
fn test_open_runs_configured_command() {
    let repo = TestRepo::with_origin("git@bitbucket.org:johndoe/social_network.git");
    let opened = repo.root().join("opened");
    repo.write_config(&format!(
        "open-link-command = \"{}\"\n",
        TestRepo::recording_open_command(&opened).replace('"', "\\\"")
    ));

    let output = repo
        .prlink()
        .args(["open", "feature/profile-page"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(std::fs::read_to_string(&opened).unwrap(), EXPECTED);
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("Opened feature/profile-page"));
}

#[test]
fn test_open_is_default_subcommand() {
    let repo = TestRepo::with_origin("git@bitbucket.org:johndoe/social_network.git");
    repo.git(&["checkout", "--quiet", "-b", "feature/profile-page"]);
    let opened = repo.root().join("opened");

    let output = repo
        .prlink()
        .env(
            "PRLINK_OPEN_LINK_COMMAND",
            TestRepo::recording_open_command(&opened),
        )
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(std::fs::read_to_string(&opened).unwrap(), EXPECTED);
}

#[test]
fn test_open_command_failure() {
    let repo = TestRepo::with_origin("git@github.com:peter/calculator.git");

    let mut cmd = repo.prlink();
    cmd.env("PRLINK_OPEN_LINK_COMMAND", "echo 'no browser' >&2; exit 3")
        .args(["open", "main"]);

    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✗ Failed to open link with echo 'no browser' >&2; exit 3
      no browser
    ");
}
