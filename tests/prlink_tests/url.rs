use rstest::rstest;

use crate::common::{TestRepo, stderr, stdout};

#[rstest]
#[case::github_ssh(
    "git@github.com:peter/calculator.git",
    "https://github.com/peter/calculator/compare/feature/sum-operation?expand=1"
)]
#[case::gitlab_https(
    "https://gitlab.com/peter/calculator.git",
    "https://gitlab.com/peter/calculator/merge_requests/new?merge_request[source_branch]=feature/sum-operation"
)]
#[case::bitbucket_with_user(
    "https://my_username@bitbucket.org/johndoe/social_network.git",
    "https://bitbucket.org/johndoe/social_network/pull-requests/new?source=feature/sum-operation&t=1"
)]
#[case::ssh_scheme(
    "ssh://git@github.com/peter/calculator",
    "https://github.com/peter/calculator/compare/feature/sum-operation?expand=1"
)]
fn test_url_for_branch(#[case] remote: &str, #[case] expected: &str) {
    let repo = TestRepo::with_origin(remote);
    let output = repo
        .prlink()
        .args(["url", "feature/sum-operation"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), format!("{expected}\n"));
}

#[test]
fn test_url_defaults_to_current_branch() {
    let repo = TestRepo::with_origin("git@gitlab.com:peter/calculator.git");
    repo.git(&["checkout", "--quiet", "-b", "feature/ui"]);

    let output = repo.prlink().arg("url").output().unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    insta::assert_snapshot!(stdout(&output), @"https://gitlab.com/peter/calculator/merge_requests/new?merge_request[source_branch]=feature/ui");
}

#[test]
fn test_url_falls_back_to_global_config() {
    let repo = TestRepo::new();
    repo.git(&[
        "config",
        "--global",
        "remote.origin.url",
        "git@github.com:peter/calculator.git",
    ]);

    let output = repo.prlink().args(["url", "main"]).output().unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "https://github.com/peter/calculator/compare/main?expand=1\n"
    );
}

#[test]
fn test_url_with_other_remote() {
    let repo = TestRepo::with_origin("git@github.com:fork/calculator.git");
    repo.git(&["remote", "add", "upstream", "git@github.com:peter/calculator.git"]);

    let output = repo
        .prlink()
        .args(["url", "main", "--remote", "upstream"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "https://github.com/peter/calculator/compare/main?expand=1\n"
    );
}

#[test]
fn test_url_with_directory_flag() {
    let repo = TestRepo::with_origin("git@github.com:peter/calculator.git");

    let output = repo
        .prlink()
        .current_dir(repo.root().parent().unwrap())
        .arg("-C")
        .arg(repo.root())
        .args(["url", "main"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "https://github.com/peter/calculator/compare/main?expand=1\n"
    );
}

#[test]
fn test_url_with_custom_service() {
    let repo = TestRepo::with_origin("git@git.work.com:team/service.git");
    repo.write_config(
        r#"
[services]
"git.work.com" = "gitlab:code.work.com"
"#,
    );

    let output = repo.prlink().args(["url", "feature/login"]).output().unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "https://code.work.com/team/service/merge_requests/new?merge_request[source_branch]=feature/login\n"
    );
}
