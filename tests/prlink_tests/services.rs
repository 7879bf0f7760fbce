use crate::common::{TestRepo, stderr, stdout};

#[test]
fn test_services_builtin() {
    let repo = TestRepo::new();

    let output = repo.prlink().arg("services").output().unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    insta::assert_snapshot!(stdout(&output), @r"
    bitbucket.org  bitbucket:bitbucket.org  builtin
    github.com     github:github.com        builtin
    gitlab.com     gitlab:gitlab.com        builtin
    ");
}

#[test]
fn test_services_with_user_entries() {
    let repo = TestRepo::new();
    repo.write_config(
        r#"
[services]
"git.work.com" = "gitlab:code.work.com"
"github.com" = "github:gh.mirror.com"
"invalid.work.com" = "noservice:x"
"#,
    );

    let output = repo.prlink().arg("services").output().unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    insta::assert_snapshot!(stdout(&output), @r"
    bitbucket.org     bitbucket:bitbucket.org  builtin
    git.work.com      gitlab:code.work.com     user
    github.com        github:gh.mirror.com     user
    gitlab.com        gitlab:gitlab.com        builtin
    invalid.work.com  noservice:x              user (invalid)
    ");
}
