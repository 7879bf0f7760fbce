//! Hosting providers and their pull request URL conventions.

use crate::git::RepoInformation;

/// A git hosting service with its own pull/merge request URL convention.
///
/// Parsed from the names used in the `[services]` config section
/// (`github`, `gitlab`, `bitbucket`, ASCII case-insensitive).
///
/// ```
/// use prlink::pull_request::ProviderKind;
///
/// let kind: ProviderKind = "GitLab".parse().unwrap();
/// assert_eq!(kind, ProviderKind::GitLab);
/// assert_eq!(kind.to_string(), "gitlab");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProviderKind {
    GitHub,
    GitLab,
    BitBucket,
}

impl ProviderKind {
    /// Public domain of the hosted service.
    pub fn default_domain(self) -> &'static str {
        match self {
            Self::GitHub => "github.com",
            Self::GitLab => "gitlab.com",
            Self::BitBucket => "bitbucket.org",
        }
    }

    /// Short name for the thing being opened ("pull request" vs "merge request").
    pub fn request_name(self) -> &'static str {
        match self {
            Self::GitLab => "merge request",
            Self::GitHub | Self::BitBucket => "pull request",
        }
    }

    /// URL of the page that creates a pull request from `branch`.
    ///
    /// `domain` is the resolved service domain, which differs from
    /// [`default_domain`](Self::default_domain) for self-hosted instances.
    /// The branch is inserted verbatim.
    ///
    /// ```
    /// use prlink::git::RepoInformation;
    /// use prlink::pull_request::ProviderKind;
    ///
    /// let info = RepoInformation::new("peter", "calculator");
    /// assert_eq!(
    ///     ProviderKind::GitHub.pull_request_url("github.com", &info, "feature/sum-operation"),
    ///     "https://github.com/peter/calculator/compare/feature/sum-operation?expand=1"
    /// );
    /// ```
    pub fn pull_request_url(self, domain: &str, info: &RepoInformation, branch: &str) -> String {
        let owner = info.owner();
        let repo = info.repository();
        match self {
            Self::GitHub => {
                format!("https://{domain}/{owner}/{repo}/compare/{branch}?expand=1")
            }
            Self::GitLab => format!(
                "https://{domain}/{owner}/{repo}/merge_requests/new?merge_request[source_branch]={branch}"
            ),
            Self::BitBucket => {
                format!("https://{domain}/{owner}/{repo}/pull-requests/new?source={branch}&t=1")
            }
        }
    }
}
