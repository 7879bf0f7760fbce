//! Git remote URL parsing.
//!
//! Parses git remote URLs into structured components (host, owner, repo).
//! Parsing is lenient: malformed input yields empty fields rather than an
//! error, because host resolution is what decides whether a remote is usable.

/// Owner and repository name extracted from a remote URL.
///
/// # Supported URL formats
///
/// - `git@<host>:<owner>/<repo>.git` (scp-like, user optional)
/// - `https://[user@]<host>/<owner>/<repo>.git`
/// - `ssh://[user@]<host>[:port]/<owner>/<repo>.git`
///
/// # Example
///
/// ```
/// use prlink::git::RepoInformation;
///
/// let info = RepoInformation::parse("git@github.com:petersmith/super_calculator");
/// assert_eq!(info.owner(), "petersmith");
/// assert_eq!(info.repository(), "super_calculator");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoInformation {
    owner: String,
    repository: String,
}

impl RepoInformation {
    pub fn new(owner: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repository: repository.into(),
        }
    }

    /// Parse owner and repository from a remote URL.
    ///
    /// The repository is the last non-empty path segment (without `.git`) and
    /// the owner is the one before it. Missing segments come back empty.
    pub fn parse(url: &str) -> Self {
        let (_, path) = split_remote(url);
        let path = path.trim_end_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);

        let mut segments = path
            .split(['/', ':'])
            .filter(|segment| !segment.is_empty())
            .rev();
        let repository = segments.next().unwrap_or_default();
        let owner = segments.next().unwrap_or_default();

        Self::new(owner, repository)
    }

    /// The repository owner or organization (e.g., "petersmith").
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The repository name without .git suffix (e.g., "super_calculator").
    pub fn repository(&self) -> &str {
        &self.repository
    }
}

/// A remote URL split into its host and repository identity.
///
/// ```
/// use prlink::git::RemoteUrl;
///
/// let remote = RemoteUrl::parse("https://my_username@bitbucket.org/johndoe/social_network.git");
/// assert_eq!(remote.host(), "bitbucket.org");
/// assert_eq!(remote.info().owner(), "johndoe");
/// assert_eq!(remote.info().repository(), "social_network");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl {
    host: String,
    info: RepoInformation,
}

impl RemoteUrl {
    pub fn parse(url: &str) -> Self {
        Self {
            host: parse_remote_host(url),
            info: RepoInformation::parse(url),
        }
    }

    /// The hostname (e.g., "github.com", "git.work.com"). Empty if none was found.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn info(&self) -> &RepoInformation {
        &self.info
    }
}

/// Extract the hostname from a git remote URL.
///
/// The host is whatever sits between the scheme/credential prefix and the
/// first `:` or `/` after it.
pub fn parse_remote_host(url: &str) -> String {
    split_remote(url).0.to_string()
}

/// Split a remote URL into `(host, path)`, dropping scheme and credentials.
///
/// The returned path keeps any leading `:` or port; callers filter segments.
fn split_remote(url: &str) -> (&str, &str) {
    let url = url.trim();
    let rest = match url.split_once("://") {
        Some((_, rest)) => rest,
        None => url,
    };

    // Credentials only live in the authority, so ignore `@` inside the path
    let authority_end = rest.find('/').unwrap_or(rest.len());
    let rest = match rest[..authority_end].rfind('@') {
        Some(at) => &rest[at + 1..],
        None => rest,
    };

    let host_end = rest.find([':', '/']).unwrap_or(rest.len());
    rest.split_at(host_end)
}
