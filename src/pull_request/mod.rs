//! Building and opening "create pull request" links.
//!
//! [`PullRequest::create`] is a single linear pass:
//!
//! ```text
//! remote.<name>.url → parse → resolve service → render URL → open link
//! ```
//!
//! [`UrlBuilder`] stops before the last step. The two side effects (reading
//! git config, opening the link) come in as collaborators, so the whole flow
//! runs against fakes in tests.

mod provider;
mod registry;

pub use provider::ProviderKind;
pub use registry::{ServiceEntry, ServiceRegistration, ServiceRegistry, ServiceSource};

use crate::git::{GitError, RemoteUrl};

/// Remote used when none is given.
pub const DEFAULT_REMOTE: &str = "origin";

/// Read access to git configuration.
///
/// An unset key reads as an empty string; errors are reserved for failures
/// to read the configuration at all.
pub trait GitConfigSource {
    /// Value from the repository's own config.
    fn local(&self, key: &str) -> anyhow::Result<String>;
    /// Value from the user's global config.
    fn global(&self, key: &str) -> anyhow::Result<String>;
}

/// Hands a URL to something that opens it (a browser, usually).
pub trait LinkOpener {
    fn open_link(&self, url: &str) -> anyhow::Result<()>;
}

impl<F> LinkOpener for F
where
    F: Fn(&str) -> anyhow::Result<()>,
{
    fn open_link(&self, url: &str) -> anyhow::Result<()> {
        self(url)
    }
}

/// Builds pull request URLs from a remote's configured URL.
///
/// Used on its own when the URL is only printed; [`PullRequest`] adds the
/// step that opens it.
pub struct UrlBuilder<'a> {
    git: &'a dyn GitConfigSource,
    registry: ServiceRegistry,
    remote: String,
}

impl<'a> UrlBuilder<'a> {
    pub fn new(git: &'a dyn GitConfigSource, registry: ServiceRegistry) -> Self {
        Self {
            git,
            registry,
            remote: DEFAULT_REMOTE.to_string(),
        }
    }

    /// Use `remote.<remote>.url` instead of `remote.origin.url`.
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Remote URL from local git config, falling back to global config when
    /// the local value is empty. Lookup errors are returned unchanged.
    pub fn remote_url(&self) -> anyhow::Result<String> {
        let key = format!("remote.{}.url", self.remote);

        let local = self.git.local(&key)?;
        let local = local.trim();
        if !local.is_empty() {
            return Ok(local.to_string());
        }

        log::debug!("{key} not set locally, checking global config");
        Ok(self.git.global(&key)?.trim().to_string())
    }

    /// The pull request URL for `branch`.
    pub fn build(&self, branch: &str) -> anyhow::Result<String> {
        let remote_url = self.remote_url()?;
        let remote = RemoteUrl::parse(&remote_url);

        let registration = self.registry.resolve(remote.host()).map_err(|err| match err {
            GitError::UnsupportedService { host, .. } => GitError::UnsupportedService {
                host,
                remote_url: remote_url.clone(),
            },
            other => other,
        })?;

        let url = registration
            .provider
            .pull_request_url(&registration.domain, remote.info(), branch);
        log::info!(
            "{} {} for {branch}: {url}",
            registration.provider,
            registration.provider.request_name()
        );
        Ok(url)
    }
}

/// Opens the "create pull request" page for a branch of the current repository.
pub struct PullRequest<'a> {
    urls: UrlBuilder<'a>,
    opener: &'a dyn LinkOpener,
}

impl<'a> PullRequest<'a> {
    pub fn new(
        git: &'a dyn GitConfigSource,
        opener: &'a dyn LinkOpener,
        registry: ServiceRegistry,
    ) -> Self {
        Self {
            urls: UrlBuilder::new(git, registry),
            opener,
        }
    }

    /// Use `remote.<remote>.url` instead of `remote.origin.url`.
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.urls = self.urls.with_remote(remote);
        self
    }

    pub fn remote(&self) -> &str {
        self.urls.remote()
    }

    pub fn remote_url(&self) -> anyhow::Result<String> {
        self.urls.remote_url()
    }

    /// The pull request URL for `branch`, without opening it.
    pub fn url(&self, branch: &str) -> anyhow::Result<String> {
        self.urls.build(branch)
    }

    /// Open the pull request page for `branch` and return the URL that was opened.
    ///
    /// Nothing is opened if the remote's host can't be resolved.
    pub fn create(&self, branch: &str) -> anyhow::Result<String> {
        let url = self.url(branch)?;
        self.opener.open_link(&url)?;
        Ok(url)
    }
}
