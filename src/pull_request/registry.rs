//! Mapping from remote hosts to hosting providers.
//!
//! The registry merges the built-in services with the user's `[services]`
//! config section. User entries are kept as written and validated only when a
//! remote actually resolves to them, so one broken entry doesn't block
//! unrelated repositories.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use super::ProviderKind;
use crate::git::GitError;

/// A host resolved to a provider and the domain its web UI lives on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRegistration {
    pub provider: ProviderKind,
    pub domain: String,
}

impl ServiceRegistration {
    pub fn new(provider: ProviderKind, domain: impl Into<String>) -> Self {
        Self {
            provider,
            domain: domain.into(),
        }
    }

    /// Parse a `provider:domain` definition (e.g. `gitlab:code.work.com`).
    ///
    /// Returns `None` for unknown providers, a missing `:`, or an empty domain.
    pub fn parse_definition(definition: &str) -> Option<Self> {
        let (provider, domain) = definition.trim().split_once(':')?;
        let provider = provider.trim().parse::<ProviderKind>().ok()?;
        let domain = domain.trim();
        if domain.is_empty() {
            return None;
        }
        Some(Self::new(provider, domain))
    }

    /// The `provider:domain` form used in config.
    pub fn definition(&self) -> String {
        format!("{}:{}", self.provider, self.domain)
    }
}

/// Where a registry entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ServiceSource {
    Builtin,
    User,
}

/// One row of the merged registry, for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntry {
    pub host: String,
    /// Raw `provider:domain` text; may be invalid for user entries
    pub definition: String,
    pub source: ServiceSource,
    /// Parsed registration, `None` if the definition is invalid
    pub registration: Option<ServiceRegistration>,
}

/// Built-in services plus user overrides, keyed by exact host.
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    overrides: BTreeMap<String, String>,
}

impl ServiceRegistry {
    /// Registry with only the built-in services.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with user overrides (host → `provider:domain`).
    ///
    /// Overrides replace built-in entries for the same host and add new hosts.
    pub fn with_overrides<I, K, V>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            overrides: overrides
                .into_iter()
                .map(|(host, definition)| (host.into(), definition.into()))
                .collect(),
        }
    }

    /// Resolve a remote host to its service.
    ///
    /// Only exact host matches count. A matching user override wins over the
    /// built-in entry; if that override is invalid the lookup fails rather than
    /// falling back.
    pub fn resolve(&self, host: &str) -> Result<ServiceRegistration, GitError> {
        if let Some(definition) = self.overrides.get(host) {
            let registration = ServiceRegistration::parse_definition(definition)
                .ok_or_else(|| GitError::InvalidServiceConfig {
                    host: host.to_string(),
                    definition: definition.clone(),
                })?;
            log::debug!("Resolved {host} to {} (user config)", registration.definition());
            return Ok(registration);
        }

        builtin(host)
            .inspect(|registration| {
                log::debug!("Resolved {host} to {} (builtin)", registration.definition())
            })
            .ok_or_else(|| GitError::UnsupportedService {
                host: host.to_string(),
                remote_url: String::new(),
            })
    }

    /// All entries of the merged registry, sorted by host.
    ///
    /// Built-in hosts shadowed by a user override appear once, as the override.
    pub fn entries(&self) -> Vec<ServiceEntry> {
        let mut entries: BTreeMap<String, ServiceEntry> = ProviderKind::iter()
            .map(|provider| {
                let registration = ServiceRegistration::new(provider, provider.default_domain());
                (
                    provider.default_domain().to_string(),
                    ServiceEntry {
                        host: provider.default_domain().to_string(),
                        definition: registration.definition(),
                        source: ServiceSource::Builtin,
                        registration: Some(registration),
                    },
                )
            })
            .collect();

        for (host, definition) in &self.overrides {
            entries.insert(
                host.clone(),
                ServiceEntry {
                    host: host.clone(),
                    definition: definition.clone(),
                    source: ServiceSource::User,
                    registration: ServiceRegistration::parse_definition(definition),
                },
            );
        }

        entries.into_values().collect()
    }
}

fn builtin(host: &str) -> Option<ServiceRegistration> {
    ProviderKind::iter()
        .find(|provider| provider.default_domain() == host)
        .map(|provider| ServiceRegistration::new(provider, provider.default_domain()))
}
