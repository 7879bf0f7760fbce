//! Open the "create pull request" page for a branch.
//!
//! prlink reads a remote's URL from git config, works out which hosting
//! service it points at (GitHub, GitLab, Bitbucket, or a self-hosted instance
//! configured by the user), and opens that service's compare page for the
//! branch.
//!
//! The library API is not stable; it exists mainly for the `prlink` binary.

pub mod config;
pub mod git;
pub mod open_link;
pub mod pull_request;
pub mod shell_exec;
pub mod styling;
