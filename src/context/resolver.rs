//
//  circleci-api
//  context/resolver.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Remote URL parsing and coordinate resolution.
//!
//! # Supported Remote Formats
//!
//! | Format | Example |
//! |--------|---------|
//! | SCP-like SSH | `git@github.com:foo/bar.git` |
//! | SSH URL | `ssh://git@bitbucket.org/foo/bar.git` |
//! | HTTPS | `https://github.com/foo/bar` |
//!
//! Only `github.com` and `bitbucket.org` map to a CircleCI host kind.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{GitContext, RepoContext};
use crate::api::common::{GitCoordinates, GitInfo, GitType};

static SSH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+@([^:/]+):(.+)/(.+?)(?:\.git)?/?$").unwrap());

static SSH_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ssh://(?:[\w.-]+@)?([^:/]+)(?::\d+)?/(.+)/(.+?)(?:\.git)?/?$").unwrap()
});

static HTTPS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(?:[^@/]+@)?([^:/]+)(?::\d+)?/(.+)/(.+?)(?:\.git)?/?$").unwrap()
});

/// The CircleCI host kind for a git host name.
pub fn host_git_type(host: &str) -> Option<GitType> {
    match host.to_lowercase().as_str() {
        "github.com" | "www.github.com" => Some(GitType::Github),
        "bitbucket.org" | "www.bitbucket.org" => Some(GitType::Bitbucket),
        _ => None,
    }
}

/// Parses a git remote URL into a [`RepoContext`].
///
/// # Errors
///
/// Fails when the URL is not in a recognised format or the host is neither
/// GitHub nor Bitbucket.
///
/// # Example
///
/// ```rust
/// use circleci_api::context::parse_remote_url;
/// use circleci_api::GitType;
///
/// let ctx = parse_remote_url("git@bitbucket.org:foo/bar.git").unwrap();
/// assert_eq!(ctx.coordinates.vcs_type, GitType::Bitbucket);
/// assert_eq!(ctx.coordinates.full_name(), "foo/bar");
/// ```
pub fn parse_remote_url(url: &str) -> Result<RepoContext> {
    let url = url.trim();
    let caps = SSH_URL_PATTERN
        .captures(url)
        .or_else(|| HTTPS_PATTERN.captures(url))
        .or_else(|| SSH_PATTERN.captures(url))
        .ok_or_else(|| anyhow::anyhow!("Could not parse remote URL: {}", url))?;

    let host = caps[1].to_string();
    let vcs_type = host_git_type(&host)
        .ok_or_else(|| anyhow::anyhow!("Unsupported git host '{}' (expected github.com or bitbucket.org)", host))?;

    Ok(RepoContext {
        host,
        coordinates: GitCoordinates::with_type(vcs_type, &caps[2], &caps[3]),
        branch: None,
    })
}

/// Fills in repository coordinates that were not given explicitly.
///
/// Precedence: `explicit` > `configured` > the current repository's
/// `origin` remote. The git repository is only consulted when owner or repo
/// is still missing after the first two are merged.
pub struct ContextResolver {
    configured: GitInfo,
}

impl ContextResolver {
    /// A resolver falling back to `configured` defaults.
    pub fn new(configured: GitInfo) -> Self {
        Self { configured }
    }

    /// Resolves `explicit` against the configured defaults and git.
    pub fn resolve(&self, explicit: &GitInfo) -> GitInfo {
        let merged = self.configured.merge(explicit);
        if merged.owner.is_some() && merged.repo.is_some() {
            return merged;
        }

        match RepoContext::detect() {
            Ok(ctx) => {
                debug!(project = %ctx.coordinates.full_name(), "detected project from git remote");
                GitInfo::from(ctx.coordinates).merge(&merged)
            }
            Err(e) => {
                debug!(error = %e, "no project detected from git");
                merged
            }
        }
    }

    /// Resolves the branch: `explicit` first, then the checked-out branch.
    pub fn resolve_branch(&self, explicit: Option<&str>) -> Option<String> {
        if let Some(branch) = explicit {
            return Some(branch.to_string());
        }
        GitContext::open()
            .and_then(|git| git.current_branch())
            .ok()
            .filter(|b| b != "HEAD")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_github_ssh() {
        let ctx = parse_remote_url("git@github.com:foo/bar.git").unwrap();
        assert_eq!(ctx.host, "github.com");
        assert_eq!(ctx.coordinates, GitCoordinates::new("foo", "bar"));
    }

    #[test]
    fn test_parse_bitbucket_https() {
        let ctx = parse_remote_url("https://bitbucket.org/foo/bar").unwrap();
        assert_eq!(
            ctx.coordinates,
            GitCoordinates::with_type(GitType::Bitbucket, "foo", "bar")
        );
    }

    #[test]
    fn test_parse_https_with_user() {
        let ctx = parse_remote_url("https://someone@bitbucket.org/foo/bar.git").unwrap();
        assert_eq!(ctx.coordinates.vcs_type, GitType::Bitbucket);
        assert_eq!(ctx.coordinates.repo, "bar");
    }

    #[test]
    fn test_parse_ssh_url() {
        let ctx = parse_remote_url("ssh://git@github.com/foo/bar.git").unwrap();
        assert_eq!(ctx.coordinates, GitCoordinates::new("foo", "bar"));
    }

    #[test]
    fn test_unknown_host_is_error() {
        let err = parse_remote_url("git@gitlab.com:foo/bar.git").unwrap_err();
        assert!(err.to_string().contains("gitlab.com"));
    }

    #[test]
    fn test_garbage_is_error() {
        assert!(parse_remote_url("not a url").is_err());
    }

    #[test]
    fn test_resolve_explicit_wins() {
        let resolver = ContextResolver::new(GitInfo::new("cfg-owner", "cfg-repo"));
        let resolved = resolver.resolve(&GitInfo {
            owner: Some("foo".to_string()),
            ..Default::default()
        });
        assert_eq!(resolved.owner.as_deref(), Some("foo"));
        assert_eq!(resolved.repo.as_deref(), Some("cfg-repo"));
    }

    #[test]
    fn test_resolve_branch_explicit() {
        let resolver = ContextResolver::new(GitInfo::default());
        assert_eq!(resolver.resolve_branch(Some("dev")).as_deref(), Some("dev"));
    }
}
