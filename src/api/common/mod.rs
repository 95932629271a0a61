//
//  circleci-api
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the CircleCI Client
//!
//! This module provides the shared vocabulary used by every endpoint family:
//! the git host kind, repository coordinates, build filters and actions, and
//! the unified [`CircleError`] type.
//!
//! # Overview
//!
//! - [`GitType`] - Supported git hosts (`github`, `bitbucket`)
//! - [`GitInfo`] - Partially specified coordinates, used for defaults and overrides
//! - [`GitCoordinates`] - Fully specified coordinates, required by project endpoints
//! - [`Filter`] - Build status filter for list endpoints
//! - [`BuildAction`] - Actions that can be applied to an existing build
//! - [`CircleError`] - Error type for all client operations
//!
//! # Example
//!
//! ```rust
//! use circleci_api::api::common::{GitInfo, GitType};
//!
//! let defaults = GitInfo::new("foo", "bar");
//! let overrides = GitInfo {
//!     vcs_type: Some(GitType::Bitbucket),
//!     ..Default::default()
//! };
//!
//! let coords = defaults.merge(&overrides).resolve().unwrap();
//! assert_eq!(coords.vcs_type, GitType::Bitbucket);
//! assert_eq!(coords.owner, "foo");
//! ```

use std::fmt;
use std::str::FromStr;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all CircleCI client operations.
///
/// There are two families of failure:
///
/// | Family | Variants | When |
/// |--------|----------|------|
/// | Configuration | `MissingToken`, `MissingOptions`, `InvalidHeader` | Before any request is sent |
/// | Transport/remote | `Api`, `Http`, `Decode` | While or after talking to the server |
///
/// Remote failures are never retried or translated: `Api` carries the HTTP
/// status and the raw response body exactly as the server sent it.
///
/// # Example
///
/// ```rust
/// use circleci_api::CircleError;
///
/// let err = CircleError::MissingOptions(vec!["owner", "repo"]);
/// assert!(err.is_config_error());
/// assert_eq!(err.to_string(), "CircleCiApi - Missing options owner,repo");
/// ```
#[derive(Error, Debug)]
pub enum CircleError {
    /// No API token was configured or supplied for the call.
    #[error("CircleCiApi - No token was provided")]
    MissingToken,

    /// One or more of the repository coordinates is missing.
    ///
    /// Lists exactly the missing names, in the order `type`, `owner`, `repo`.
    #[error("CircleCiApi - Missing options {}", .0.join(","))]
    MissingOptions(Vec<&'static str>),

    /// A custom header name or value could not be used in an HTTP request.
    #[error("CircleCiApi - Invalid header: {0}")]
    InvalidHeader(String),

    /// The server answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Api {
        /// The HTTP status returned by CircleCI
        status: StatusCode,
        /// The untouched response body
        body: String,
    },

    /// The request could not be sent or the response could not be read.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the JSON shape the endpoint expects.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CircleError {
    /// Returns `true` for errors raised before any request was dispatched.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::MissingToken | Self::MissingOptions(_) | Self::InvalidHeader(_)
        )
    }

    /// The HTTP status of a remote failure, if there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Result alias used throughout the client.
pub type Result<T> = std::result::Result<T, CircleError>;

/// Git hosts supported by CircleCI.
///
/// Serialized in lowercase, which is also how it appears in API paths
/// (`/project/github/...`, `/project/bitbucket/...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GitType {
    /// github.com
    #[default]
    Github,
    /// bitbucket.org
    Bitbucket,
}

impl GitType {
    /// The path segment used by the API for this host.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Bitbucket => "bitbucket",
        }
    }
}

impl fmt::Display for GitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a loosely written host name into a [`GitType`].
///
/// Whitespace is removed and case is ignored. Anything that is not
/// `bitbucket` falls back to [`GitType::Github`], including the empty string.
///
/// # Example
///
/// ```rust
/// use circleci_api::api::common::{get_git_type, GitType};
///
/// assert_eq!(get_git_type(""), GitType::Github);
/// assert_eq!(get_git_type("BitB u ckeT "), GitType::Bitbucket);
/// ```
pub fn get_git_type(value: &str) -> GitType {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    if normalized == GitType::Bitbucket.as_str() {
        GitType::Bitbucket
    } else {
        GitType::Github
    }
}

/// Partially specified repository coordinates.
///
/// Used for instance defaults and per-call overrides, where any field may be
/// left out. Call [`GitInfo::resolve`] to turn it into [`GitCoordinates`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GitInfo {
    /// Git host kind.
    #[serde(default, rename = "type")]
    pub vcs_type: Option<GitType>,

    /// Owner (user or organization) of the repository.
    #[serde(default)]
    pub owner: Option<String>,

    /// Repository name.
    #[serde(default)]
    pub repo: Option<String>,
}

impl GitInfo {
    /// Coordinates on GitHub for `owner/repo`.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            vcs_type: Some(GitType::Github),
            owner: Some(owner.into()),
            repo: Some(repo.into()),
        }
    }

    /// Shallow merge where any field present in `overrides` wins.
    pub fn merge(&self, overrides: &GitInfo) -> GitInfo {
        GitInfo {
            vcs_type: overrides.vcs_type.or(self.vcs_type),
            owner: overrides.owner.clone().or_else(|| self.owner.clone()),
            repo: overrides.repo.clone().or_else(|| self.repo.clone()),
        }
    }

    /// The names of the missing fields, in `type`, `owner`, `repo` order.
    ///
    /// Empty strings count as missing.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.vcs_type.is_none() {
            missing.push("type");
        }
        if self.owner.as_deref().map_or(true, str::is_empty) {
            missing.push("owner");
        }
        if self.repo.as_deref().map_or(true, str::is_empty) {
            missing.push("repo");
        }
        missing
    }

    /// Converts into fully specified coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`CircleError::MissingOptions`] naming every missing field.
    pub fn resolve(&self) -> Result<GitCoordinates> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(CircleError::MissingOptions(missing));
        }

        Ok(GitCoordinates {
            vcs_type: self.vcs_type.unwrap_or_default(),
            owner: self.owner.clone().unwrap_or_default(),
            repo: self.repo.clone().unwrap_or_default(),
        })
    }
}

impl From<GitCoordinates> for GitInfo {
    fn from(coords: GitCoordinates) -> Self {
        Self {
            vcs_type: Some(coords.vcs_type),
            owner: Some(coords.owner),
            repo: Some(coords.repo),
        }
    }
}

/// Fully specified repository coordinates: host kind, owner and repository.
///
/// Every project endpoint takes one of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GitCoordinates {
    /// Git host kind.
    #[serde(rename = "type")]
    pub vcs_type: GitType,
    /// Owner (user or organization) of the repository.
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl GitCoordinates {
    /// Coordinates on GitHub for `owner/repo`.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self::with_type(GitType::Github, owner, repo)
    }

    /// Coordinates on an explicit git host.
    pub fn with_type(vcs_type: GitType, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            vcs_type,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// `owner/repo`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Restricts which builds are returned by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Builds that have finished, whatever the outcome
    Completed,
    /// Builds that passed
    Successful,
    /// Builds that failed
    Failed,
    /// Builds still running
    Running,
}

impl Filter {
    /// The query-string value for this filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Successful => "successful",
            Self::Failed => "failed",
            Self::Running => "running",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "completed" => Ok(Self::Completed),
            "successful" => Ok(Self::Successful),
            "failed" => Ok(Self::Failed),
            "running" => Ok(Self::Running),
            other => Err(format!(
                "unknown filter '{other}' (expected completed, successful, failed or running)"
            )),
        }
    }
}

/// Actions that can be applied to an existing build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildAction {
    /// Re-run the build
    Retry,
    /// Stop the build
    Cancel,
}

impl BuildAction {
    /// The path segment for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Retry => "retry",
            Self::Cancel => "cancel",
        }
    }
}

impl fmt::Display for BuildAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generic `{"message": "..."}` body returned by delete endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Status message, usually `"ok"` or `"success"`.
    #[serde(default)]
    pub message: Option<String>,
}
