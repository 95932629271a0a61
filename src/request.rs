//
//  circleci-api
//  request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Builder
//!
//! Combines instance-level defaults with per-call overrides into a fully
//! specified request, then validates it before anything touches the network.
//!
//! ## Precedence
//!
//! For every field: call override > instance default > built-in default.
//! The only built-in defaults are the `github` host kind, the public API base
//! URL and the query-parameter auth mode.
//!
//! Merging always produces a new value; [`RequestDefaults`] is never mutated.
//!
//! ## Example
//!
//! ```rust
//! use circleci_api::api::common::GitInfo;
//! use circleci_api::request::{CircleRequest, RequestDefaults};
//!
//! let defaults = RequestDefaults::new("T").with_vcs(GitInfo::new("foo", "bar"));
//! let overrides = CircleRequest::new().owner("baz").branch("dev");
//!
//! let request = defaults.merge(Some(&overrides)).validate().unwrap();
//! assert_eq!(request.vcs.owner, "baz");
//! assert_eq!(request.vcs.repo, "bar");
//! assert_eq!(request.options.branch.as_deref(), Some("dev"));
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::api::client::CircleClient;
use crate::api::common::{CircleError, Filter, GitCoordinates, GitInfo, GitType, Result};
use crate::auth::AuthMode;

/// Body sent when triggering a new build.
///
/// Every field is optional; an empty value serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBuildOptions {
    /// Specific revision to build
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,

    /// Tag to build, instead of a branch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Number of containers to use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel: Option<u32>,

    /// Extra environment variables exposed to the build
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub build_parameters: HashMap<String, String>,
}

/// Query options shared by build and artifact endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Git branch to target
    #[serde(default)]
    pub branch: Option<String>,

    /// Restrict returned builds by status
    #[serde(default)]
    pub filter: Option<Filter>,

    /// Number of builds to return (the API caps this at 100)
    #[serde(default)]
    pub limit: Option<u32>,

    /// Number of builds to skip
    #[serde(default)]
    pub offset: Option<u32>,

    /// Ask for trimmed-down build summaries
    #[serde(default)]
    pub shallow: Option<bool>,

    /// Body for trigger-build calls
    #[serde(default)]
    pub new_build_options: Option<NewBuildOptions>,
}

impl Options {
    /// Shallow merge where any field present in `overrides` wins.
    pub fn merge(&self, overrides: &Options) -> Options {
        Options {
            branch: overrides.branch.clone().or_else(|| self.branch.clone()),
            filter: overrides.filter.or(self.filter),
            limit: overrides.limit.or(self.limit),
            offset: overrides.offset.or(self.offset),
            shallow: overrides.shallow.or(self.shallow),
            new_build_options: overrides
                .new_build_options
                .clone()
                .or_else(|| self.new_build_options.clone()),
        }
    }

    /// Query pairs for build list endpoints. The branch goes in the path.
    pub fn build_list_query(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("limit", self.limit.map(|v| v.to_string())),
            ("offset", self.offset.map(|v| v.to_string())),
            ("filter", self.filter.map(|f| f.to_string())),
            ("shallow", self.shallow.map(|v| v.to_string())),
        ]
    }

    /// Query pairs for the latest-artifacts endpoint.
    pub fn artifacts_query(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("branch", self.branch.clone()),
            ("filter", self.filter.map(|f| f.to_string())),
        ]
    }

    /// Query pairs for the recent-builds endpoint.
    pub fn pagination_query(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("limit", self.limit.map(|v| v.to_string())),
            ("offset", self.offset.map(|v| v.to_string())),
        ]
    }
}

/// Transport settings that may vary per call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientOptions {
    /// Base URL replacing `https://circleci.com/api/v1.1`
    #[serde(default)]
    pub circle_host: Option<String>,

    /// Extra headers sent with every request
    #[serde(default)]
    pub custom_headers: BTreeMap<String, String>,

    /// How the token is attached
    #[serde(default)]
    pub auth_mode: Option<AuthMode>,
}

impl ClientOptions {
    /// Host and auth mode are replaced when given; header maps are merged
    /// key by key with `overrides` winning.
    pub fn merge(&self, overrides: &ClientOptions) -> ClientOptions {
        let mut custom_headers = self.custom_headers.clone();
        custom_headers.extend(
            overrides
                .custom_headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );

        ClientOptions {
            circle_host: overrides
                .circle_host
                .clone()
                .or_else(|| self.circle_host.clone()),
            custom_headers,
            auth_mode: overrides.auth_mode.or(self.auth_mode),
        }
    }
}

/// A request where every field is optional.
///
/// Used as the per-call override argument of the [`CircleCi`](crate::CircleCi)
/// facade, and as the result of merging overrides into defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleRequest {
    /// API token
    pub token: Option<String>,
    /// Repository coordinates
    pub vcs: GitInfo,
    /// Query options
    pub options: Options,
    /// Transport settings
    pub client: ClientOptions,
}

impl CircleRequest {
    /// An empty override that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the API token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Overrides the git host kind.
    pub fn vcs_type(mut self, vcs_type: GitType) -> Self {
        self.vcs.vcs_type = Some(vcs_type);
        self
    }

    /// Overrides the repository owner.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.vcs.owner = Some(owner.into());
        self
    }

    /// Overrides the repository name.
    pub fn repo(mut self, repo: impl Into<String>) -> Self {
        self.vcs.repo = Some(repo.into());
        self
    }

    /// Overrides the branch option.
    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.options.branch = Some(branch.into());
        self
    }

    /// Overrides the query options wholesale.
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Overrides the API base URL.
    pub fn circle_host(mut self, host: impl Into<String>) -> Self {
        self.client.circle_host = Some(host.into());
        self
    }

    /// Adds a custom header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.client.custom_headers.insert(name.into(), value.into());
        self
    }

    /// The token, if present and non-empty.
    ///
    /// # Errors
    ///
    /// [`CircleError::MissingToken`] when the token is absent or empty.
    pub fn require_token(&self) -> Result<&str> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(CircleError::MissingToken),
        }
    }

    /// Checks the token and repository coordinates.
    ///
    /// The token is checked first; then every missing coordinate is reported
    /// at once.
    pub fn validate(self) -> Result<FullRequest> {
        let token = self.require_token()?.to_string();
        let vcs = self.vcs.resolve()?;

        Ok(FullRequest {
            token,
            vcs,
            options: self.options,
            client: self.client,
        })
    }

    /// A dispatch client for this request; only the token is required.
    pub fn client_with(&self, http: &reqwest::Client) -> Result<CircleClient> {
        let token = self.require_token()?;
        CircleClient::from_options(http.clone(), token, &self.client)
    }
}

/// Instance-level defaults held by a [`CircleCi`](crate::CircleCi) facade.
///
/// Read-only after construction; every call merges its overrides into a
/// fresh [`CircleRequest`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestDefaults {
    /// API token
    pub token: String,
    /// Default repository coordinates
    pub vcs: GitInfo,
    /// Default query options
    pub options: Options,
    /// Default transport settings
    pub client: ClientOptions,
}

impl RequestDefaults {
    /// Defaults holding only a token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    /// Sets the default repository coordinates.
    pub fn with_vcs(mut self, vcs: GitInfo) -> Self {
        self.vcs = vcs;
        self
    }

    /// Sets the default query options.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Sets the default transport settings.
    pub fn with_client(mut self, client: ClientOptions) -> Self {
        self.client = client;
        self
    }

    /// Merges `overrides` into these defaults, returning a new request.
    ///
    /// A host kind that is neither overridden nor defaulted becomes `github`.
    pub fn merge(&self, overrides: Option<&CircleRequest>) -> CircleRequest {
        let empty = CircleRequest::default();
        let overrides = overrides.unwrap_or(&empty);

        let token = overrides
            .token
            .clone()
            .or_else(|| Some(self.token.clone()))
            .filter(|t| !t.is_empty());

        let mut vcs = self.vcs.merge(&overrides.vcs);
        if vcs.vcs_type.is_none() {
            vcs.vcs_type = Some(GitType::default());
        }

        CircleRequest {
            token,
            vcs,
            options: self.options.merge(&overrides.options),
            client: self.client.merge(&overrides.client),
        }
    }
}

/// A validated request: token present and coordinates complete.
#[derive(Debug, Clone, PartialEq)]
pub struct FullRequest {
    /// API token
    pub token: String,
    /// Repository coordinates
    pub vcs: GitCoordinates,
    /// Query options
    pub options: Options,
    /// Transport settings
    pub client: ClientOptions,
}

impl FullRequest {
    /// A dispatch client for this request sharing `http`'s connection pool.
    pub fn client_with(&self, http: &reqwest::Client) -> Result<CircleClient> {
        CircleClient::from_options(http.clone(), &self.token, &self.client)
    }
}
