//
//  circleci-api
//  circleci.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # CircleCI Facade
//!
//! [`CircleCi`] holds a set of [`RequestDefaults`] and exposes one method per
//! endpoint. Every method takes optional per-call overrides which are merged
//! over the defaults, validated, and then dispatched.
//!
//! ## Example
//!
//! ```rust,no_run
//! use circleci_api::{CircleCi, CircleRequest, GitInfo, RequestDefaults};
//! use circleci_api::request::Options;
//!
//! # async fn example() -> circleci_api::Result<()> {
//! let api = CircleCi::new(
//!     RequestDefaults::new("my-token")
//!         .with_vcs(GitInfo::new("foo", "bar"))
//!         .with_options(Options { branch: Some("master".into()), ..Default::default() }),
//! )?;
//!
//! // Uses the defaults as-is
//! let artifacts = api.latest_artifacts(None).await?;
//!
//! // Same call against another repository
//! let other = CircleRequest::new().repo("baz");
//! let builds = api.builds(Some(&other)).await?;
//! # Ok(())
//! # }
//! ```

use reqwest::Client;
use tracing::debug;

use crate::api::actions;
use crate::api::artifacts::{self, Artifact};
use crate::api::builds::{self, Build, BuildSummary};
use crate::api::cache::{self, ClearCacheResponse};
use crate::api::checkout_keys::{self, CheckoutKey, CheckoutKeyType};
use crate::api::client::CircleClient;
use crate::api::common::{BuildAction, DeleteResponse, Result};
use crate::api::env::{self, EnvVariable};
use crate::api::keys::{self, HerokuKey, SshKey};
use crate::api::metadata::{self, TestMetadataResponse};
use crate::api::projects::{self, FollowProjectResponse, Project};
use crate::api::user::{self, Me};
use crate::auth::{AuthMode, Credential};
use crate::request::{CircleRequest, FullRequest, RequestDefaults};

/// Branch used by [`CircleCi::builds_for`] and [`CircleCi::trigger_build_for`]
/// when none is given.
pub const DEFAULT_BRANCH: &str = "master";

/// A CircleCI API handle with instance-level defaults.
///
/// The defaults are read-only after construction. Clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct CircleCi {
    defaults: RequestDefaults,
    http: Client,
}

impl CircleCi {
    /// Creates a facade around `defaults`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client could not be created.
    pub fn new(defaults: RequestDefaults) -> Result<Self> {
        Ok(Self::with_http(defaults, CircleClient::http_client()?))
    }

    /// Creates a facade that sends requests through `http`.
    pub fn with_http(defaults: RequestDefaults, http: Client) -> Self {
        Self { defaults, http }
    }

    /// The instance defaults.
    pub fn defaults(&self) -> &RequestDefaults {
        &self.defaults
    }

    /// Returns `url` with the default token as `circle-token` query parameter.
    pub fn add_token(&self, url: &str) -> String {
        Credential::new(self.defaults.token.as_str(), AuthMode::Query).add_token(url)
    }

    /// Merges and fully validates a request for a project endpoint.
    fn project(&self, overrides: Option<&CircleRequest>) -> Result<(CircleClient, FullRequest)> {
        let request = self.defaults.merge(overrides).validate()?;
        let client = request.client_with(&self.http)?;
        debug!(project = %request.vcs.full_name(), vcs = %request.vcs.vcs_type, "resolved request");
        Ok((client, request))
    }

    /// Merges a request for an endpoint that only needs a token.
    fn account(&self, overrides: Option<&CircleRequest>) -> Result<(CircleClient, CircleRequest)> {
        let request = self.defaults.merge(overrides);
        let client = request.client_with(&self.http)?;
        Ok((client, request))
    }

    // User and projects

    /// The account behind the token.
    pub async fn me(&self, overrides: Option<&CircleRequest>) -> Result<Me> {
        let (client, _) = self.account(overrides)?;
        user::get_me(&client).await
    }

    /// Every project the user follows.
    pub async fn projects(&self, overrides: Option<&CircleRequest>) -> Result<Vec<Project>> {
        let (client, _) = self.account(overrides)?;
        projects::get_all_projects(&client).await
    }

    /// Follows the project.
    pub async fn follow_project(&self, overrides: Option<&CircleRequest>) -> Result<FollowProjectResponse> {
        let (client, request) = self.project(overrides)?;
        projects::follow_project(&client, &request.vcs).await
    }

    // Builds

    /// Recent builds across all followed projects, paged by `limit`/`offset`.
    pub async fn recent_builds(&self, overrides: Option<&CircleRequest>) -> Result<Vec<BuildSummary>> {
        let (client, request) = self.account(overrides)?;
        builds::get_recent_builds(&client, &request.options).await
    }

    /// Build summaries for the project, on `options.branch` when set.
    pub async fn builds(&self, overrides: Option<&CircleRequest>) -> Result<Vec<BuildSummary>> {
        let (client, request) = self.project(overrides)?;
        let branch = request.options.branch.as_deref();
        builds::get_build_summaries(&client, &request.vcs, branch, &request.options).await
    }

    /// Build summaries for `branch`, or [`DEFAULT_BRANCH`].
    ///
    /// The explicit branch always wins over `options.branch`.
    pub async fn builds_for(
        &self,
        branch: Option<&str>,
        overrides: Option<&CircleRequest>,
    ) -> Result<Vec<BuildSummary>> {
        let (client, request) = self.project(overrides)?;
        let branch = branch.unwrap_or(DEFAULT_BRANCH);
        builds::get_build_summaries(&client, &request.vcs, Some(branch), &request.options).await
    }

    /// Full details of build `build_num`.
    pub async fn build(&self, build_num: u64, overrides: Option<&CircleRequest>) -> Result<Build> {
        let (client, request) = self.project(overrides)?;
        builds::get_full_build(&client, &request.vcs, build_num).await
    }

    /// Triggers a build on `options.branch` (or the default branch of the
    /// repository) with `options.new_build_options` as body.
    pub async fn trigger_build(&self, overrides: Option<&CircleRequest>) -> Result<BuildSummary> {
        let (client, request) = self.project(overrides)?;
        let body = request.options.new_build_options.clone().unwrap_or_default();
        actions::trigger_build(&client, &request.vcs, request.options.branch.as_deref(), &body).await
    }

    /// Triggers a build on `branch`, or [`DEFAULT_BRANCH`].
    pub async fn trigger_build_for(
        &self,
        branch: Option<&str>,
        overrides: Option<&CircleRequest>,
    ) -> Result<BuildSummary> {
        let (client, request) = self.project(overrides)?;
        let body = request.options.new_build_options.clone().unwrap_or_default();
        let branch = branch.unwrap_or(DEFAULT_BRANCH);
        actions::trigger_build(&client, &request.vcs, Some(branch), &body).await
    }

    /// Retries build `build_num`.
    pub async fn retry(&self, build_num: u64, overrides: Option<&CircleRequest>) -> Result<BuildSummary> {
        let (client, request) = self.project(overrides)?;
        actions::build_action(&client, &request.vcs, build_num, BuildAction::Retry).await
    }

    /// Cancels build `build_num`.
    pub async fn cancel(&self, build_num: u64, overrides: Option<&CircleRequest>) -> Result<BuildSummary> {
        let (client, request) = self.project(overrides)?;
        actions::build_action(&client, &request.vcs, build_num, BuildAction::Cancel).await
    }

    // Artifacts

    /// Artifacts of build `build_num`.
    pub async fn artifacts(&self, build_num: u64, overrides: Option<&CircleRequest>) -> Result<Vec<Artifact>> {
        let (client, request) = self.project(overrides)?;
        artifacts::get_build_artifacts(&client, &request.vcs, build_num).await
    }

    /// Artifacts of the latest build, narrowed by `options.branch` and
    /// `options.filter`.
    pub async fn latest_artifacts(&self, overrides: Option<&CircleRequest>) -> Result<Vec<Artifact>> {
        let (client, request) = self.project(overrides)?;
        artifacts::get_latest_artifacts(&client, &request.vcs, &request.options).await
    }

    // Environment variables

    /// Lists the project's environment variables.
    pub async fn list_env_vars(&self, overrides: Option<&CircleRequest>) -> Result<Vec<EnvVariable>> {
        let (client, request) = self.project(overrides)?;
        env::list_env_vars(&client, &request.vcs).await
    }

    /// Adds or replaces an environment variable.
    pub async fn add_env_var(
        &self,
        variable: &EnvVariable,
        overrides: Option<&CircleRequest>,
    ) -> Result<EnvVariable> {
        let (client, request) = self.project(overrides)?;
        env::add_env_var(&client, &request.vcs, variable).await
    }

    /// Fetches an environment variable by name.
    pub async fn get_env_var(&self, name: &str, overrides: Option<&CircleRequest>) -> Result<EnvVariable> {
        let (client, request) = self.project(overrides)?;
        env::get_env_var(&client, &request.vcs, name).await
    }

    /// Deletes an environment variable by name.
    pub async fn delete_env_var(&self, name: &str, overrides: Option<&CircleRequest>) -> Result<DeleteResponse> {
        let (client, request) = self.project(overrides)?;
        env::delete_env_var(&client, &request.vcs, name).await
    }

    // Checkout keys

    /// Lists the project's checkout keys.
    pub async fn list_checkout_keys(&self, overrides: Option<&CircleRequest>) -> Result<Vec<CheckoutKey>> {
        let (client, request) = self.project(overrides)?;
        checkout_keys::list_checkout_keys(&client, &request.vcs).await
    }

    /// Creates a checkout key.
    pub async fn add_checkout_key(
        &self,
        key_type: CheckoutKeyType,
        overrides: Option<&CircleRequest>,
    ) -> Result<CheckoutKey> {
        let (client, request) = self.project(overrides)?;
        checkout_keys::add_checkout_key(&client, &request.vcs, key_type).await
    }

    /// Fetches a checkout key by fingerprint.
    pub async fn get_checkout_key(
        &self,
        fingerprint: &str,
        overrides: Option<&CircleRequest>,
    ) -> Result<CheckoutKey> {
        let (client, request) = self.project(overrides)?;
        checkout_keys::get_checkout_key(&client, &request.vcs, fingerprint).await
    }

    /// Deletes a checkout key by fingerprint.
    pub async fn delete_checkout_key(
        &self,
        fingerprint: &str,
        overrides: Option<&CircleRequest>,
    ) -> Result<DeleteResponse> {
        let (client, request) = self.project(overrides)?;
        checkout_keys::delete_checkout_key(&client, &request.vcs, fingerprint).await
    }

    // Misc

    /// Clears the project's build cache.
    pub async fn clear_cache(&self, overrides: Option<&CircleRequest>) -> Result<ClearCacheResponse> {
        let (client, request) = self.project(overrides)?;
        cache::clear_cache(&client, &request.vcs).await
    }

    /// Test results of build `build_num`.
    pub async fn test_metadata(
        &self,
        build_num: u64,
        overrides: Option<&CircleRequest>,
    ) -> Result<TestMetadataResponse> {
        let (client, request) = self.project(overrides)?;
        metadata::get_test_metadata(&client, &request.vcs, build_num).await
    }

    /// Adds an SSH key to the project.
    pub async fn add_ssh_key(&self, key: &SshKey, overrides: Option<&CircleRequest>) -> Result<()> {
        let (client, request) = self.project(overrides)?;
        keys::add_ssh_key(&client, &request.vcs, key).await
    }

    /// Sets the user's Heroku API key.
    pub async fn add_heroku_key(&self, key: &HerokuKey, overrides: Option<&CircleRequest>) -> Result<()> {
        let (client, _) = self.account(overrides)?;
        keys::add_heroku_key(&client, key).await
    }
}
