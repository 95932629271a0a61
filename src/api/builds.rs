//
//  circleci-api
//  api/builds.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build listing and build detail endpoints.
//!
//! # Endpoints
//!
//! | Function | Request |
//! |----------|---------|
//! | [`get_recent_builds`] | `GET /recent-builds?limit=&offset=` |
//! | [`get_build_summaries`] | `GET /project/{vcs}[/tree/{branch}]?limit=&offset=&filter=&shallow=` |
//! | [`get_full_build`] | `GET /project/{vcs}/{build_num}` |
//!
//! # Build Lifecycle
//!
//! ```text
//! queued -> scheduled -> running -> finished
//!                                 \-> not_run / not_running
//! ```
//!
//! The `outcome` of a finished build is one of `success`, `failed`,
//! `canceled`, `infrastructure_fail`, `timedout` or `no_tests`.
//!
//! # Example
//!
//! ```rust,no_run
//! use circleci_api::api::{builds, CircleClient};
//! use circleci_api::api::common::GitCoordinates;
//! use circleci_api::request::Options;
//!
//! # async fn example() -> circleci_api::Result<()> {
//! let client = CircleClient::new("my-token")?;
//! let coords = GitCoordinates::new("foo", "bar");
//! let options = Options { limit: Some(5), ..Default::default() };
//!
//! for build in builds::get_build_summaries(&client, &coords, Some("master"), &options).await? {
//!     println!("#{:?} {:?}", build.build_num, build.outcome);
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::CircleClient;
use super::common::{GitCoordinates, Result};
use super::query::{project_path, query_string};
use crate::request::Options;

/// Summary of a single build, as returned by list and action endpoints.
///
/// All fields are optional: different endpoints return different subsets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildSummary {
    /// Build number within the project
    #[serde(default)]
    pub build_num: Option<u64>,

    /// Link to the build in the CircleCI web app
    #[serde(default)]
    pub build_url: Option<String>,

    /// Repository URL on the git host
    #[serde(default)]
    pub vcs_url: Option<String>,

    /// Repository owner
    #[serde(default)]
    pub username: Option<String>,

    /// Repository name
    #[serde(default)]
    pub reponame: Option<String>,

    /// Branch the build ran on
    #[serde(default)]
    pub branch: Option<String>,

    /// Tag the build ran on, if any
    #[serde(default)]
    pub vcs_tag: Option<String>,

    /// Commit that was built
    #[serde(default)]
    pub vcs_revision: Option<String>,

    /// Commit subject line
    #[serde(default)]
    pub subject: Option<String>,

    /// Commit body
    #[serde(default)]
    pub body: Option<String>,

    /// Commit author
    #[serde(default)]
    pub author_name: Option<String>,

    /// Commit committer
    #[serde(default)]
    pub committer_name: Option<String>,

    /// Why the build was started (`github`, `retry`, `api`, ...)
    #[serde(default)]
    pub why: Option<String>,

    /// `queued`, `scheduled`, `not_run`, `not_running`, `running` or `finished`
    #[serde(default)]
    pub lifecycle: Option<String>,

    /// Final outcome of a finished build
    #[serde(default)]
    pub outcome: Option<String>,

    /// Combined lifecycle/outcome status (`success`, `fixed`, `failed`, ...)
    #[serde(default)]
    pub status: Option<String>,

    /// Previous build's status, when known
    #[serde(default)]
    pub previous: Option<Value>,

    /// When the build was queued
    #[serde(default)]
    pub queued_at: Option<DateTime<Utc>>,

    /// When the build started running
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,

    /// When the build stopped
    #[serde(default)]
    pub stop_time: Option<DateTime<Utc>>,

    /// Wall-clock run time in milliseconds
    #[serde(default)]
    pub build_time_millis: Option<u64>,
}

/// Full details of a single build, including its steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Build {
    /// Fields shared with [`BuildSummary`]
    #[serde(flatten)]
    pub summary: BuildSummary,

    /// Steps in execution order
    #[serde(default)]
    pub steps: Vec<BuildStep>,

    /// Number of containers used
    #[serde(default)]
    pub parallel: Option<u32>,

    /// Whether the build failed
    #[serde(default)]
    pub failed: Option<bool>,

    /// Whether the build timed out
    #[serde(default)]
    pub timedout: Option<bool>,

    /// Whether the build was canceled
    #[serde(default)]
    pub canceled: Option<bool>,

    /// Whether this is an OSS build
    #[serde(default)]
    pub oss: Option<bool>,

    /// Build parameters the build was started with
    #[serde(default)]
    pub build_parameters: Option<HashMap<String, Value>>,
}

/// One step of a build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildStep {
    /// Step name as shown in the UI
    #[serde(default)]
    pub name: Option<String>,

    /// One action per container
    #[serde(default)]
    pub actions: Vec<Value>,
}

/// Recent builds across every project the token's user follows.
///
/// `GET /recent-builds`, with `limit` and `offset` taken from `options`.
pub async fn get_recent_builds(client: &CircleClient, options: &Options) -> Result<Vec<BuildSummary>> {
    let path = format!("/recent-builds{}", query_string(options.pagination_query()));
    client.get(&path).await
}

/// Recent build summaries for a project, optionally for one branch.
///
/// `GET /project/{vcs}` or `GET /project/{vcs}/tree/{branch}`. The query is
/// built from `limit`, `offset`, `filter` and `shallow`; `options.branch` is
/// ignored in favour of the explicit `branch` argument.
pub async fn get_build_summaries(
    client: &CircleClient,
    vcs: &GitCoordinates,
    branch: Option<&str>,
    options: &Options,
) -> Result<Vec<BuildSummary>> {
    let base = match branch.filter(|b| !b.is_empty()) {
        Some(branch) => project_path(vcs, &["tree", branch]),
        None => project_path(vcs, &[]),
    };
    let path = format!("{}{}", base, query_string(options.build_list_query()));
    client.get(&path).await
}

/// Full details for a single build.
///
/// `GET /project/{vcs}/{build_num}`
pub async fn get_full_build(client: &CircleClient, vcs: &GitCoordinates, build_num: u64) -> Result<Build> {
    let path = project_path(vcs, &[&build_num.to_string()]);
    client.get(&path).await
}
