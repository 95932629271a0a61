//
//  circleci-api
//  api/actions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Starting, retrying and cancelling builds.
//!
//! # Endpoints
//!
//! | Function | Request |
//! |----------|---------|
//! | [`trigger_build`] | `POST /project/{vcs}[/tree/{branch}]` |
//! | [`build_action`] | `POST /project/{vcs}/{build_num}/{retry,cancel}` |
//!
//! # Example
//!
//! ```rust,no_run
//! use circleci_api::api::{actions, CircleClient};
//! use circleci_api::api::common::{BuildAction, GitCoordinates};
//! use circleci_api::request::NewBuildOptions;
//!
//! # async fn example() -> circleci_api::Result<()> {
//! let client = CircleClient::new("my-token")?;
//! let coords = GitCoordinates::new("foo", "bar");
//!
//! let build = actions::trigger_build(&client, &coords, Some("dev"), &NewBuildOptions::default()).await?;
//! if let Some(num) = build.build_num {
//!     actions::build_action(&client, &coords, num, BuildAction::Cancel).await?;
//! }
//! # Ok(())
//! # }
//! ```

use super::builds::BuildSummary;
use super::client::CircleClient;
use super::common::{BuildAction, GitCoordinates, Result};
use super::query::project_path;
use crate::request::NewBuildOptions;

/// Starts a new build, on `branch` when given.
///
/// `POST /project/{vcs}` or `POST /project/{vcs}/tree/{branch}` with `body`
/// as JSON. An empty [`NewBuildOptions`] is sent as `{}`.
pub async fn trigger_build(
    client: &CircleClient,
    vcs: &GitCoordinates,
    branch: Option<&str>,
    body: &NewBuildOptions,
) -> Result<BuildSummary> {
    let path = match branch.filter(|b| !b.is_empty()) {
        Some(branch) => project_path(vcs, &["tree", branch]),
        None => project_path(vcs, &[]),
    };
    client.post(&path, Some(body)).await
}

/// Retries or cancels an existing build.
///
/// `POST /project/{vcs}/{build_num}/{action}`
pub async fn build_action(
    client: &CircleClient,
    vcs: &GitCoordinates,
    build_num: u64,
    action: BuildAction,
) -> Result<BuildSummary> {
    let path = project_path(vcs, &[&build_num.to_string(), action.as_str()]);
    client.post::<_, ()>(&path, None).await
}
