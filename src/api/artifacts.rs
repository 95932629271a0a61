//
//  circleci-api
//  api/artifacts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build artifacts.
//!
//! Artifact URLs point at CircleCI storage and need the API token to
//! download; use [`CircleClient::add_token`] on [`Artifact::url`].

use serde::{Deserialize, Serialize};

use super::client::CircleClient;
use super::common::{GitCoordinates, Result};
use super::query::{project_path, query_string};
use crate::request::Options;

/// A file saved by a build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    /// Path inside the build container
    #[serde(default)]
    pub path: Option<String>,

    /// Path with the home directory abbreviated
    #[serde(default)]
    pub pretty_path: Option<String>,

    /// Container that produced the artifact
    #[serde(default)]
    pub node_index: Option<u32>,

    /// Download URL
    #[serde(default)]
    pub url: Option<String>,
}

/// Artifacts of a single build.
///
/// `GET /project/{vcs}/{build_num}/artifacts`
pub async fn get_build_artifacts(
    client: &CircleClient,
    vcs: &GitCoordinates,
    build_num: u64,
) -> Result<Vec<Artifact>> {
    let path = project_path(vcs, &[&build_num.to_string(), "artifacts"]);
    client.get(&path).await
}

/// Artifacts of the latest build, narrowed by `options.branch` and
/// `options.filter` when set.
///
/// `GET /project/{vcs}/latest/artifacts?branch=&filter=`
pub async fn get_latest_artifacts(
    client: &CircleClient,
    vcs: &GitCoordinates,
    options: &Options,
) -> Result<Vec<Artifact>> {
    let path = format!(
        "{}{}",
        project_path(vcs, &["latest", "artifacts"]),
        query_string(options.artifacts_query())
    );
    client.get(&path).await
}
