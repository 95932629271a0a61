//
//  circleci-api
//  api/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project listing and following.
//!
//! # Endpoints
//!
//! | Function | Request |
//! |----------|---------|
//! | [`get_all_projects`] | `GET /projects` |
//! | [`follow_project`] | `POST /project/{vcs}/follow` |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::builds::BuildSummary;
use super::client::CircleClient;
use super::common::{GitCoordinates, Result};
use super::query::project_path;

/// A project followed by the token's user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    /// Repository owner
    #[serde(default)]
    pub username: Option<String>,

    /// Repository name
    #[serde(default)]
    pub reponame: Option<String>,

    /// Repository URL on the git host
    #[serde(default)]
    pub vcs_url: Option<String>,

    /// `github` or `bitbucket`
    #[serde(default)]
    pub vcs_type: Option<String>,

    /// Default branch of the repository
    #[serde(default)]
    pub default_branch: Option<String>,

    /// Whether builds run on this project
    #[serde(default)]
    pub following: Option<bool>,

    /// Whether this is an open-source project
    #[serde(default)]
    pub oss: Option<bool>,

    /// Per-branch build state keyed by branch name
    #[serde(default)]
    pub branches: HashMap<String, Value>,
}

/// Response to following a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FollowProjectResponse {
    /// Whether the project is now followed
    #[serde(default)]
    pub following: Option<bool>,

    /// Whether the project uses workflows
    #[serde(default)]
    pub workflow: Option<bool>,

    /// The first build started by following, if one was
    #[serde(default)]
    pub first_build: Option<BuildSummary>,
}

/// Lists every project the token's user follows.
///
/// `GET /projects`
pub async fn get_all_projects(client: &CircleClient) -> Result<Vec<Project>> {
    client.get("/projects").await
}

/// Follows a project, starting its first build if it has none.
///
/// `POST /project/{vcs}/follow`
pub async fn follow_project(client: &CircleClient, vcs: &GitCoordinates) -> Result<FollowProjectResponse> {
    let path = project_path(vcs, &["follow"]);
    client.post::<_, ()>(&path, None).await
}
