//
//  circleci-api
//  api/env.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project environment variables.
//!
//! Values returned by the API are masked (`xxxx1234`); only the last few
//! characters are ever visible after a variable is stored.

use serde::{Deserialize, Serialize};

use super::client::CircleClient;
use super::common::{DeleteResponse, GitCoordinates, Result};
use super::query::project_path;

/// A project environment variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVariable {
    /// Variable name
    pub name: String,
    /// Variable value (masked in responses)
    #[serde(default)]
    pub value: String,
}

impl EnvVariable {
    /// Creates a variable for [`add_env_var`].
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Lists the project's environment variables.
///
/// `GET /project/{vcs}/envvar`
pub async fn list_env_vars(client: &CircleClient, vcs: &GitCoordinates) -> Result<Vec<EnvVariable>> {
    client.get(&project_path(vcs, &["envvar"])).await
}

/// Creates or replaces a variable.
///
/// `POST /project/{vcs}/envvar` with `{"name": ..., "value": ...}`
pub async fn add_env_var(
    client: &CircleClient,
    vcs: &GitCoordinates,
    variable: &EnvVariable,
) -> Result<EnvVariable> {
    client.post(&project_path(vcs, &["envvar"]), Some(variable)).await
}

/// Fetches one variable by name.
///
/// `GET /project/{vcs}/envvar/{name}`
pub async fn get_env_var(client: &CircleClient, vcs: &GitCoordinates, name: &str) -> Result<EnvVariable> {
    client.get(&project_path(vcs, &["envvar", name])).await
}

/// Deletes one variable by name.
///
/// `DELETE /project/{vcs}/envvar/{name}`
pub async fn delete_env_var(
    client: &CircleClient,
    vcs: &GitCoordinates,
    name: &str,
) -> Result<DeleteResponse> {
    client.delete(&project_path(vcs, &["envvar", name])).await
}
