//
//  circleci-api
//  api/cache.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build cache management.

use serde::{Deserialize, Serialize};

use super::client::CircleClient;
use super::common::{GitCoordinates, Result};
use super::query::project_path;

/// Response to clearing the build cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClearCacheResponse {
    /// Human readable status, e.g. `"build dependency caches deleted"`
    #[serde(default)]
    pub status: Option<String>,
}

/// Clears the project's build cache.
///
/// `DELETE /project/{vcs}/build-cache`
pub async fn clear_cache(client: &CircleClient, vcs: &GitCoordinates) -> Result<ClearCacheResponse> {
    client.delete(&project_path(vcs, &["build-cache"])).await
}
