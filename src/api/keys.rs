//
//  circleci-api
//  api/keys.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! SSH and Heroku keys.
//!
//! Both endpoints answer with an empty body on success. Any JSON body a
//! server sends instead is ignored.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use super::client::CircleClient;
use super::common::{GitCoordinates, Result};
use super::query::project_path;

/// A private SSH key made available to builds for one host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshKey {
    /// Host the key is used for (empty for all hosts)
    pub hostname: String,
    /// PEM encoded private key
    pub private_key: String,
}

/// A Heroku API key attached to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HerokuKey {
    /// Heroku API key
    pub apikey: String,
}

/// Adds an SSH key to a project.
///
/// `POST /project/{vcs}/ssh-key`
pub async fn add_ssh_key(client: &CircleClient, vcs: &GitCoordinates, key: &SshKey) -> Result<()> {
    let _: IgnoredAny = client.post(&project_path(vcs, &["ssh-key"]), Some(key)).await?;
    Ok(())
}

/// Sets the user's Heroku API key.
///
/// `POST /user/heroku-key`
pub async fn add_heroku_key(client: &CircleClient, key: &HerokuKey) -> Result<()> {
    let _: IgnoredAny = client.post("/user/heroku-key", Some(key)).await?;
    Ok(())
}
