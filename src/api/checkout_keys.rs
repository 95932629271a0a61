//
//  circleci-api
//  api/checkout_keys.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Checkout keys used by CircleCI to clone a project.
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | `deploy-key` | Read-only key scoped to the repository |
//! | `github-user-key` | Key tied to the user, can clone other private repos |

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::CircleClient;
use super::common::{DeleteResponse, GitCoordinates, Result};
use super::query::project_path;

/// Kind of checkout key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CheckoutKeyType {
    /// Repository deploy key
    #[default]
    DeployKey,
    /// User key on GitHub
    GithubUserKey,
}

impl CheckoutKeyType {
    /// Wire name of the key type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeployKey => "deploy-key",
            Self::GithubUserKey => "github-user-key",
        }
    }
}

impl fmt::Display for CheckoutKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A checkout key attached to a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutKey {
    /// Public half of the key
    #[serde(default)]
    pub public_key: Option<String>,

    /// Key type, as sent by the server
    #[serde(default, rename = "type")]
    pub key_type: Option<String>,

    /// MD5 fingerprint, used to address the key
    #[serde(default)]
    pub fingerprint: Option<String>,

    /// Whether this key is used for checkouts
    #[serde(default)]
    pub preferred: Option<bool>,

    /// When the key was created
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct NewCheckoutKey {
    #[serde(rename = "type")]
    key_type: CheckoutKeyType,
}

/// Lists the project's checkout keys.
///
/// `GET /project/{vcs}/checkout-key`
pub async fn list_checkout_keys(client: &CircleClient, vcs: &GitCoordinates) -> Result<Vec<CheckoutKey>> {
    client.get(&project_path(vcs, &["checkout-key"])).await
}

/// Creates a new checkout key of `key_type`.
///
/// `POST /project/{vcs}/checkout-key` with `{"type": "deploy-key"}`
pub async fn add_checkout_key(
    client: &CircleClient,
    vcs: &GitCoordinates,
    key_type: CheckoutKeyType,
) -> Result<CheckoutKey> {
    let body = NewCheckoutKey { key_type };
    client.post(&project_path(vcs, &["checkout-key"]), Some(&body)).await
}

/// Fetches a checkout key by fingerprint.
///
/// `GET /project/{vcs}/checkout-key/{fingerprint}`
pub async fn get_checkout_key(
    client: &CircleClient,
    vcs: &GitCoordinates,
    fingerprint: &str,
) -> Result<CheckoutKey> {
    client
        .get(&project_path(vcs, &["checkout-key", fingerprint]))
        .await
}

/// Deletes a checkout key by fingerprint.
///
/// `DELETE /project/{vcs}/checkout-key/{fingerprint}`
pub async fn delete_checkout_key(
    client: &CircleClient,
    vcs: &GitCoordinates,
    fingerprint: &str,
) -> Result<DeleteResponse> {
    client
        .delete(&project_path(vcs, &["checkout-key", fingerprint]))
        .await
}
