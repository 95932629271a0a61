//
//  circleci-api
//  api/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authenticated user endpoint.
//!
//! `GET /me` returns the account that owns the API token. It is the cheapest
//! way to check that a token is valid.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::CircleClient;
use super::common::Result;

/// The account behind an API token.
///
/// Only the commonly used fields are typed; everything else the API returns
/// is kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Me {
    /// Login name on the git host
    #[serde(default)]
    pub login: Option<String>,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Avatar image URL
    #[serde(default)]
    pub avatar_url: Option<String>,

    /// Email CircleCI notifications go to
    #[serde(default)]
    pub selected_email: Option<String>,

    /// Every email known for the account
    #[serde(default)]
    pub all_emails: Vec<String>,

    /// Whether the user is a CircleCI admin
    #[serde(default)]
    pub admin: Option<bool>,

    /// Account creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Heroku API key, masked by the server
    #[serde(default)]
    pub heroku_api_key: Option<String>,

    /// Followed projects keyed by VCS URL
    #[serde(default)]
    pub projects: HashMap<String, Value>,

    /// Remaining fields
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Fetches the authenticated user.
///
/// `GET /me`
pub async fn get_me(client: &CircleClient) -> Result<Me> {
    client.get("/me").await
}
