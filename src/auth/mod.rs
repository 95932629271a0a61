//
//  circleci-api
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! CircleCI v1.1 accepts a personal API token in two ways:
//!
//! - **Query parameter**: `?circle-token=<token>` appended to every URL.
//! - **Basic authentication**: the token as the username with an empty password.
//!
//! A client picks one [`AuthMode`] and uses it for every request. The query
//! parameter is the default.
//!
//! ## Example
//!
//! ```rust
//! use circleci_api::auth::{AuthMode, Credential};
//!
//! let credential = Credential::new("my-token", AuthMode::Query);
//! assert_eq!(
//!     credential.add_token("https://circleci.com/api/v1.1/me"),
//!     "https://circleci.com/api/v1.1/me?circle-token=my-token"
//! );
//! ```

use std::fmt;

use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};

/// Name of the query parameter carrying the API token.
pub const TOKEN_PARAM: &str = "circle-token";

/// How the API token is attached to outgoing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// `circle-token` query parameter
    #[default]
    #[serde(alias = "query_param")]
    Query,
    /// HTTP Basic authentication with the token as username
    Basic,
}

/// An API token together with the way it should be sent.
#[derive(Clone)]
pub struct Credential {
    token: String,
    mode: AuthMode,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"***")
            .field("mode", &self.mode)
            .finish()
    }
}

impl Credential {
    /// Creates a credential for `token` sent using `mode`.
    pub fn new(token: impl Into<String>, mode: AuthMode) -> Self {
        Self {
            token: token.into(),
            mode,
        }
    }

    /// The raw API token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The configured auth mode.
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Attaches the token to `request` according to the auth mode.
    ///
    /// Query parameters are appended after any pairs already on the URL, so
    /// endpoint options are preserved.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self.mode {
            AuthMode::Query => request.query(&[(TOKEN_PARAM, self.token.as_str())]),
            AuthMode::Basic => request.basic_auth(&self.token, Some("")),
        }
    }

    /// Returns `url` with the token query parameter appended.
    ///
    /// Uses `&` when the URL already has a query string and `?` otherwise.
    /// Handy for artifact download links, which need the token regardless of
    /// the auth mode used for API calls.
    pub fn add_token(&self, url: &str) -> String {
        let separator = if url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}={}",
            url,
            separator,
            TOKEN_PARAM,
            urlencoding::encode(&self.token)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_token_with_question_mark() {
        let credential = Credential::new("foo", AuthMode::Query);
        assert_eq!(credential.add_token("bar.com"), "bar.com?circle-token=foo");
    }

    #[test]
    fn test_add_token_with_ampersand() {
        let credential = Credential::new("foo", AuthMode::Basic);
        assert_eq!(
            credential.add_token("bar.com?fizz=buzz"),
            "bar.com?fizz=buzz&circle-token=foo"
        );
    }

    #[test]
    fn test_debug_hides_token() {
        let credential = Credential::new("secret", AuthMode::Query);
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_auth_mode_serde() {
        let mode: AuthMode = serde_json::from_str("\"basic\"").unwrap();
        assert_eq!(mode, AuthMode::Basic);
        let mode: AuthMode = serde_json::from_str("\"query\"").unwrap();
        assert_eq!(mode, AuthMode::Query);
    }
}
