//
//  circleci-api
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the CircleCI API
//!
//! This module provides the dispatch layer every endpoint function goes
//! through. It handles the base URL, authentication, custom headers and
//! response decoding.
//!
//! ## Features
//!
//! - Token attached to every request (query parameter or basic auth)
//! - Overridable base URL for self-hosted CircleCI
//! - Custom headers merged under the fixed `User-Agent` and `Accept` headers
//! - JSON bodies in both directions
//! - Non-success statuses surfaced with the raw response body

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::common::{CircleError, Result};
use crate::auth::{AuthMode, Credential};
use crate::request::ClientOptions;

/// Public CircleCI v1.1 API base URL.
pub const API_BASE: &str = "https://circleci.com/api/v1.1";

/// The `User-Agent` sent with every request.
pub fn user_agent() -> String {
    format!("circleci-api-rs/{}", crate::VERSION)
}

/// The HTTP client for talking to CircleCI.
///
/// A `CircleClient` holds one API token and sends it with every request. It
/// is cheap to build: the underlying [`reqwest::Client`] can be shared
/// between many `CircleClient`s, which is what the [`CircleCi`](crate::CircleCi)
/// facade does when per-call overrides change the token or host.
///
/// # Example
///
/// ```rust,no_run
/// use circleci_api::api::CircleClient;
/// use circleci_api::api::common::GitCoordinates;
/// use circleci_api::api::builds;
///
/// # async fn example() -> circleci_api::Result<()> {
/// let client = CircleClient::new("my-token")?;
/// let coords = GitCoordinates::new("foo", "bar");
/// let build = builds::get_full_build(&client, &coords, 42).await?;
/// println!("{:?}", build.summary.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CircleClient {
    /// The underlying HTTP client
    http: Client,
    /// Base URL without a trailing slash
    base_url: String,
    /// Token and the way it is sent
    credential: Credential,
    /// Caller-supplied headers
    custom_headers: HeaderMap,
}

impl CircleClient {
    /// Creates a client for the public CircleCI API using query-parameter auth.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client could not be created.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Ok(Self::with_http(Self::http_client()?, token))
    }

    /// Creates a client around an existing [`reqwest::Client`].
    pub fn with_http(http: Client, token: impl Into<String>) -> Self {
        Self {
            http,
            base_url: API_BASE.to_string(),
            credential: Credential::new(token, AuthMode::default()),
            custom_headers: HeaderMap::new(),
        }
    }

    /// Builds the shared [`reqwest::Client`] used by the facade.
    pub fn http_client() -> Result<Client> {
        Ok(Client::builder().user_agent(user_agent()).build()?)
    }

    /// Creates a client from merged transport settings.
    ///
    /// # Errors
    ///
    /// [`CircleError::InvalidHeader`] if a custom header cannot be sent.
    pub fn from_options(http: Client, token: &str, options: &ClientOptions) -> Result<Self> {
        let mut client = Self::with_http(http, token)
            .with_auth_mode(options.auth_mode.unwrap_or_default())
            .with_headers(&options.custom_headers)?;

        if let Some(host) = &options.circle_host {
            client = client.with_base_url(host);
        }

        Ok(client)
    }

    /// Replaces the API base URL (for CircleCI server installations or tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Selects how the token is sent.
    pub fn with_auth_mode(mut self, mode: AuthMode) -> Self {
        self.credential = Credential::new(self.credential.token(), mode);
        self
    }

    /// Adds custom headers, replacing any earlier value for the same name.
    ///
    /// # Errors
    ///
    /// [`CircleError::InvalidHeader`] if a name or value is not valid in HTTP.
    pub fn with_headers(mut self, headers: &BTreeMap<String, String>) -> Result<Self> {
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| CircleError::InvalidHeader(format!("{name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| CircleError::InvalidHeader(format!("{name}: {e}")))?;
            self.custom_headers.insert(name, value);
        }
        Ok(self)
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured auth mode.
    pub fn auth_mode(&self) -> AuthMode {
        self.credential.mode()
    }

    /// Returns `url` with the `circle-token` query parameter appended.
    pub fn add_token(&self, url: &str) -> String {
        self.credential.add_token(url)
    }

    /// Makes an HTTP GET request to `path` and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The network request fails
    /// - The response status is not successful (2xx)
    /// - The response body cannot be deserialized to type `T`
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::GET, path), path).await
    }

    /// Makes an HTTP POST request to `path`, with `body` serialized as JSON
    /// when given, and decodes the JSON response.
    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.request(Method::POST, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request, path).await
    }

    /// Makes an HTTP DELETE request to `path` and decodes the JSON response.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::DELETE, path), path).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = method.as_str(), path, auth = ?self.credential.mode(), "sending CircleCI request");

        let mut headers = self.custom_headers.clone();
        if let Ok(agent) = HeaderValue::from_str(&user_agent()) {
            headers.insert(USER_AGENT, agent);
        }
        if !headers.contains_key(ACCEPT) {
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        }
        // basic_auth appends, so a caller-supplied value would be sent first.
        if self.credential.mode() == AuthMode::Basic {
            headers.remove(AUTHORIZATION);
        }

        let request = self.http.request(method, url).headers(headers);
        self.credential.apply_to_request(request)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, path: &str) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            warn!(%status, path, "CircleCI request failed");
            return Err(CircleError::Api { status, body });
        }

        let bytes = response.bytes().await?;
        // Some endpoints answer with an empty body; treat it as JSON null.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_slice(b"null")?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
