//
//  circleci-api
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # CircleCI API Client
//!
//! A typed client for the CircleCI v1.1 REST API.
//!
//! ## Overview
//!
//! The crate has two layers:
//!
//! - **Endpoint functions** in [`api`]: one `async fn` per endpoint, taking a
//!   [`CircleClient`](api::CircleClient) and fully specified
//!   [`GitCoordinates`]. Nothing is defaulted.
//! - **The [`CircleCi`] facade**: holds instance defaults (token, repository,
//!   branch, filters, host, headers) and merges per-call overrides over them
//!   before validating and dispatching.
//!
//! ## Features
//!
//! - **Default merging**: call override > instance default > built-in default
//! - **Validation before dispatch**: missing token or coordinates never reach the network
//! - **Two auth modes**: `circle-token` query parameter or HTTP basic auth
//! - **Custom hosts and headers**: for CircleCI server installations and proxies
//! - **Config file and git detection**: see [`config`] and [`context`]
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP client, shared types and endpoint functions
//! - [`auth`]: How the token is attached to requests
//! - [`request`]: Defaults, overrides, merging and validation
//! - [`circleci`]: The [`CircleCi`] facade
//! - [`config`]: Configuration file management
//! - [`context`]: Git repository context detection
//! - [`cli`]: Command-line interface for the `circleci` demo binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use circleci_api::{CircleCi, CircleRequest, GitInfo, RequestDefaults};
//!
//! # async fn example() -> circleci_api::Result<()> {
//! let api = CircleCi::new(RequestDefaults::new("my-token").with_vcs(GitInfo::new("foo", "bar")))?;
//!
//! let me = api.me(None).await?;
//! println!("Logged in as {:?}", me.login);
//!
//! let retried = api.retry(42, Some(&CircleRequest::new().repo("baz"))).await?;
//! println!("New build #{:?}", retried.build_num);
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions for the demo binary.
pub mod cli;

/// API client implementation for CircleCI v1.1.
///
/// The client handles authentication, request building and error handling;
/// each endpoint family lives in its own module.
pub mod api;

/// Token attachment (query parameter or basic auth).
pub mod auth;

/// The high-level facade.
pub mod circleci;

/// Configuration file management.
///
/// Manages the configuration stored in platform-specific locations:
/// - Linux: `~/.config/circleci/config.toml`
/// - macOS: `~/Library/Application Support/circleci/config.toml`
/// - Windows: `%APPDATA%\circleci\config.toml`
pub mod config;

/// Git repository context detection.
///
/// Detects the current repository's CircleCI project by parsing the `origin`
/// remote.
pub mod context;

/// Request defaults, overrides, merging and validation.
pub mod request;

pub use api::common::{get_git_type, CircleError, GitCoordinates, GitInfo, GitType, Result};
pub use circleci::CircleCi;
pub use config::Config;
pub use context::RepoContext;
pub use request::{CircleRequest, FullRequest, Options, RequestDefaults};

/// Application version constant.
///
/// Derived from Cargo.toml at compile time and sent in the `User-Agent`
/// header of every request.
///
/// # Example
///
/// ```rust
/// use circleci_api::VERSION;
///
/// println!("circleci-api-rs/{}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the demo binary.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
///
/// # Example
///
/// ```rust
/// use circleci_api::{exit_codes, CircleError};
///
/// assert_eq!(exit_codes::for_error(&CircleError::MissingToken), exit_codes::USAGE);
/// ```
pub mod exit_codes {
    use reqwest::StatusCode;

    use crate::CircleError;

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage, arguments or configuration.
    ///
    /// Also used when the token or repository coordinates are missing.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed (HTTP 401).
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found (HTTP 404).
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded (HTTP 429).
    pub const RATE_LIMIT: i32 = 32;

    /// The exit code matching a client error.
    pub fn for_error(err: &CircleError) -> i32 {
        if err.is_config_error() {
            return USAGE;
        }
        match err.status() {
            Some(StatusCode::UNAUTHORIZED) => AUTH_ERROR,
            Some(StatusCode::NOT_FOUND) => NOT_FOUND,
            Some(StatusCode::TOO_MANY_REQUESTS) => RATE_LIMIT,
            _ => ERROR,
        }
    }

}
