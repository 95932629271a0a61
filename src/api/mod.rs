//
//  circleci-api
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Low-level access to the CircleCI v1.1 REST API. Every endpoint is a free
//! `async fn` taking a [`CircleClient`] and fully specified
//! [`GitCoordinates`](common::GitCoordinates); no defaults are applied here.
//! For default merging and validation use the [`CircleCi`](crate::CircleCi)
//! facade.
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP client with authentication and request handling
//! - [`query`]: Project paths and query strings
//! - [`common`]: Shared types (git host kind, coordinates, errors)
//! - One module per endpoint family: [`user`], [`projects`], [`builds`],
//!   [`actions`], [`artifacts`], [`env`], [`checkout_keys`], [`cache`],
//!   [`metadata`], [`keys`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use circleci_api::api::{artifacts, CircleClient};
//! use circleci_api::api::common::GitCoordinates;
//!
//! # async fn example() -> circleci_api::Result<()> {
//! let client = CircleClient::new("your-token")?
//!     .with_base_url("https://circleci.example.com/api/v1.1");
//!
//! let coords = GitCoordinates::new("foo", "bar");
//! for artifact in artifacts::get_build_artifacts(&client, &coords, 42).await? {
//!     if let Some(url) = artifact.url {
//!         println!("{}", client.add_token(&url));
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every function returns [`CircleError`]:
//!
//! - `Api`: non-2xx status, with the raw body
//! - `Http`: the request could not be sent
//! - `Decode`: the body was not the expected JSON

/// Core HTTP client wrapper for the CircleCI API.
pub mod client;

/// Shared types: git host kind, coordinates, filters and errors.
pub mod common;

/// Path and query-string construction.
pub mod query;

/// `GET /me`
pub mod user;

/// Followed projects.
pub mod projects;

/// Build lists and build details.
pub mod builds;

/// Triggering, retrying and cancelling builds.
pub mod actions;

/// Build artifacts.
pub mod artifacts;

/// Project environment variables.
pub mod env;

/// Project checkout keys.
pub mod checkout_keys;

/// Build cache.
pub mod cache;

/// Test metadata.
pub mod metadata;

/// SSH and Heroku keys.
pub mod keys;

/// Re-export of the main CircleCI API client.
pub use client::{CircleClient, API_BASE};

/// Re-export of common API types.
pub use common::{CircleError, GitCoordinates, GitInfo, GitType, Result};
