//
//  circleci-api
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads the instance defaults for a [`CircleCi`](crate::CircleCi) facade from
//! a TOML file stored in a platform-specific directory, with the API token
//! overridable from the environment.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/circleci/config.toml`
//! - **macOS**: `~/Library/Application Support/circleci/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\circleci\config.toml`
//!
//! A missing file is not an error; every key is optional.
//!
//! ## Example Configuration File
//!
//! ```toml
//! token = "0123456789abcdef"
//! host = "https://circleci.example.com/api/v1.1"
//! auth = "basic"
//!
//! [vcs]
//! type = "github"
//! owner = "foo"
//! repo = "bar"
//!
//! [options]
//! branch = "master"
//! filter = "successful"
//! limit = 10
//!
//! [headers]
//! x-request-source = "nightly"
//! ```
//!
//! ## Environment
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `CIRCLECI_TOKEN` | Replaces `token` when set and non-empty |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use circleci_api::{CircleCi, Config};
//!
//! let config = Config::load()?;
//! let api = CircleCi::new(config.request_defaults())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::common::GitInfo;
use crate::auth::AuthMode;
use crate::request::{ClientOptions, Options, RequestDefaults};

/// Environment variable that overrides the configured token.
pub const TOKEN_ENV: &str = "CIRCLECI_TOKEN";

/// Persistent client configuration.
///
/// # Examples
///
/// ```rust
/// use circleci_api::config::Config;
///
/// let config: Config = toml::from_str(r#"
///     token = "T"
///     [vcs]
///     owner = "foo"
///     repo = "bar"
/// "#).unwrap();
///
/// let defaults = config.request_defaults();
/// assert_eq!(defaults.token, "T");
/// assert_eq!(defaults.vcs.owner.as_deref(), Some("foo"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Personal API token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// API base URL for CircleCI server installations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// How the token is sent (`query` or `basic`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthMode>,

    /// Default repository coordinates.
    #[serde(default)]
    pub vcs: GitInfo,

    /// Default query options.
    #[serde(default)]
    pub options: Options,

    /// Extra headers sent with every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Config {
    /// Loads the configuration from the default location and applies
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let config = Self::load_from(&path)?;
        Ok(config.with_token_override(std::env::var(TOKEN_ENV).ok()))
    }

    /// Loads the configuration from `path`, without environment overrides.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "circleci")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Replaces the token with `token` when it is present and non-empty.
    pub fn with_token_override(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.token = Some(token);
        }
        self
    }

    /// Instance defaults for a [`CircleCi`](crate::CircleCi) facade.
    ///
    /// A missing token becomes the empty string, which fails validation on
    /// the first call rather than here.
    pub fn request_defaults(&self) -> RequestDefaults {
        RequestDefaults::new(self.token.clone().unwrap_or_default())
            .with_vcs(self.vcs.clone())
            .with_options(self.options.clone())
            .with_client(ClientOptions {
                circle_host: self.host.clone(),
                custom_headers: self.headers.clone(),
                auth_mode: self.auth,
            })
    }
}
