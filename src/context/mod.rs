//
//  circleci-api
//  context/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Repository Context Detection
//!
//! Works out which CircleCI project the current directory belongs to by
//! reading the `origin` remote of the enclosing git repository.
//!
//! ## Example
//!
//! ```rust,no_run
//! use circleci_api::context::RepoContext;
//!
//! let ctx = RepoContext::detect()?;
//! println!("{} on {}", ctx.coordinates.full_name(), ctx.coordinates.vcs_type);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod git;
mod resolver;

pub use git::*;
pub use resolver::*;

use anyhow::Result;

use crate::api::common::GitCoordinates;

/// A CircleCI project detected from a git remote.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoContext {
    /// Git host name, e.g. `github.com`
    pub host: String,
    /// Project coordinates
    pub coordinates: GitCoordinates,
    /// Checked-out branch, when known
    pub branch: Option<String>,
}

impl RepoContext {
    /// Detects the project from the repository containing the current
    /// directory.
    ///
    /// # Errors
    ///
    /// Fails outside a git repository, without an `origin` remote, or when
    /// the remote is not on GitHub or Bitbucket.
    pub fn detect() -> Result<Self> {
        Self::from_git(&GitContext::open()?)
    }

    /// Detects the project from an opened repository.
    pub fn from_git(git: &GitContext) -> Result<Self> {
        let url = git
            .origin_url()
            .ok_or_else(|| anyhow::anyhow!("No '{}' remote found", ORIGIN))?;

        let mut ctx = parse_remote_url(&url)?;
        ctx.branch = git.current_branch().ok().filter(|b| b != "HEAD");
        Ok(ctx)
    }
}
