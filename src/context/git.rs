//
//  circleci-api
//  context/git.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Thin wrapper over a local git repository.

use std::path::Path;

use anyhow::Result;
use git2::Repository;

/// Name of the remote used to detect the CircleCI project.
pub const ORIGIN: &str = "origin";

/// A local git repository.
pub struct GitContext {
    repo: Repository,
}

impl GitContext {
    /// Opens the repository containing the current directory.
    pub fn open() -> Result<Self> {
        Self::discover(Path::new("."))
    }

    /// Opens the repository containing `path`, searching parent directories.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(Self { repo })
    }

    /// Short name of the checked-out branch (`HEAD` when detached).
    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        Ok(head.shorthand().unwrap_or("HEAD").to_string())
    }

    /// URL of remote `name`, if it exists.
    pub fn remote_url(&self, name: &str) -> Option<String> {
        self.repo
            .find_remote(name)
            .ok()
            .and_then(|remote| remote.url().map(str::to_string))
    }

    /// URL of the `origin` remote, if it exists.
    pub fn origin_url(&self) -> Option<String> {
        self.remote_url(ORIGIN)
    }
}
