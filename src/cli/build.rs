//
//  circleci-api
//  cli/build.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build commands.
//!
//! ```bash
//! # Last five builds across all projects
//! circleci recent-builds --limit 5
//!
//! # Failed builds of the checked-out branch
//! circleci builds --current-branch --filter failed
//!
//! # One build in full
//! circleci build 42
//! ```

use anyhow::Result;
use clap::Args;

use super::{write_json, GlobalOptions};
use crate::api::common::Filter;
use crate::context::ContextResolver;
use crate::request::{CircleRequest, Options};

/// Recent builds across all followed projects.
#[derive(Args, Debug)]
pub struct RecentBuildsCommand {
    /// Number of builds to return
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,

    /// Number of builds to skip
    #[arg(long)]
    pub offset: Option<u32>,
}

impl RecentBuildsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;
        let overrides = CircleRequest::new().options(Options {
            limit: self.limit,
            offset: self.offset,
            ..Default::default()
        });
        let builds = api.recent_builds(Some(&overrides)).await?;
        write_json(&builds, global.compact)
    }
}

/// Build summaries for the project.
#[derive(Args, Debug)]
pub struct BuildsCommand {
    /// Number of builds to return
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,

    /// Number of builds to skip
    #[arg(long)]
    pub offset: Option<u32>,

    /// completed, successful, failed or running
    #[arg(long, short = 'f')]
    pub filter: Option<Filter>,

    /// Ask for trimmed-down summaries
    #[arg(long)]
    pub shallow: bool,

    /// Use the checked-out branch when --branch is not given
    #[arg(long)]
    pub current_branch: bool,
}

impl BuildsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;

        // Unset fields fall back to the configured defaults when merged.
        let branch = if self.current_branch {
            ContextResolver::new(api.defaults().vcs.clone()).resolve_branch(global.branch.as_deref())
        } else {
            None
        };

        let overrides = CircleRequest::new().options(Options {
            branch,
            limit: self.limit,
            offset: self.offset,
            filter: self.filter,
            shallow: self.shallow.then_some(true),
            new_build_options: None,
        });
        let builds = api.builds(Some(&overrides)).await?;
        write_json(&builds, global.compact)
    }
}

/// Full details of one build.
#[derive(Args, Debug)]
pub struct BuildCommand {
    /// Build number
    pub number: u64,
}

impl BuildCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let build = global.api()?.build(self.number, None).await?;
        write_json(&build, global.compact)
    }
}
