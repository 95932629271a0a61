//
//  circleci-api
//  cli/artifact.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Artifact commands.
//!
//! ```bash
//! # Artifacts of build 42, with download links carrying the token
//! circleci artifacts 42 --with-token
//!
//! # Artifacts of the latest successful build on master
//! circleci --branch master latest-artifacts --filter successful
//! ```

use anyhow::Result;
use clap::Args;

use super::{write_json, GlobalOptions};
use crate::api::artifacts::Artifact;
use crate::api::common::Filter;
use crate::request::{CircleRequest, Options};
use crate::CircleCi;

/// Artifacts of one build.
#[derive(Args, Debug)]
pub struct ArtifactsCommand {
    /// Build number
    pub number: u64,

    /// Append the token to each download URL
    #[arg(long)]
    pub with_token: bool,
}

impl ArtifactsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;
        let artifacts = api.artifacts(self.number, None).await?;
        write_json(&tokenize(&api, artifacts, self.with_token), global.compact)
    }
}

/// Artifacts of the latest build.
#[derive(Args, Debug)]
pub struct LatestArtifactsCommand {
    /// completed, successful, failed or running
    #[arg(long, short = 'f')]
    pub filter: Option<Filter>,

    /// Append the token to each download URL
    #[arg(long)]
    pub with_token: bool,
}

impl LatestArtifactsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;
        let overrides = CircleRequest::new().options(Options {
            filter: self.filter,
            ..Default::default()
        });
        let artifacts = api.latest_artifacts(Some(&overrides)).await?;
        write_json(&tokenize(&api, artifacts, self.with_token), global.compact)
    }
}

fn tokenize(api: &CircleCi, artifacts: Vec<Artifact>, with_token: bool) -> Vec<Artifact> {
    if !with_token {
        return artifacts;
    }
    artifacts
        .into_iter()
        .map(|mut artifact| {
            artifact.url = artifact.url.map(|url| api.add_token(&url));
            artifact
        })
        .collect()
}
