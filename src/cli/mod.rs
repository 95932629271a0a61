//
//  circleci-api
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Command-Line Interface
//!
//! The `circleci` demo binary. Every subcommand calls one read-only endpoint
//! through the [`CircleCi`] facade and prints the response as JSON.
//!
//! ## Resolving the Project
//!
//! Repository coordinates come from, in order:
//!
//! 1. `--owner`, `--repo` and `--vcs-type`
//! 2. the `[vcs]` table of the config file
//! 3. the `origin` remote of the current git repository
//!
//! ## Examples
//!
//! ```bash
//! circleci --token <TOKEN> login
//! circleci me
//! circleci --owner foo --repo bar builds --limit 5 --filter failed
//! circleci build 42
//! circleci --branch master latest-artifacts
//! ```

mod artifact;
mod build;
mod output;
mod project;
mod user;

pub use artifact::{ArtifactsCommand, LatestArtifactsCommand};
pub use build::{BuildCommand, BuildsCommand, RecentBuildsCommand};
pub use output::{write_json, write_json_to};
pub use project::{CheckoutKeysCommand, EnvCommand};
pub use user::{LoginCommand, MeCommand, ProjectsCommand};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::common::{get_git_type, GitInfo};
use crate::auth::AuthMode;
use crate::config::Config;
use crate::context::ContextResolver;
use crate::request::RequestDefaults;
use crate::CircleCi;

/// Root command.
#[derive(Parser, Debug)]
#[command(
    name = "circleci",
    version,
    about = "Query the CircleCI v1.1 API from the command line",
    propagate_version = true,
    after_help = "Use 'circleci <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options shared by every subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// API token (overrides the config file)
    #[arg(long, global = true, env = "CIRCLECI_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository owner
    #[arg(long, short = 'o', global = true)]
    pub owner: Option<String>,

    /// Repository name
    #[arg(long, short = 'r', global = true)]
    pub repo: Option<String>,

    /// Git host kind: github or bitbucket
    #[arg(long, global = true)]
    pub vcs_type: Option<String>,

    /// Branch to query
    #[arg(long, short = 'b', global = true)]
    pub branch: Option<String>,

    /// API base URL (for CircleCI server)
    #[arg(long, global = true, env = "CIRCLECI_HOST")]
    pub host: Option<String>,

    /// Send the token with HTTP basic auth instead of the query string
    #[arg(long, global = true)]
    pub basic_auth: bool,

    /// Print compact JSON
    #[arg(long, global = true)]
    pub compact: bool,
}

impl GlobalOptions {
    /// Instance defaults from the config file with command-line overrides
    /// applied and missing coordinates filled in from git.
    pub fn request_defaults(&self, config: &Config) -> RequestDefaults {
        let mut defaults = config.request_defaults();

        if let Some(token) = &self.token {
            defaults.token = token.clone();
        }

        let explicit = GitInfo {
            vcs_type: self.vcs_type.as_deref().map(get_git_type),
            owner: self.owner.clone(),
            repo: self.repo.clone(),
        };
        defaults.vcs = ContextResolver::new(defaults.vcs.clone()).resolve(&explicit);

        if let Some(branch) = &self.branch {
            defaults.options.branch = Some(branch.clone());
        }
        if let Some(host) = &self.host {
            defaults.client.circle_host = Some(host.clone());
        }
        if self.basic_auth {
            defaults.client.auth_mode = Some(AuthMode::Basic);
        }

        defaults
    }

    /// A facade built from the user's configuration and these options.
    pub fn api(&self) -> Result<CircleCi> {
        let config = Config::load()?;
        Ok(CircleCi::new(self.request_defaults(&config))?)
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify a token and save it to the config file
    Login(LoginCommand),

    /// Show the account behind the token
    Me(MeCommand),

    /// List followed projects
    Projects(ProjectsCommand),

    /// Recent builds across all followed projects
    RecentBuilds(RecentBuildsCommand),

    /// Build summaries for the project
    #[command(visible_alias = "ls")]
    Builds(BuildsCommand),

    /// Full details of one build
    Build(BuildCommand),

    /// Artifacts of one build
    Artifacts(ArtifactsCommand),

    /// Artifacts of the latest build
    LatestArtifacts(LatestArtifactsCommand),

    /// Project environment variables
    Env(EnvCommand),

    /// Project checkout keys
    CheckoutKeys(CheckoutKeysCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::GitType;

    #[test]
    fn test_flags_override_config() {
        let config: Config = toml::from_str(
            r#"
            token = "file-token"
            [vcs]
            owner = "cfg"
            repo = "cfg-repo"
            "#,
        )
        .unwrap();

        let global = GlobalOptions {
            token: Some("flag-token".to_string()),
            owner: Some("foo".to_string()),
            vcs_type: Some("Bitbucket".to_string()),
            branch: Some("dev".to_string()),
            basic_auth: true,
            ..Default::default()
        };

        let defaults = global.request_defaults(&config);
        assert_eq!(defaults.token, "flag-token");
        assert_eq!(defaults.vcs.owner.as_deref(), Some("foo"));
        assert_eq!(defaults.vcs.repo.as_deref(), Some("cfg-repo"));
        assert_eq!(defaults.vcs.vcs_type, Some(GitType::Bitbucket));
        assert_eq!(defaults.options.branch.as_deref(), Some("dev"));
        assert_eq!(defaults.client.auth_mode, Some(AuthMode::Basic));
    }

    #[test]
    fn test_parse_subcommand() {
        let cli = Cli::try_parse_from(["circleci", "--owner", "foo", "build", "42"]).unwrap();
        assert_eq!(cli.global.owner.as_deref(), Some("foo"));
        assert!(matches!(cli.command, Commands::Build(BuildCommand { number: 42 })));
    }
}
