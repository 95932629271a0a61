//
//  circleci-api
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account-level commands: `login`, `me` and `projects`.

use anyhow::Result;
use clap::Args;

use super::{write_json, GlobalOptions};
use crate::config::Config;

/// Check a token against the API and store it in the config file.
#[derive(Args, Debug)]
pub struct LoginCommand {}

impl LoginCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;
        let me = api.me(None).await?;

        // Start from the file itself so environment overrides are not persisted.
        let mut config = Config::load_from(&Config::config_path()?)?;
        config.token = Some(api.defaults().token.clone());
        config.save()?;

        match me.login {
            Some(login) => println!("Logged in as {}", login),
            None => println!("Logged in"),
        }
        Ok(())
    }
}

/// Show the account behind the token.
#[derive(Args, Debug)]
pub struct MeCommand {}

impl MeCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let me = global.api()?.me(None).await?;
        write_json(&me, global.compact)
    }
}

/// List followed projects.
#[derive(Args, Debug)]
pub struct ProjectsCommand {
    /// Only print `owner/repo` names
    #[arg(long)]
    pub names: bool,
}

impl ProjectsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let projects = global.api()?.projects(None).await?;

        if self.names {
            let names: Vec<String> = projects
                .iter()
                .filter_map(|p| Some(format!("{}/{}", p.username.as_ref()?, p.reponame.as_ref()?)))
                .collect();
            return write_json(&names, global.compact);
        }

        write_json(&projects, global.compact)
    }
}
