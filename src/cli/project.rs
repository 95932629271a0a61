//
//  circleci-api
//  cli/project.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project settings commands: environment variables and checkout keys.

use anyhow::Result;
use clap::Args;

use super::{write_json, GlobalOptions};

/// List project environment variables, or show one.
#[derive(Args, Debug)]
pub struct EnvCommand {
    /// Variable name
    pub name: Option<String>,
}

impl EnvCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;
        match &self.name {
            Some(name) => write_json(&api.get_env_var(name, None).await?, global.compact),
            None => write_json(&api.list_env_vars(None).await?, global.compact),
        }
    }
}

/// List project checkout keys, or show one.
#[derive(Args, Debug)]
pub struct CheckoutKeysCommand {
    /// Key fingerprint
    pub fingerprint: Option<String>,
}

impl CheckoutKeysCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;
        match &self.fingerprint {
            Some(fp) => write_json(&api.get_checkout_key(fp, None).await?, global.compact),
            None => write_json(&api.list_checkout_keys(None).await?, global.compact),
        }
    }
}
