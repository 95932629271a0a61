//
//  circleci-api
//  tests/config_file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::collections::BTreeMap;
use std::fs;

use anyhow::Result;
use tempfile::TempDir;

use circleci_api::api::common::Filter;
use circleci_api::auth::AuthMode;
use circleci_api::{Config, GitInfo, GitType, Options};

#[test]
fn missing_file_yields_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = Config::load_from(&temp_dir.path().join("config.toml"))?;
    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
fn save_then_load() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("nested").join("config.toml");

    let config = Config {
        token: Some("T".to_string()),
        host: Some("https://circleci.example.com/api/v1.1".to_string()),
        auth: Some(AuthMode::Basic),
        vcs: GitInfo {
            vcs_type: Some(GitType::Bitbucket),
            owner: Some("foo".to_string()),
            repo: Some("bar".to_string()),
        },
        options: Options {
            branch: Some("master".to_string()),
            filter: Some(Filter::Successful),
            limit: Some(10),
            ..Default::default()
        },
        headers: BTreeMap::from([("x-team".to_string(), "ci".to_string())]),
    };
    config.save_to(&path)?;

    let contents = fs::read_to_string(&path)?;
    assert!(contents.contains("[vcs]"));
    assert!(contents.contains("type = \"bitbucket\""));

    let loaded = Config::load_from(&path)?;
    assert_eq!(loaded, config);

    let defaults = loaded.request_defaults();
    assert_eq!(defaults.client.auth_mode, Some(AuthMode::Basic));
    assert_eq!(defaults.client.custom_headers["x-team"], "ci");
    assert_eq!(defaults.options.limit, Some(10));
    Ok(())
}

#[test]
fn invalid_file_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "token = [not valid")?;

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config file"));
    Ok(())
}
