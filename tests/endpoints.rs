//
//  circleci-api
//  tests/endpoints.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::collections::BTreeMap;
use std::io::{self, Write};

use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::json;

use circleci_api::api::checkout_keys::{self, CheckoutKeyType};
use circleci_api::api::common::{BuildAction, Filter, GitCoordinates, GitType};
use circleci_api::api::env::{self, EnvVariable};
use circleci_api::api::keys::{self, HerokuKey, SshKey};
use circleci_api::api::{actions, artifacts, builds, cache, metadata, projects, user, CircleClient};
use circleci_api::auth::AuthMode;
use circleci_api::request::{NewBuildOptions, Options};
use circleci_api::{CircleError, VERSION};

fn client(server: &Server) -> CircleClient {
    CircleClient::new("T").unwrap().with_base_url(server.url())
}

fn coords() -> GitCoordinates {
    GitCoordinates::new("foo", "bar")
}

#[tokio::test]
async fn get_me_sends_token_and_fixed_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/me")
        .match_query(Matcher::UrlEncoded("circle-token".into(), "T".into()))
        .match_header("user-agent", format!("circleci-api-rs/{}", VERSION).as_str())
        .match_header("accept", "application/json")
        .with_status(200)
        .with_body(r#"{"login": "octocat", "name": "Octo Cat", "all_emails": ["o@c.at"]}"#)
        .create_async()
        .await;

    let me = user::get_me(&client(&server)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(me.login.as_deref(), Some("octocat"));
    assert_eq!(me.all_emails, vec!["o@c.at".to_string()]);
}

#[tokio::test]
async fn basic_auth_mode_sends_authorization_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/projects")
        .match_query(Matcher::Any)
        .match_header("authorization", "Basic VDo=")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client(&server).with_auth_mode(AuthMode::Basic);
    let projects = projects::get_all_projects(&client).await.unwrap();

    mock.assert_async().await;
    assert!(projects.is_empty());
}

#[tokio::test]
async fn custom_headers_are_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/me")
        .match_query(Matcher::UrlEncoded("circle-token".into(), "T".into()))
        .match_header("x-some-header", "some-value")
        .match_header("user-agent", format!("circleci-api-rs/{}", VERSION).as_str())
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let headers = BTreeMap::from([
        ("x-some-header".to_string(), "some-value".to_string()),
        ("user-agent".to_string(), "spoofed".to_string()),
    ]);
    let client = client(&server).with_headers(&headers).unwrap();
    user::get_me(&client).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn basic_auth_replaces_custom_authorization_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/me")
        .match_query(Matcher::Missing)
        .match_header("authorization", "Basic VDo=")
        .match_header("x-some-header", "some-value")
        .with_status(200)
        .with_body(r#"{"login": "octocat"}"#)
        .create_async()
        .await;

    let headers = BTreeMap::from([
        ("authorization".to_string(), "Bearer other".to_string()),
        ("x-some-header".to_string(), "some-value".to_string()),
    ]);
    let client = client(&server)
        .with_auth_mode(AuthMode::Basic)
        .with_headers(&headers)
        .unwrap();
    let me = user::get_me(&client).await.unwrap();

    mock.assert_async().await;
    assert_eq!(me.login.as_deref(), Some("octocat"));
}

#[tokio::test]
async fn body_read_failure_is_http_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/me")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_chunked_body(|w| {
            w.write_all(b"partial")?;
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "dropped"))
        })
        .create_async()
        .await;

    let err = user::get_me(&client(&server)).await.unwrap_err();
    assert!(matches!(err, CircleError::Http(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn non_success_status_keeps_raw_body() {
    let mut server = Server::new_async().await;
    let body = r#"{"message": "Project not found"}"#;
    server
        .mock("GET", "/project/github/foo/bar/42")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(body)
        .create_async()
        .await;

    let err = builds::get_full_build(&client(&server), &coords(), 42)
        .await
        .unwrap_err();

    match err {
        CircleError::Api { status, body: raw } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(raw, body);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/me")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = user::get_me(&client(&server)).await.unwrap_err();
    assert!(matches!(err, CircleError::Decode(_)));
    assert!(!err.is_config_error());
}

#[tokio::test]
async fn recent_builds_pass_limit_and_offset() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/recent-builds")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "5".into()),
            Matcher::UrlEncoded("offset".into(), "10".into()),
            Matcher::UrlEncoded("circle-token".into(), "T".into()),
        ]))
        .with_status(200)
        .with_body(r#"[{"build_num": 1}, {"build_num": 2}]"#)
        .create_async()
        .await;

    let options = Options {
        limit: Some(5),
        offset: Some(10),
        filter: Some(Filter::Failed),
        ..Default::default()
    };
    let builds = builds::get_recent_builds(&client(&server), &options).await.unwrap();

    mock.assert_async().await;
    assert_eq!(builds.len(), 2);
}

#[tokio::test]
async fn build_summaries_for_branch_use_tree_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/project/github/foo/bar/tree/master")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "5".into()),
            Matcher::UrlEncoded("filter".into(), "successful".into()),
        ]))
        .with_status(200)
        .with_body(r#"[{"build_num": 7, "branch": "master", "outcome": "success"}]"#)
        .create_async()
        .await;

    let options = Options {
        branch: Some("ignored".to_string()),
        limit: Some(5),
        filter: Some(Filter::Successful),
        ..Default::default()
    };
    let builds = builds::get_build_summaries(&client(&server), &coords(), Some("master"), &options)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(builds[0].build_num, Some(7));
}

#[tokio::test]
async fn build_summaries_without_branch() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/project/bitbucket/foo/bar")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let coords = GitCoordinates::with_type(GitType::Bitbucket, "foo", "bar");
    builds::get_build_summaries(&client(&server), &coords, None, &Options::default())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn trigger_build_on_branch_posts_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/project/github/foo/bar/tree/dev")
        .match_query(Matcher::UrlEncoded("circle-token".into(), "T".into()))
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "revision": "abc123",
            "build_parameters": {"RUN_EXTRA": "true"}
        })))
        .with_status(201)
        .with_body(r#"{"build_num": 43, "status": "queued"}"#)
        .create_async()
        .await;

    let body = NewBuildOptions {
        revision: Some("abc123".to_string()),
        build_parameters: [("RUN_EXTRA".to_string(), "true".to_string())].into(),
        ..Default::default()
    };
    let build = actions::trigger_build(&client(&server), &coords(), Some("dev"), &body)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(build.build_num, Some(43));
}

#[tokio::test]
async fn retry_and_cancel_build() {
    let mut server = Server::new_async().await;
    let retry = server
        .mock("POST", "/project/github/foo/bar/42/retry")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"build_num": 43}"#)
        .create_async()
        .await;
    let cancel = server
        .mock("POST", "/project/github/foo/bar/43/cancel")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"build_num": 43, "outcome": "canceled"}"#)
        .create_async()
        .await;

    let client = client(&server);
    let retried = actions::build_action(&client, &coords(), 42, BuildAction::Retry)
        .await
        .unwrap();
    let canceled = actions::build_action(&client, &coords(), 43, BuildAction::Cancel)
        .await
        .unwrap();

    retry.assert_async().await;
    cancel.assert_async().await;
    assert_eq!(retried.build_num, Some(43));
    assert_eq!(canceled.outcome.as_deref(), Some("canceled"));
}

#[tokio::test]
async fn latest_artifacts_query_includes_branch_and_filter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/project/github/foo/bar/latest/artifacts")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("branch".into(), "master".into()),
            Matcher::UrlEncoded("filter".into(), "completed".into()),
            Matcher::UrlEncoded("circle-token".into(), "T".into()),
        ]))
        .with_status(200)
        .with_body(r#"[{"path": "out/report.html", "node_index": 0, "url": "https://x/report.html"}]"#)
        .create_async()
        .await;

    let options = Options {
        branch: Some("master".to_string()),
        filter: Some(Filter::Completed),
        ..Default::default()
    };
    let artifacts = artifacts::get_latest_artifacts(&client(&server), &coords(), &options)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(artifacts[0].node_index, Some(0));
}

#[tokio::test]
async fn build_artifacts_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/project/github/foo/bar/42/artifacts")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    artifacts::get_build_artifacts(&client(&server), &coords(), 42)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn env_var_lifecycle() {
    let mut server = Server::new_async().await;
    let list = server
        .mock("GET", "/project/github/foo/bar/envvar")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"name": "FOO", "value": "xxxxbar"}]"#)
        .create_async()
        .await;
    let add = server
        .mock("POST", "/project/github/foo/bar/envvar")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({"name": "FOO", "value": "bar"})))
        .with_status(201)
        .with_body(r#"{"name": "FOO", "value": "xxxxbar"}"#)
        .create_async()
        .await;
    let get = server
        .mock("GET", "/project/github/foo/bar/envvar/FOO")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"name": "FOO", "value": "xxxxbar"}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/project/github/foo/bar/envvar/FOO")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"message": "ok"}"#)
        .create_async()
        .await;

    let client = client(&server);
    let vars = env::list_env_vars(&client, &coords()).await.unwrap();
    let added = env::add_env_var(&client, &coords(), &EnvVariable::new("FOO", "bar"))
        .await
        .unwrap();
    let fetched = env::get_env_var(&client, &coords(), "FOO").await.unwrap();
    let deleted = env::delete_env_var(&client, &coords(), "FOO").await.unwrap();

    list.assert_async().await;
    add.assert_async().await;
    get.assert_async().await;
    delete.assert_async().await;
    assert_eq!(vars.len(), 1);
    assert_eq!(added.value, "xxxxbar");
    assert_eq!(fetched.name, "FOO");
    assert_eq!(deleted.message.as_deref(), Some("ok"));
}

#[tokio::test]
async fn checkout_key_lifecycle() {
    let mut server = Server::new_async().await;
    let key = r#"{"public_key": "ssh-rsa AAA", "type": "deploy-key", "fingerprint": "c90b1c4f", "preferred": true}"#;
    let add = server
        .mock("POST", "/project/github/foo/bar/checkout-key")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({"type": "deploy-key"})))
        .with_status(201)
        .with_body(key)
        .create_async()
        .await;
    let get = server
        .mock("GET", "/project/github/foo/bar/checkout-key/c90b1c4f")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(key)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/project/github/foo/bar/checkout-key/c90b1c4f")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"message": "ok"}"#)
        .create_async()
        .await;

    let client = client(&server);
    let created = checkout_keys::add_checkout_key(&client, &coords(), CheckoutKeyType::DeployKey)
        .await
        .unwrap();
    let fingerprint = created.fingerprint.clone().unwrap();
    checkout_keys::get_checkout_key(&client, &coords(), &fingerprint)
        .await
        .unwrap();
    checkout_keys::delete_checkout_key(&client, &coords(), &fingerprint)
        .await
        .unwrap();

    add.assert_async().await;
    get.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn clear_cache_and_test_metadata() {
    let mut server = Server::new_async().await;
    let clear = server
        .mock("DELETE", "/project/github/foo/bar/build-cache")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "build dependency caches deleted"}"#)
        .create_async()
        .await;
    let tests = server
        .mock("GET", "/project/github/foo/bar/42/tests")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"tests": [{"name": "works", "result": "success"}]}"#)
        .create_async()
        .await;

    let client = client(&server);
    let cleared = cache::clear_cache(&client, &coords()).await.unwrap();
    let metadata = metadata::get_test_metadata(&client, &coords(), 42).await.unwrap();

    clear.assert_async().await;
    tests.assert_async().await;
    assert!(cleared.status.unwrap().contains("deleted"));
    assert_eq!(metadata.tests.len(), 1);
    assert_eq!(metadata.failures().count(), 0);
}

#[tokio::test]
async fn keys_accept_empty_response() {
    let mut server = Server::new_async().await;
    let ssh = server
        .mock("POST", "/project/github/foo/bar/ssh-key")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({"hostname": "example.com", "private_key": "KEY"})))
        .with_status(201)
        .create_async()
        .await;
    let heroku = server
        .mock("POST", "/user/heroku-key")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({"apikey": "HEROKU"})))
        .with_status(200)
        .create_async()
        .await;

    let client = client(&server);
    let key = SshKey {
        hostname: "example.com".to_string(),
        private_key: "KEY".to_string(),
    };
    keys::add_ssh_key(&client, &coords(), &key).await.unwrap();
    keys::add_heroku_key(&client, &HerokuKey { apikey: "HEROKU".to_string() })
        .await
        .unwrap();

    ssh.assert_async().await;
    heroku.assert_async().await;
}

#[tokio::test]
async fn keys_ignore_json_response() {
    let mut server = Server::new_async().await;
    let ssh = server
        .mock("POST", "/project/github/foo/bar/ssh-key")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let heroku = server
        .mock("POST", "/user/heroku-key")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"message": "ok"}"#)
        .create_async()
        .await;

    let client = client(&server);
    keys::add_ssh_key(&client, &coords(), &SshKey::default()).await.unwrap();
    keys::add_heroku_key(&client, &HerokuKey::default()).await.unwrap();

    ssh.assert_async().await;
    heroku.assert_async().await;
}

#[tokio::test]
async fn follow_project_posts_without_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/project/github/foo/bar/follow")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"following": true, "workflow": false, "first_build": {"build_num": 1}}"#)
        .create_async()
        .await;

    let response = projects::follow_project(&client(&server), &coords()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.following, Some(true));
    assert_eq!(response.first_build.unwrap().build_num, Some(1));
}
