//
//  circleci-api
//  api/metadata.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Test metadata collected from a build's `store_test_results` step.

use serde::{Deserialize, Serialize};

use super::client::CircleClient;
use super::common::{GitCoordinates, Result};
use super::query::project_path;

/// One test case result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestMetadata {
    /// Test class or suite
    #[serde(default)]
    pub classname: Option<String>,

    /// Source file of the test
    #[serde(default)]
    pub file: Option<String>,

    /// Test name
    #[serde(default)]
    pub name: Option<String>,

    /// `success`, `failure`, `skipped`, ...
    #[serde(default)]
    pub result: Option<String>,

    /// Run time in seconds
    #[serde(default)]
    pub run_time: Option<f64>,

    /// Failure message, if any
    #[serde(default)]
    pub message: Option<String>,

    /// Test runner that produced the result
    #[serde(default)]
    pub source: Option<String>,
}

/// Body of the test metadata endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestMetadataResponse {
    /// Every test case in the build
    #[serde(default)]
    pub tests: Vec<TestMetadata>,
}

impl TestMetadataResponse {
    /// Tests whose result is not `success` or `skipped`.
    pub fn failures(&self) -> impl Iterator<Item = &TestMetadata> {
        self.tests.iter().filter(|t| {
            !matches!(t.result.as_deref(), Some("success") | Some("skipped") | None)
        })
    }
}

/// Test results for a build.
///
/// `GET /project/{vcs}/{build_num}/tests`
pub async fn get_test_metadata(
    client: &CircleClient,
    vcs: &GitCoordinates,
    build_num: u64,
) -> Result<TestMetadataResponse> {
    let path = project_path(vcs, &[&build_num.to_string(), "tests"]);
    client.get(&path).await
}
