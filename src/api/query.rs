//
//  circleci-api
//  api/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! URL path and query-string construction.
//!
//! Every project endpoint lives under `/project/{type}/{owner}/{repo}`; the
//! helpers here build that prefix, append endpoint-specific segments and
//! render option maps into a query string.
//!
//! ```rust
//! use circleci_api::api::common::GitCoordinates;
//! use circleci_api::api::query::{project_path, query_string};
//!
//! let coords = GitCoordinates::new("foo", "bar");
//! assert_eq!(project_path(&coords, &["42", "retry"]), "/project/github/foo/bar/42/retry");
//!
//! let query = query_string([("limit", Some("5")), ("offset", None)]);
//! assert_eq!(query, "?limit=5");
//! ```

use url::form_urlencoded;

use super::common::GitCoordinates;

/// Base path for a project: `/project/{type}/{owner}/{repo}`.
pub fn vcs_path(coords: &GitCoordinates) -> String {
    format!(
        "/project/{}/{}/{}",
        coords.vcs_type,
        urlencoding::encode(&coords.owner),
        urlencoding::encode(&coords.repo)
    )
}

/// Project base path followed by `segments`, each percent-encoded.
pub fn project_path(coords: &GitCoordinates, segments: &[&str]) -> String {
    let mut path = vcs_path(coords);
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    path
}

/// Renders `(key, value)` pairs as a query string.
///
/// Pairs whose value is `None` are dropped. The result starts with `?` when at
/// least one pair remains and is empty otherwise. Input order is kept.
pub fn query_string<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut any = false;

    for (key, value) in pairs {
        if let Some(value) = value {
            serializer.append_pair(key.as_ref(), value.as_ref());
            any = true;
        }
    }

    if any {
        format!("?{}", serializer.finish())
    } else {
        String::new()
    }
}
