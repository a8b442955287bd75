#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::{Value, json};

use unipkg_core::fetch::{FetchError, JsonFetcher};

pub const GITHUB_REPO_URL: &str = "https://api.github.com/repos/unicornpkg/test-repo";
pub const GITHUB_TREE_URL: &str =
    "https://api.github.com/repos/unicornpkg/test-repo/git/trees/main?recursive=1";
pub const GITLAB_PROJECT_URL: &str = "https://gitlab.com/api/v4/projects/unicornpkg%2Ftest-repo";
pub const GIST_ID: &str = "6b121766ef4ec1e5c97e6834879d90c3";
pub const GIST_URL: &str = "https://api.github.com/gists/6b121766ef4ec1e5c97e6834879d90c3";
pub const GIST_FILE_ID: &str = "f374449bc05821b453e4cc09bfd7f02e68edeb2f";

pub fn gitlab_tree_url(page: usize) -> String {
    format!(
        "https://gitlab.com/api/v4/projects/unicornpkg%2Ftest-repo/repository/tree?recursive=true&per_page=100&page={}",
        page
    )
}

/// Replays recorded API responses and records every requested URL.
#[derive(Debug, Default)]
pub struct CannedFetcher {
    responses: HashMap<String, Value>,
    requests: RefCell<Vec<String>>,
}

impl CannedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, body: Value) -> Self {
        self.responses.insert(url.into(), body);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// Recorded responses for the GitHub, GitLab and gist test packages.
    pub fn recorded() -> Self {
        Self::new()
            .with(GITHUB_REPO_URL, github_repo())
            .with(GITHUB_TREE_URL, github_tree())
            .with(GITLAB_PROJECT_URL, gitlab_project())
            .with(gitlab_tree_url(1), gitlab_tree())
            .with(GIST_URL, gist())
    }
}

impl JsonFetcher for CannedFetcher {
    fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        self.responses.get(url).cloned().ok_or_else(|| FetchError::Http {
            url: url.to_string(),
            status: 404,
        })
    }
}

pub fn github_repo() -> Value {
    json!({
        "id": 517542123,
        "name": "test-repo",
        "full_name": "unicornpkg/test-repo",
        "owner": { "login": "unicornpkg", "type": "Organization" },
        "description": "A repository used to test easyunicornpkg",
        "default_branch": "main",
        "license": {
            "key": "cc0-1.0",
            "name": "Creative Commons Zero v1.0 Universal",
            "spdx_id": "CC0-1.0"
        }
    })
}

pub fn github_tree() -> Value {
    json!({
        "sha": "0b5a1c0",
        "tree": [
            { "path": "LICENSE", "type": "blob" },
            { "path": "README.md", "type": "blob" },
            { "path": "com-github-test.lua", "type": "blob" },
            { "path": "lib", "type": "tree" },
            { "path": "lib/util.lua", "type": "blob" }
        ],
        "truncated": false
    })
}

pub fn gitlab_project() -> Value {
    json!({
        "id": 38012345,
        "path": "test-repo",
        "path_with_namespace": "unicornpkg/test-repo",
        "description": null,
        "default_branch": "main"
    })
}

pub fn gitlab_tree() -> Value {
    json!([
        { "id": "a1", "name": "README.md", "path": "README.md", "type": "blob" },
        { "id": "a2", "name": "com-gitlab-test.lua", "path": "com-gitlab-test.lua", "type": "blob" },
        { "id": "a3", "name": "src", "path": "src", "type": "tree" },
        { "id": "a4", "name": "main.lua", "path": "src/main.lua", "type": "blob" }
    ])
}

pub fn gist() -> Value {
    json!({
        "id": GIST_ID,
        "description": "Test gist for easyunicornpkg",
        "files": {
            "com-github-gist-test.lua": {
                "filename": "com-github-gist-test.lua",
                "raw_url": format!(
                    "https://gist.githubusercontent.com/tomodachi94/{}/raw/{}/com-github-gist-test.lua",
                    GIST_ID, GIST_FILE_ID
                )
            },
            "another.lua": {
                "filename": "another.lua",
                "raw_url": format!(
                    "https://gist.githubusercontent.com/tomodachi94/{}/raw/0000000000000000000000000000000000000000/another.lua",
                    GIST_ID
                )
            }
        }
    })
}

pub fn assert_has_line(lines: &[String], expected: &str) {
    assert!(
        lines.iter().any(|line| line == expected),
        "missing line {:?} in:\n{}",
        expected,
        lines.join("\n")
    );
}
