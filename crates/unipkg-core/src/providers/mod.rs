//! Provider generators.
//!
//! Each provider turns identifiers extracted from a URL into a
//! [`PackageDescriptor`](crate::descriptor::PackageDescriptor):
//! - `pastebin` builds a single-file map without touching the network
//! - `github` reads repository metadata and the recursive tree
//! - `gitlab` reads project metadata and the paginated recursive tree
//! - `gist` reads gist metadata and maps its first file

pub mod gist;
pub mod github;
pub mod gitlab;
pub mod pastebin;

use serde::Deserialize;

use crate::descriptor::FileMaps;
use crate::whitelist::Whitelist;

pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";
pub const DEFAULT_GITLAB_API: &str = "https://gitlab.com/api/v4";

/// Base URLs of the provider APIs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// GitHub REST API root (repos and gists)
    pub github_api: String,
    /// GitLab v4 API root
    pub gitlab_api: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            github_api: DEFAULT_GITHUB_API.to_string(),
            gitlab_api: DEFAULT_GITLAB_API.to_string(),
        }
    }
}

impl Endpoints {
    pub(crate) fn github(&self, path: &str) -> String {
        format!("{}/{}", self.github_api.trim_end_matches('/'), path)
    }

    pub(crate) fn gitlab(&self, path: &str) -> String {
        format!("{}/{}", self.gitlab_api.trim_end_matches('/'), path)
    }
}

/// One entry of a recursive tree listing (GitHub and GitLab share the shape).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl TreeEntry {
    fn is_blob(&self) -> bool {
        self.kind == "blob"
    }
}

/// Map every whitelisted blob to `target_location + path`.
pub(crate) fn collect_filemaps<'a>(
    entries: impl IntoIterator<Item = &'a TreeEntry>,
    target_location: &str,
    whitelist: &Whitelist,
) -> FileMaps {
    entries
        .into_iter()
        .filter(|entry| entry.is_blob() && whitelist.allows(&entry.path))
        .map(|entry| (entry.path.clone(), format!("{}{}", target_location, entry.path)))
        .collect()
}
