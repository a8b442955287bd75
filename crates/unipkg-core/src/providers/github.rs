//! GitHub repositories.

use anyhow::Context;
use serde::Deserialize;

use crate::descriptor::{PackageDescriptor, PkgType};
use crate::fetch::{JsonFetcher, decode};
use crate::whitelist::Whitelist;

use super::{Endpoints, TreeEntry, collect_filemaps};

#[derive(Debug, Deserialize)]
struct RepoInfo {
    name: String,
    description: Option<String>,
    default_branch: String,
    owner: RepoOwner,
    #[serde(default)]
    license: Option<RepoLicense>,
}

#[derive(Debug, Deserialize)]
struct RepoOwner {
    login: String,
}

#[derive(Debug, Deserialize)]
struct RepoLicense {
    spdx_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Tree {
    tree: Vec<TreeEntry>,
    #[serde(default)]
    truncated: bool,
}

/// Build the descriptor for `owner/repo` from its default branch.
///
/// Owner and repository name in the result come from the API, so they may
/// differ in case from the input. The source URL keeps the input spelling.
pub fn generate(
    fetcher: &dyn JsonFetcher,
    endpoints: &Endpoints,
    owner: &str,
    repo: &str,
    target_location: &str,
    whitelist: &Whitelist,
) -> anyhow::Result<PackageDescriptor> {
    let info_url = endpoints.github(&format!("repos/{}/{}", owner, repo));
    let info: RepoInfo = fetcher
        .fetch_json(&info_url)
        .and_then(|value| decode(&info_url, value))
        .with_context(|| format!("Failed to read GitHub repository {}/{}", owner, repo))?;

    let licensing = info.license.and_then(|license| license.spdx_id);
    let branch = info.default_branch;

    let tree_url = endpoints.github(&format!(
        "repos/{}/{}/git/trees/{}?recursive=1",
        owner, repo, branch
    ));
    let tree: Tree = fetcher
        .fetch_json(&tree_url)
        .and_then(|value| decode(&tree_url, value))
        .with_context(|| format!("Failed to read file tree of {}/{}@{}", owner, repo, branch))?;

    if tree.truncated {
        tracing::warn!(owner, repo, "GitHub returned a truncated tree; file map is partial");
    }

    let filemaps = collect_filemaps(&tree.tree, target_location, whitelist);
    tracing::debug!(owner, repo, files = filemaps.len(), "collected GitHub files");

    Ok(PackageDescriptor::new(PkgType::GitHub, filemaps)
        .with_url(format!("https://github.com/{}/{}", owner, repo))
        .with_name(info.name.to_lowercase())
        .with_desc(info.description)
        .with_licensing(licensing)
        .with_repo(Some(info.owner.login), Some(info.name), Some(branch)))
}
