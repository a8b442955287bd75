//! GitLab repositories.

use anyhow::Context;
use serde::Deserialize;

use crate::descriptor::{FileMaps, PackageDescriptor, PkgType};
use crate::fetch::{JsonFetcher, decode};
use crate::whitelist::Whitelist;

use super::{Endpoints, TreeEntry, collect_filemaps};

/// Page size requested from the tree endpoint (GitLab's maximum).
pub const TREE_PAGE_SIZE: usize = 100;

/// Upper bound on tree pages read for a single project.
pub const MAX_TREE_PAGES: usize = 1000;

#[derive(Debug, Deserialize)]
struct Project {
    path: Option<String>,
    description: Option<String>,
    default_branch: Option<String>,
}

/// `owner/repo` percent-encoded as a single path segment.
pub fn project_id(owner: &str, repo: &str) -> String {
    url::form_urlencoded::byte_serialize(format!("{}/{}", owner, repo).as_bytes()).collect()
}

/// Build the descriptor for `owner/repo`.
///
/// GitLab does not report an SPDX identifier here, so licensing stays absent.
pub fn generate(
    fetcher: &dyn JsonFetcher,
    endpoints: &Endpoints,
    owner: &str,
    repo: &str,
    target_location: &str,
    whitelist: &Whitelist,
) -> anyhow::Result<PackageDescriptor> {
    let project_path = format!("projects/{}", project_id(owner, repo));

    let project_url = endpoints.gitlab(&project_path);
    let project: Project = fetcher
        .fetch_json(&project_url)
        .and_then(|value| decode(&project_url, value))
        .with_context(|| format!("Failed to read GitLab project {}/{}", owner, repo))?;

    let filemaps = fetch_tree(fetcher, endpoints, &project_path, target_location, whitelist)
        .with_context(|| format!("Failed to read file tree of {}/{}", owner, repo))?;
    tracing::debug!(owner, repo, files = filemaps.len(), "collected GitLab files");

    let Project {
        path,
        description,
        default_branch,
    } = project;

    let mut descriptor = PackageDescriptor::new(PkgType::GitLab, filemaps)
        .with_url(format!("https://gitlab.com/{}/{}", owner, repo))
        .with_desc(description)
        .with_repo(Some(owner.to_string()), path.clone(), default_branch);
    descriptor.name = path;

    Ok(descriptor)
}

/// Walk the paginated recursive tree until a short page is returned.
///
/// A server that ignores `page` keeps returning the same full page; that is
/// detected by the first path repeating and reported as an error.
fn fetch_tree(
    fetcher: &dyn JsonFetcher,
    endpoints: &Endpoints,
    project_path: &str,
    target_location: &str,
    whitelist: &Whitelist,
) -> anyhow::Result<FileMaps> {
    let mut entries: Vec<TreeEntry> = Vec::new();
    let mut previous_first: Option<String> = None;

    for page in 1..=MAX_TREE_PAGES {
        let url = endpoints.gitlab(&format!(
            "{}/repository/tree?recursive=true&per_page={}&page={}",
            project_path, TREE_PAGE_SIZE, page
        ));
        let batch: Vec<TreeEntry> = fetcher
            .fetch_json(&url)
            .and_then(|value| decode(&url, value))?;

        let first = batch.first().map(|entry| entry.path.clone());
        if first.is_some() && first == previous_first {
            anyhow::bail!("GitLab ignored the page parameter at {}", url);
        }

        let done = batch.len() < TREE_PAGE_SIZE;
        entries.extend(batch);
        if done {
            return Ok(collect_filemaps(&entries, target_location, whitelist));
        }
        previous_first = first;
    }

    anyhow::bail!("GitLab tree exceeds {} pages", MAX_TREE_PAGES)
}
