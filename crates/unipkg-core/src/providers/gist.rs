//! GitHub gists.
//!
//! Only the first file listed by the API is packaged; the rest of a
//! multi-file gist is ignored.

use anyhow::Context;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::descriptor::{FileMaps, PackageDescriptor, PkgType};
use crate::fetch::{JsonFetcher, decode};
use crate::patterns::match_gist_raw_url;
use crate::whitelist::Whitelist;

use super::Endpoints;

#[derive(Debug, Deserialize)]
struct GistInfo {
    description: Option<String>,
    files: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct GistFile {
    raw_url: String,
}

/// Build the descriptor for gist `gist_id` owned by `owner`.
///
/// `owner` is taken as given and not checked against the API. The
/// whitelist is accepted for parity with the repository providers and has
/// no effect.
pub fn generate(
    fetcher: &dyn JsonFetcher,
    endpoints: &Endpoints,
    owner: &str,
    gist_id: &str,
    target_location: &str,
    _whitelist: &Whitelist,
) -> anyhow::Result<PackageDescriptor> {
    let gist_url = endpoints.github(&format!("gists/{}", gist_id));
    let gist: GistInfo = fetcher
        .fetch_json(&gist_url)
        .and_then(|value| decode(&gist_url, value))
        .with_context(|| format!("Failed to read gist {}", gist_id))?;

    let (file_key, file) = gist
        .files
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("Gist {} has no files", gist_id))?;

    let file: GistFile = decode(&gist_url, file)
        .with_context(|| format!("Gist file {} has no raw_url", file_key))?;

    let raw = match_gist_raw_url(&file.raw_url)
        .ok_or_else(|| anyhow::anyhow!("Unrecognized gist raw URL: {}", file.raw_url))?;

    let filemaps = FileMaps::from_iter([(
        raw.filename.clone(),
        format!("{}{}", target_location, raw.filename),
    )]);

    Ok(PackageDescriptor::new(PkgType::GitHubGist, filemaps)
        .with_url(format!("https://gist.github.com/{}/{}", owner, gist_id))
        .with_name(raw.filename)
        .with_desc(gist.description)
        .with_repo(
            Some(owner.to_string()),
            Some(gist_id.to_string()),
            Some(raw.file_id),
        ))
}
