mod support;

use serde_json::json;

use support::{CannedFetcher, GIST_FILE_ID, GIST_ID, GIST_URL, assert_has_line};
use unipkg_core::descriptor::PkgType;
use unipkg_core::providers::{Endpoints, gist};
use unipkg_core::resolver::{ResolveOptions, automatic_resolver};
use unipkg_core::table::generate_package_table;
use unipkg_core::whitelist::Whitelist;

fn check_table(lines: &[String]) {
    assert_has_line(lines, "package.unicornSpec = \"v1.0.0\"");
    assert_has_line(lines, "package.pkgType = \"com.github.gist\"");
    assert_has_line(lines, "package.name = \"com-github-gist-test.lua\"");
    assert_has_line(lines, "package.instdat.repo_owner = \"tomodachi94\"");
    assert_has_line(
        lines,
        "package.instdat.repo_name = \"6b121766ef4ec1e5c97e6834879d90c3\"",
    );
    assert_has_line(
        lines,
        "package.instdat.repo_ref = \"f374449bc05821b453e4cc09bfd7f02e68edeb2f\"",
    );
    assert_has_line(
        lines,
        "package.instdat.filemaps[\"com-github-gist-test.lua\"] = \"com-github-gist-test.lua\"",
    );
}

#[test]
fn automatic_resolution_matches_direct_generation() {
    let fetcher = CannedFetcher::recorded();
    let endpoints = Endpoints::default();

    let resolution = automatic_resolver(
        &fetcher,
        &endpoints,
        "https://gist.github.com/tomodachi94/6b121766ef4ec1e5c97e6834879d90c3",
        &ResolveOptions::default(),
    )
    .unwrap();
    let direct = gist::generate(
        &fetcher,
        &endpoints,
        "tomodachi94",
        GIST_ID,
        "",
        &Whitelist::default(),
    )
    .unwrap();

    assert_eq!(resolution.descriptor(), &direct);
    check_table(&generate_package_table(&direct, true));
}

#[test]
fn only_first_file_is_mapped() {
    let fetcher = CannedFetcher::recorded();

    let descriptor = gist::generate(
        &fetcher,
        &Endpoints::default(),
        "tomodachi94",
        GIST_ID,
        "",
        &Whitelist::default(),
    )
    .unwrap();

    assert_eq!(descriptor.pkg_type, PkgType::GitHubGist);
    assert_eq!(descriptor.filemaps.len(), 1);
    assert!(!descriptor.filemaps.contains_key("another.lua"));
    assert_eq!(descriptor.repo_ref.as_deref(), Some(GIST_FILE_ID));
    assert_eq!(
        descriptor.desc.as_deref(),
        Some("Test gist for easyunicornpkg")
    );
}

#[test]
fn whitelist_has_no_effect() {
    let fetcher = CannedFetcher::new().with(
        GIST_URL,
        json!({
            "description": null,
            "files": {
                "notes.md": {
                    "raw_url": "https://gist.githubusercontent.com/someone/6b121766ef4ec1e5c97e6834879d90c3/raw/abc123/notes.md"
                }
            }
        }),
    );

    let descriptor = gist::generate(
        &fetcher,
        &Endpoints::default(),
        "someone",
        GIST_ID,
        "/docs/",
        &Whitelist::default(),
    )
    .unwrap();

    assert_eq!(descriptor.filemaps.get("notes.md"), Some("/docs/notes.md"));
    assert_eq!(descriptor.repo_ref.as_deref(), Some("abc123"));
    assert!(descriptor.desc.is_none());
}

#[test]
fn empty_gist_is_an_error() {
    let fetcher = CannedFetcher::new().with(GIST_URL, json!({ "description": "", "files": {} }));

    let err = gist::generate(
        &fetcher,
        &Endpoints::default(),
        "tomodachi94",
        GIST_ID,
        "",
        &Whitelist::default(),
    )
    .unwrap_err();

    assert!(err.to_string().contains("has no files"));
}

#[test]
fn unrecognized_raw_url_is_an_error() {
    let fetcher = CannedFetcher::new().with(
        GIST_URL,
        json!({ "files": { "x.lua": { "raw_url": "https://example.com/x.lua" } } }),
    );

    let err = gist::generate(
        &fetcher,
        &Endpoints::default(),
        "tomodachi94",
        GIST_ID,
        "",
        &Whitelist::default(),
    )
    .unwrap_err();

    assert!(err.to_string().contains("Unrecognized gist raw URL"));
}
