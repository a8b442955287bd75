//! URL pattern matchers.
//!
//! A pattern miss is an ordinary outcome: every matcher returns `None`
//! rather than an error so the resolver chain can move on.

use std::sync::LazyLock;

use regex::Regex;

static GIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<host>(?:git@|https://)[\w.@]+(?:/|:))(?P<owner>[\w,\-]+)/(?P<repo>[\w,\-]+)(?:\.git)?/?",
    )
    .expect("git pattern is valid")
});

static PASTEBIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"pastebin\.com/(?P<id>[0-9a-zA-Z]+)").expect("pastebin pattern is valid")
});

static GIST_RAW_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<protocol>.*)://(?P<host>.*)/(?P<owner>.*)/(?P<gistid>.*)/raw/(?P<fileid>.*)/(?P<filename>.*)$",
    )
    .expect("gist raw url pattern is valid")
});

/// A git remote found somewhere inside a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRemote {
    /// Scheme or `git@` prefix, domain and separator (e.g. `https://github.com/`)
    pub host: String,
    pub owner: String,
    pub repo: String,
}

impl GitRemote {
    /// Classify the provider behind this remote's host.
    pub fn provider(&self) -> GitHost {
        GitHost::classify(&self.host)
    }
}

/// Providers the git resolver knows how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitHost {
    Gist,
    GitHub,
    GitLab,
    Other,
}

impl GitHost {
    /// Gist hosts are checked before GitHub since `gist.github.com`
    /// also contains `github.com`.
    pub fn classify(host: &str) -> Self {
        if host.contains("gist.github.com") {
            GitHost::Gist
        } else if host.contains("github.com") {
            GitHost::GitHub
        } else if host.contains("gitlab.com") {
            GitHost::GitLab
        } else {
            GitHost::Other
        }
    }
}

/// Components of a gist file's raw URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistRawUrl {
    pub protocol: String,
    pub host: String,
    pub owner: String,
    pub gist_id: String,
    pub file_id: String,
    pub filename: String,
}

/// Search `url` for a git remote (`git@host:owner/repo` or
/// `https://host/owner/repo`).
pub fn match_git(url: &str) -> Option<GitRemote> {
    let caps = GIT_PATTERN.captures(url)?;
    Some(GitRemote {
        host: caps["host"].to_string(),
        owner: caps["owner"].to_string(),
        repo: caps["repo"].to_string(),
    })
}

/// Search `url` for a pastebin paste and return its id.
pub fn match_pastebin(url: &str) -> Option<String> {
    PASTEBIN_PATTERN
        .captures(url)
        .map(|caps| caps["id"].to_string())
}

/// Split a gist raw URL. The whole input must match.
pub fn match_gist_raw_url(raw_url: &str) -> Option<GistRawUrl> {
    let caps = GIST_RAW_URL_PATTERN.captures(raw_url)?;
    Some(GistRawUrl {
        protocol: caps["protocol"].to_string(),
        host: caps["host"].to_string(),
        owner: caps["owner"].to_string(),
        gist_id: caps["gistid"].to_string(),
        file_id: caps["fileid"].to_string(),
        filename: caps["filename"].to_string(),
    })
}
