//! Resolver chain.
//!
//! Resolvers are tried in a fixed order and the first one that recognizes
//! the URL wins. A resolver that does not recognize a URL returns
//! `Ok(None)`; an error from a provider aborts the whole resolution and is
//! never treated as "try the next one". When nothing matches, a generic
//! descriptor is produced instead.

use crate::descriptor::PackageDescriptor;
use crate::fetch::JsonFetcher;
use crate::patterns::{GitHost, match_git, match_pastebin};
use crate::providers::{self, Endpoints};
use crate::whitelist::{DEFAULT_SUFFIXES, Whitelist};

/// Per-run resolution options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Disable file suffix filtering (`--no-whitelist`)
    pub no_whitelist: bool,
    /// Accepted file suffixes when filtering is enabled
    pub whitelist: Vec<String>,
    /// Prefix prepended to every local path in the file map
    pub target_location: String,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            no_whitelist: false,
            whitelist: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            target_location: String::new(),
        }
    }
}

impl ResolveOptions {
    pub fn with_no_whitelist(mut self, no_whitelist: bool) -> Self {
        self.no_whitelist = no_whitelist;
        self
    }

    pub fn with_whitelist(mut self, suffixes: Vec<String>) -> Self {
        self.whitelist = suffixes;
        self
    }

    pub fn with_target_location(mut self, target_location: impl Into<String>) -> Self {
        self.target_location = target_location.into();
        self
    }

    /// The effective whitelist for this run.
    pub fn effective_whitelist(&self) -> Whitelist {
        Whitelist::from_flag(self.no_whitelist, &self.whitelist)
    }
}

/// A strategy that may recognize a URL.
pub trait Resolve {
    /// Short identifier used in logs.
    fn id(&self) -> &'static str;

    /// Resolve `url`, or return `Ok(None)` if this resolver does not apply.
    fn resolve(
        &self,
        url: &str,
        options: &ResolveOptions,
    ) -> anyhow::Result<Option<PackageDescriptor>>;
}

/// Handles git remotes on GitHub, GitHub gists and GitLab.
#[derive(Clone, Copy)]
pub struct GitResolver<'a> {
    fetcher: &'a dyn JsonFetcher,
    endpoints: &'a Endpoints,
}

impl<'a> GitResolver<'a> {
    pub fn new(fetcher: &'a dyn JsonFetcher, endpoints: &'a Endpoints) -> Self {
        Self { fetcher, endpoints }
    }
}

impl Resolve for GitResolver<'_> {
    fn id(&self) -> &'static str {
        "git"
    }

    fn resolve(
        &self,
        url: &str,
        options: &ResolveOptions,
    ) -> anyhow::Result<Option<PackageDescriptor>> {
        let Some(remote) = match_git(url) else {
            return Ok(None);
        };

        let whitelist = options.effective_whitelist();
        let target = options.target_location.as_str();
        let (owner, repo) = (remote.owner.as_str(), remote.repo.as_str());

        let descriptor = match remote.provider() {
            GitHost::Gist => providers::gist::generate(
                self.fetcher,
                self.endpoints,
                owner,
                repo,
                target,
                &whitelist,
            )?,
            GitHost::GitHub => providers::github::generate(
                self.fetcher,
                self.endpoints,
                owner,
                repo,
                target,
                &whitelist,
            )?,
            GitHost::GitLab => providers::gitlab::generate(
                self.fetcher,
                self.endpoints,
                owner,
                repo,
                target,
                &whitelist,
            )?,
            GitHost::Other => {
                tracing::debug!(host = %remote.host, "git host not supported");
                return Ok(None);
            }
        };

        Ok(Some(descriptor))
    }
}

/// Handles `pastebin.com/<id>` URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PastebinResolver;

impl Resolve for PastebinResolver {
    fn id(&self) -> &'static str {
        "pastebin"
    }

    fn resolve(
        &self,
        url: &str,
        options: &ResolveOptions,
    ) -> anyhow::Result<Option<PackageDescriptor>> {
        Ok(pastebin_resolver(url, options))
    }
}

/// Every known resolver. Further providers are added as variants.
#[derive(Clone, Copy)]
pub enum Resolver<'a> {
    Git(GitResolver<'a>),
    Pastebin(PastebinResolver),
}

impl Resolve for Resolver<'_> {
    fn id(&self) -> &'static str {
        match self {
            Resolver::Git(r) => r.id(),
            Resolver::Pastebin(r) => r.id(),
        }
    }

    fn resolve(
        &self,
        url: &str,
        options: &ResolveOptions,
    ) -> anyhow::Result<Option<PackageDescriptor>> {
        match self {
            Resolver::Git(r) => r.resolve(url, options),
            Resolver::Pastebin(r) => r.resolve(url, options),
        }
    }
}

/// Outcome of running the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A resolver recognized the URL.
    Resolved(PackageDescriptor),
    /// Nothing recognized the URL; a `local.generic` descriptor was built.
    Fallback(PackageDescriptor),
}

impl Resolution {
    pub fn descriptor(&self) -> &PackageDescriptor {
        match self {
            Resolution::Resolved(d) | Resolution::Fallback(d) => d,
        }
    }

    pub fn into_descriptor(self) -> PackageDescriptor {
        match self {
            Resolution::Resolved(d) | Resolution::Fallback(d) => d,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback(_))
    }
}

/// Ordered list of resolvers with a generic fallback.
pub struct ResolverChain<'a> {
    resolvers: Vec<Resolver<'a>>,
}

impl<'a> ResolverChain<'a> {
    /// The default chain: git remotes first, then pastebin.
    pub fn new(fetcher: &'a dyn JsonFetcher, endpoints: &'a Endpoints) -> Self {
        Self::with_resolvers(vec![
            Resolver::Git(GitResolver::new(fetcher, endpoints)),
            Resolver::Pastebin(PastebinResolver),
        ])
    }

    pub fn with_resolvers(resolvers: Vec<Resolver<'a>>) -> Self {
        Self { resolvers }
    }

    pub fn resolvers(&self) -> &[Resolver<'a>] {
        &self.resolvers
    }

    /// Run the chain against `url`.
    pub fn resolve(&self, url: &str, options: &ResolveOptions) -> anyhow::Result<Resolution> {
        for resolver in &self.resolvers {
            if let Some(descriptor) = resolver.resolve(url, options)? {
                tracing::debug!(resolver = resolver.id(), pkg_type = %descriptor.pkg_type, "resolved");
                if descriptor.filemaps.is_empty() {
                    tracing::warn!(url, "no files matched; package table has an empty file map");
                }
                return Ok(Resolution::Resolved(descriptor));
            }
        }

        tracing::info!(url, "no resolver matched; using generic package");
        Ok(Resolution::Fallback(PackageDescriptor::generic(url)))
    }
}

/// Resolve `url` as a git remote, or `None` if it is not one we support.
pub fn git_resolver(
    fetcher: &dyn JsonFetcher,
    endpoints: &Endpoints,
    url: &str,
    options: &ResolveOptions,
) -> anyhow::Result<Option<PackageDescriptor>> {
    GitResolver::new(fetcher, endpoints).resolve(url, options)
}

/// Resolve `url` as a pastebin paste, or `None` if it is not one.
pub fn pastebin_resolver(url: &str, options: &ResolveOptions) -> Option<PackageDescriptor> {
    match_pastebin(url).map(|id| providers::pastebin::generate(&id, &options.target_location))
}

/// Resolve `url` with the default chain.
pub fn automatic_resolver(
    fetcher: &dyn JsonFetcher,
    endpoints: &Endpoints,
    url: &str,
    options: &ResolveOptions,
) -> anyhow::Result<Resolution> {
    ResolverChain::new(fetcher, endpoints).resolve(url, options)
}
