//! Intermediate package descriptor.
//!
//! A [`PackageDescriptor`] is what every provider produces and what the
//! table generator consumes. Optional fields are omitted from the output
//! when absent.

use std::fmt;

use indexmap::IndexMap;

/// Package type tag written to `package.pkgType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PkgType {
    Pastebin,
    GitHub,
    GitHubGist,
    GitLab,
    Generic,
}

impl PkgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PkgType::Pastebin => "com.pastebin",
            PkgType::GitHub => "com.github",
            PkgType::GitHubGist => "com.github.gist",
            PkgType::GitLab => "com.gitlab",
            PkgType::Generic => "local.generic",
        }
    }
}

impl fmt::Display for PkgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered mapping from remote file identifier to local install path.
///
/// Keys are unique and iteration follows insertion order. Re-inserting an
/// existing key replaces its value without moving it.
#[derive(Debug, Clone, Default)]
pub struct FileMaps {
    entries: IndexMap<String, String>,
}

impl FileMaps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping, returning the previous local path for `remote`.
    pub fn insert(&mut self, remote: impl Into<String>, local: impl Into<String>) -> Option<String> {
        self.entries.insert(remote.into(), local.into())
    }

    pub fn get(&self, remote: &str) -> Option<&str> {
        self.entries.get(remote).map(String::as_str)
    }

    pub fn contains_key(&self, remote: &str) -> bool {
        self.entries.contains_key(remote)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(remote, local)| (remote.as_str(), local.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Order matters: two maps with the same entries in a different order
/// produce different package tables.
impl PartialEq for FileMaps {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for FileMaps {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FileMaps {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut maps = FileMaps::new();
        for (remote, local) in iter {
            maps.insert(remote, local);
        }
        maps
    }
}

/// Everything needed to write a package table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    pub filemaps: FileMaps,
    pub pkg_type: PkgType,
    pub url: Option<String>,
    pub name: Option<String>,
    pub desc: Option<String>,
    pub licensing: Option<String>,
    pub repo_owner: Option<String>,
    pub repo_name: Option<String>,
    pub repo_ref: Option<String>,
}

impl PackageDescriptor {
    /// Create a descriptor with only the required fields set.
    pub fn new(pkg_type: PkgType, filemaps: FileMaps) -> Self {
        Self {
            filemaps,
            pkg_type,
            url: None,
            name: None,
            desc: None,
            licensing: None,
            repo_owner: None,
            repo_name: None,
            repo_ref: None,
        }
    }

    /// Descriptor used when no resolver recognizes the URL.
    pub fn generic(url: impl Into<String>) -> Self {
        let url = url.into();
        let filemaps = FileMaps::from_iter([(url.clone(), "<Unknown>")]);
        Self::new(PkgType::Generic, filemaps).with_url(url)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description; `None` leaves it absent.
    pub fn with_desc(mut self, desc: Option<String>) -> Self {
        self.desc = desc;
        self
    }

    /// Set the license identifier; `None` leaves it absent.
    pub fn with_licensing(mut self, licensing: Option<String>) -> Self {
        self.licensing = licensing;
        self
    }

    /// Set owner, name and ref of the source repository.
    pub fn with_repo(
        mut self,
        owner: Option<String>,
        name: Option<String>,
        reference: Option<String>,
    ) -> Self {
        self.repo_owner = owner;
        self.repo_name = name;
        self.repo_ref = reference;
        self
    }
}
