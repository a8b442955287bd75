//! File suffix whitelist applied to repository trees.

use std::path::Path;

/// Suffixes accepted when no whitelist is configured.
pub const DEFAULT_SUFFIXES: &[&str] = &[".lua"];

/// Which repository files make it into the file map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Whitelist {
    /// Keep only files whose suffix (e.g. `.lua`) is listed.
    Suffixes(Vec<String>),
    /// Keep every file.
    Disabled,
}

impl Default for Whitelist {
    fn default() -> Self {
        Whitelist::Suffixes(DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect())
    }
}

impl Whitelist {
    /// Build the whitelist for a run: `--no-whitelist` wins over any
    /// configured suffixes, and an empty suffix list filters nothing.
    pub fn from_flag(no_whitelist: bool, suffixes: &[String]) -> Self {
        if no_whitelist || suffixes.is_empty() {
            Whitelist::Disabled
        } else {
            Whitelist::Suffixes(suffixes.to_vec())
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Whitelist::Disabled)
    }

    /// Whether `path` passes the filter.
    pub fn allows(&self, path: &str) -> bool {
        match self {
            Whitelist::Disabled => true,
            Whitelist::Suffixes(suffixes) => match suffix(path) {
                Some(suffix) => suffixes.iter().any(|allowed| *allowed == suffix),
                None => false,
            },
        }
    }
}

/// Suffix of the final path component including the leading dot.
///
/// Dotfiles such as `.luacheckrc` and names ending in a dot have none.
fn suffix(path: &str) -> Option<String> {
    let extension = Path::new(path).extension()?.to_str()?;
    if extension.is_empty() {
        return None;
    }
    Some(format!(".{}", extension))
}
