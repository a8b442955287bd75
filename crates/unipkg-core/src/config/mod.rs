//! Configuration for package table generation
//!
//! Settings are read from `unipkg.toml` in the user's config directory
//! (e.g. `~/.config/unipkg/unipkg.toml`). Every key is optional:
//!
//! ```toml
//! target_location = "/lib/"
//! whitelist = [".lua"]
//! generated_notice = true
//! timeout_secs = 10
//!
//! [endpoints]
//! github_api = "https://api.github.com"
//! gitlab_api = "https://gitlab.com/api/v4"
//! ```

pub mod parser;
pub mod store;

use serde::Deserialize;
use url::Url;

use crate::fetch::DEFAULT_TIMEOUT_SECS;
use crate::providers::Endpoints;
use crate::resolver::ResolveOptions;
use crate::whitelist::DEFAULT_SUFFIXES;

pub use parser::{parse_settings_toml, parse_settings_toml_str};
pub use store::ConfigStore;

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "unipkg.toml";

/// User settings from `unipkg.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prefix for every local path in generated file maps
    pub target_location: String,
    /// Accepted file suffixes for repository providers
    pub whitelist: Vec<String>,
    /// Emit the "Generated with" comment line
    pub generated_notice: bool,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Provider API roots
    pub endpoints: Endpoints,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_location: String::new(),
            whitelist: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            generated_notice: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            endpoints: Endpoints::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate values that deserialize fine but cannot be used.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }

        for suffix in &self.whitelist {
            if !suffix.starts_with('.') || suffix.len() < 2 {
                anyhow::bail!(
                    "Invalid whitelist entry '{}': expected a suffix like \".lua\"",
                    suffix
                );
            }
        }

        for (key, value) in [
            ("endpoints.github_api", &self.endpoints.github_api),
            ("endpoints.gitlab_api", &self.endpoints.gitlab_api),
        ] {
            Url::parse(value).map_err(|e| anyhow::anyhow!("Invalid {} '{}': {}", key, value, e))?;
        }

        Ok(())
    }

    /// Resolution options derived from these settings.
    pub fn resolve_options(&self, no_whitelist: bool) -> ResolveOptions {
        ResolveOptions::default()
            .with_no_whitelist(no_whitelist)
            .with_whitelist(self.whitelist.clone())
            .with_target_location(self.target_location.clone())
    }
}
