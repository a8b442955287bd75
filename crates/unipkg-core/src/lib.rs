//! Unipkg Core Library
//!
//! Resolves source URLs (GitHub repositories, GitHub gists, GitLab
//! repositories, Pastebin pastes) into unicornpkg package tables.

pub mod config;
pub mod descriptor;
pub mod fetch;
pub mod patterns;
pub mod providers;
pub mod resolver;
pub mod table;
pub mod whitelist;

/// Re-exports of commonly used types
pub mod prelude {
    // Configuration
    pub use crate::config::{ConfigStore, Settings};

    // Descriptor
    pub use crate::descriptor::{FileMaps, PackageDescriptor, PkgType};

    // Fetching
    pub use crate::fetch::{FetchError, HttpFetcher, JsonFetcher};

    // Providers
    pub use crate::providers::Endpoints;

    // Resolution
    pub use crate::resolver::{
        Resolution, Resolve, ResolveOptions, Resolver, ResolverChain, automatic_resolver,
    };

    // Output
    pub use crate::table::{generate_package_table, render};
    pub use crate::whitelist::Whitelist;
}
