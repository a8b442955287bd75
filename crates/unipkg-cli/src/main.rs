//! Unipkg - unicornpkg package table generator
//!
//! Usage:
//!   unipkg https://github.com/owner/repo        # Lua files of a GitHub repo
//!   unipkg -W https://gitlab.com/owner/repo     # every file, no whitelist
//!   unipkg https://pastebin.com/p4zeq7Ma        # single paste

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use unipkg_core::config::{ConfigStore, Settings};
use unipkg_core::fetch::HttpFetcher;
use unipkg_core::resolver::ResolverChain;
use unipkg_core::table::{generate_package_table, render};

#[derive(Parser)]
#[command(name = "unipkg", version)]
#[command(about = "Build a unicornpkg package table from a source URL", long_about = None)]
struct Cli {
    /// The URL that the package table should be generated from
    #[arg(value_name = "URL")]
    url: String,

    /// Disable the file type whitelist
    #[arg(short = 'W', long)]
    no_whitelist: bool,

    /// Prefix for local install paths (overrides the config file)
    #[arg(short, long, value_name = "DIR")]
    target_location: Option<String>,

    /// Omit the "Generated with" comment
    #[arg(long)]
    no_notice: bool,

    /// Read settings from this file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log resolver decisions and fetched URLs to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for the package table
    let default_filter = if cli.verbose {
        "unipkg_core=debug,unipkg=debug,warn"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = load_settings(&cli)?;
    let lines = run(&cli, &settings)?;

    println!("{}", render(&lines));
    Ok(())
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let store = match &cli.config {
        Some(path) => ConfigStore::from_path(path),
        None => ConfigStore::from_default_location()?,
    };
    let mut settings = store.load()?;

    if let Some(target) = &cli.target_location {
        settings.target_location = target.clone();
    }
    if cli.no_notice {
        settings.generated_notice = false;
    }

    Ok(settings)
}

fn run(cli: &Cli, settings: &Settings) -> Result<Vec<String>> {
    let fetcher = HttpFetcher::with_timeout(Duration::from_secs(settings.timeout_secs))?;
    let chain = ResolverChain::new(&fetcher, &settings.endpoints);
    let options = settings.resolve_options(cli.no_whitelist);

    let resolution = chain.resolve(&cli.url, &options)?;
    tracing::debug!(fallback = resolution.is_fallback(), "resolution finished");

    Ok(generate_package_table(
        resolution.descriptor(),
        settings.generated_notice,
    ))
}
