//! Package table generation.
//!
//! Produces the Lua module the unicornpkg package manager loads. String
//! values are written verbatim between double quotes; a value containing
//! `"` yields an invalid table.

use crate::descriptor::PackageDescriptor;

pub const GENERATED_NOTICE: &str = "-- Generated with https://github.com/unicornpkg/easyunicornpkg";
pub const UNICORN_SPEC: &str = "v1.0.0";
pub const UNKNOWN: &str = "<Unknown>";

/// Serialize `descriptor` into package table lines.
pub fn generate_package_table(descriptor: &PackageDescriptor, generated_notice: bool) -> Vec<String> {
    let mut out = Vec::new();

    if generated_notice {
        out.push(GENERATED_NOTICE.to_string());
    }
    if let Some(url) = &descriptor.url {
        out.push(format!("-- {}", url));
    }

    out.push(String::new());
    out.push("local package = {}".to_string());
    out.push(format!(
        "package.name = \"{}\"",
        descriptor.name.as_deref().unwrap_or(UNKNOWN)
    ));
    out.push(format!(
        "package.desc = \"{}\"",
        descriptor.desc.as_deref().unwrap_or(UNKNOWN)
    ));
    if let Some(licensing) = &descriptor.licensing {
        out.push(format!("package.licensing = \"{}\"", licensing));
    }

    out.push("package.instdat = {}".to_string());
    let instdat = [
        ("repo_owner", &descriptor.repo_owner),
        ("repo_name", &descriptor.repo_name),
        ("repo_ref", &descriptor.repo_ref),
    ];
    for (key, value) in instdat {
        if let Some(value) = value {
            out.push(format!("package.instdat.{} = \"{}\"", key, value));
        }
    }

    out.push("package.instdat.filemaps = {}".to_string());
    for (remote, local) in descriptor.filemaps.iter() {
        out.push(format!(
            "package.instdat.filemaps[\"{}\"] = \"{}\"",
            remote, local
        ));
    }

    out.push(format!("package.pkgType = \"{}\"", descriptor.pkg_type));
    out.push(format!("package.unicornSpec = \"{}\"", UNICORN_SPEC));
    out.push(String::new());
    out.push("return package".to_string());

    out
}

/// Join table lines into the printed document.
pub fn render(lines: &[String]) -> String {
    lines.join("\n")
}
