//! Pastebin pastes.

use crate::descriptor::{FileMaps, PackageDescriptor, PkgType};

/// Build the descriptor for paste `id`. No network access is needed.
pub fn generate(id: &str, target_location: &str) -> PackageDescriptor {
    let filemaps = FileMaps::from_iter([(id.to_string(), format!("{}{}.lua", target_location, id))]);

    PackageDescriptor::new(PkgType::Pastebin, filemaps)
        .with_url(format!("https://pastebin.com/{}", id))
}
