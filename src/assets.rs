// SPDX-License-Identifier: MPL-2.0
//! Bundled artwork images.
//!
//! Images are embedded into the binary at build time so packaging never
//! needs to locate assets on disk. Catalog entries reference them by file
//! name.

use iced::widget::image::Handle;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/artwork/"]
struct Artworks;

/// Returns an image handle for the bundled artwork with the given file
/// name, or `None` if no such asset was embedded.
pub fn artwork_handle(file_name: &str) -> Option<Handle> {
    Artworks::get(file_name).map(|file| Handle::from_bytes(file.data.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn every_catalog_entry_has_a_bundled_image() {
        let catalog = Catalog::builtin();
        for index in 0..catalog.len() {
            let artwork = catalog.get(index).expect("index in range");
            assert!(
                artwork_handle(artwork.image).is_some(),
                "missing bundled image for {}",
                artwork.title
            );
        }
    }

    #[test]
    fn unknown_file_name_returns_none() {
        assert!(artwork_handle("starry_night.png").is_none());
    }
}
