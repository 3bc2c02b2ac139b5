// SPDX-License-Identifier: MPL-2.0
//! The artwork catalog: a fixed, ordered list of gallery entries.
//!
//! The catalog is built once at startup and never mutated. Insertion order
//! is display order and indices are 0-based.

/// A single gallery entry. All fields are immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artwork {
    pub title: &'static str,
    pub artist: &'static str,
    pub year: &'static str,
    /// File name of the bundled image inside `assets/artwork/`.
    pub image: &'static str,
}

const BUILTIN: [Artwork; 3] = [
    Artwork {
        title: "The Birth of Venus",
        artist: "Sandro Botticelli",
        year: "1486",
        image: "the_birth_of_venus.png",
    },
    Artwork {
        title: "Mona Lisa",
        artist: "Leonardo da Vinci",
        year: "1519",
        image: "mona_lisa.png",
    },
    Artwork {
        title: "The Scream",
        artist: "Edvard Munch",
        year: "1893",
        image: "the_scream.png",
    },
];

/// Ordered, read-only sequence of artworks.
///
/// Precondition: a catalog always holds at least one entry. The built-in
/// catalog satisfies this by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    entries: &'static [Artwork],
}

impl Catalog {
    /// Returns the catalog compiled into the application.
    pub fn builtin() -> Self {
        Self { entries: &BUILTIN }
    }

    /// Returns the artwork at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&Artwork> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
