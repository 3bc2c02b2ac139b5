// SPDX-License-Identifier: MPL-2.0
//! Catalog navigation: the single piece of mutable state in the application.
//!
//! `CatalogNavigator` owns the current index into the catalog and exposes
//! exactly two transitions, `next` and `previous`. Both are total functions
//! that wrap around at the catalog boundaries, so the index is always in
//! range and the state graph forms a cycle.

/// Maintains the current position inside a fixed-size catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogNavigator {
    current_index: usize,
    len: usize,
}

impl CatalogNavigator {
    /// Creates a navigator positioned on the first entry.
    ///
    /// `len` must be at least 1; the modulo arithmetic in `next` and
    /// `previous` is undefined for an empty catalog.
    pub fn new(len: usize) -> Self {
        debug_assert!(len >= 1, "catalog must not be empty");
        Self {
            current_index: 0,
            len,
        }
    }

    /// Advances to the next entry, wrapping from the last entry to the first.
    ///
    /// Returns the new index.
    pub fn next(&mut self) -> usize {
        self.current_index = (self.current_index + 1) % self.len;
        self.current_index
    }

    /// Steps back to the previous entry, wrapping from the first entry to
    /// the last.
    ///
    /// Returns the new index.
    pub fn previous(&mut self) -> usize {
        self.current_index = (self.current_index + self.len - 1) % self.len;
        self.current_index
    }

    /// Returns the index of the currently displayed entry.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the 1-based position and total count, for display.
    pub fn position(&self) -> (usize, usize) {
        (self.current_index + 1, self.len)
    }
}
