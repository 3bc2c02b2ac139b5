// SPDX-License-Identifier: MPL-2.0
//! Layout orientation derived from window geometry.

use iced::Size;

/// Arrangement axis for the gallery screen. Determined solely by the host
/// window's proportions; content is identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Landscape when the window is wider than it is tall; portrait
    /// otherwise (square counts as portrait).
    pub fn from_size(size: Size) -> Self {
        if size.width > size.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn is_landscape(self) -> bool {
        self == Orientation::Landscape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_window_is_landscape() {
        let orientation = Orientation::from_size(Size::new(800.0, 480.0));
        assert_eq!(orientation, Orientation::Landscape);
        assert!(orientation.is_landscape());
    }

    #[test]
    fn tall_window_is_portrait() {
        let orientation = Orientation::from_size(Size::new(480.0, 800.0));
        assert_eq!(orientation, Orientation::Portrait);
        assert!(!orientation.is_landscape());
    }

    #[test]
    fn square_window_counts_as_portrait() {
        assert_eq!(
            Orientation::from_size(Size::new(600.0, 600.0)),
            Orientation::Portrait
        );
    }
}
