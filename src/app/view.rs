// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the gallery
//! screen based on application state.

use super::{Message, Orientation};
use crate::catalog::Artwork;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use iced::{
    widget::{Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub artwork: Option<&'a Artwork>,
    pub orientation: Orientation,
    pub position: (usize, usize),
}

/// Renders the gallery for the current artwork.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if let Some(artwork) = ctx.artwork {
        gallery::view(GalleryViewContext {
            i18n: ctx.i18n,
            artwork,
            orientation: ctx.orientation,
            position: ctx.position,
        })
        .map(Message::Gallery)
    } else {
        // Fallback if the index somehow left the catalog range
        Container::new(Text::new(ctx.i18n.tr("gallery-image-missing")))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
