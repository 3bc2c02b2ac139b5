// SPDX-License-Identifier: MPL-2.0
//! The gallery screen: artwork image, description card, and navigation
//! buttons.
//!
//! Rendering is a pure function of the current artwork and the window
//! orientation. Portrait stacks the three regions vertically; landscape
//! places the image beside the description and buttons. Content is
//! identical in both arrangements.

use crate::app::Orientation;
use crate::assets;
use crate::catalog::Artwork;
use crate::catalog_navigation::CatalogNavigator;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, shadow, spacing, typography};
use iced::widget::image::Image;
use iced::{
    alignment::{Horizontal, Vertical},
    font,
    widget::{button, container, Column, Container, Row, Text},
    Border, ContentFit, Element, Font, Length, Theme,
};

/// Contextual data needed to render the gallery screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub artwork: &'a Artwork,
    pub orientation: Orientation,
    /// 1-based position and total count, shown on the description card.
    pub position: (usize, usize),
}

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NavigateNext,
    NavigatePrevious,
}

/// Process a gallery message by applying the matching transition to the
/// navigator.
pub fn update(message: Message, navigator: &mut CatalogNavigator) {
    match message {
        Message::NavigateNext => {
            navigator.next();
        }
        Message::NavigatePrevious => {
            navigator.previous();
        }
    }
}

/// Render the gallery screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let image = build_image(ctx.artwork);
    let description = build_description(ctx.artwork, ctx.position);
    let buttons = build_buttons(ctx.i18n);

    let content: Element<'_, Message> = match ctx.orientation {
        Orientation::Portrait => Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(image)
            .push(description)
            .push(buttons)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Orientation::Landscape => {
            let side_panel = Column::new()
                .spacing(spacing::MD)
                .align_x(Horizontal::Center)
                .push(description)
                .push(buttons)
                .width(Length::FillPortion(1));

            Row::new()
                .spacing(spacing::MD)
                .align_y(Vertical::Center)
                .push(Container::new(image).width(Length::FillPortion(1)))
                .push(side_panel)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
    };

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Build the framed artwork image region.
fn build_image(artwork: &Artwork) -> Element<'_, Message> {
    let content: Element<'_, Message> = match assets::artwork_handle(artwork.image) {
        Some(handle) => Image::new(handle)
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        // Unreachable for the built-in catalog; kept so a broken asset
        // reference degrades to a label instead of a blank frame.
        None => Text::new(artwork.title).into(),
    };

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(frame_style)
        .into()
}

/// Build the description card: title, artist, parenthesized year, and the
/// position indicator.
fn build_description(artwork: &Artwork, position: (usize, usize)) -> Element<'_, Message> {
    let bold = Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    };

    let (current, total) = position;

    let card = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(artwork.title).size(typography::TITLE_MD).font(bold))
        .push(
            Text::new(artwork.artist)
                .size(typography::BODY)
                .color(palette::GRAY_700),
        )
        .push(
            Text::new(format!("({})", artwork.year))
                .size(typography::BODY_SM)
                .color(palette::GRAY_700),
        )
        .push(
            Text::new(format!("{} / {}", current, total))
                .size(typography::CAPTION)
                .color(palette::GRAY_700),
        );

    Container::new(card)
        .padding(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .style(card_style)
        .into()
}

/// Build the Previous/Next button pair.
fn build_buttons(i18n: &I18n) -> Element<'_, Message> {
    let previous = button(Text::new(i18n.tr("gallery-previous-button")))
        .on_press(Message::NavigatePrevious)
        .padding([spacing::XS, spacing::LG]);

    let next = button(Text::new(i18n.tr("gallery-next-button")))
        .on_press(Message::NavigateNext)
        .padding([spacing::XS, spacing::LG]);

    Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(previous)
        .push(next)
        .into()
}

/// Style for the image frame: raised white surface with a soft shadow.
fn frame_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.base.color.into()),
        shadow: shadow::SM,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for the description card: muted surface, rounded corners.
fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(palette::CARD.into()),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
