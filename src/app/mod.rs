// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the catalog, the navigation state, and
//! localization, and translates messages into state changes. The window
//! policy (default size, minimum size) lives here so it is easy to audit
//! user-facing behavior.

mod message;
mod orientation;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use orientation::Orientation;

use crate::catalog::Catalog;
use crate::catalog_navigation::CatalogNavigator;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use iced::{window, Element, Size, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    pub i18n: I18n,
    catalog: Catalog,
    navigator: CatalogNavigator,
    window_size: Size,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let catalog = Catalog::builtin();
        Self {
            i18n: I18n::default(),
            catalog,
            navigator: CatalogNavigator::new(catalog.len()),
            window_size: Size::new(
                WINDOW_DEFAULT_WIDTH as f32,
                WINDOW_DEFAULT_HEIGHT as f32,
            ),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and CLI
    /// flags. Navigation always starts on the first catalog entry.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let app = App {
            i18n,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.catalog.get(self.navigator.current_index()) {
            Some(artwork) => format!("{} - {}", artwork.title, app_name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                gallery::update(gallery_message, &mut self.navigator);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
        }
    }

    fn orientation(&self) -> Orientation {
        Orientation::from_size(self.window_size)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            artwork: self.catalog.get(self.navigator.current_index()),
            orientation: self.orientation(),
            position: self.navigator.position(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current_title(app: &App) -> &'static str {
        app.catalog
            .get(app.navigator.current_index())
            .map(|artwork| artwork.title)
            .expect("index always in catalog range")
    }

    #[test]
    fn new_starts_on_the_first_artwork() {
        let (app, _task) = App::new(Flags::default());
        assert_eq!(app.navigator.current_index(), 0);
        assert_eq!(current_title(&app), "The Birth of Venus");
    }

    #[test]
    fn navigate_next_twice_reaches_the_scream() {
        let mut app = App::default();

        let _ = app.update(Message::Gallery(gallery::Message::NavigateNext));
        let _ = app.update(Message::Gallery(gallery::Message::NavigateNext));

        assert_eq!(app.navigator.current_index(), 2);
        assert_eq!(current_title(&app), "The Scream");
    }

    #[test]
    fn navigate_next_wraps_back_to_the_birth_of_venus() {
        let mut app = App::default();

        for _ in 0..3 {
            let _ = app.update(Message::Gallery(gallery::Message::NavigateNext));
        }

        assert_eq!(app.navigator.current_index(), 0);
        assert_eq!(current_title(&app), "The Birth of Venus");
    }

    #[test]
    fn navigate_previous_from_start_wraps_to_the_scream() {
        let mut app = App::default();

        let _ = app.update(Message::Gallery(gallery::Message::NavigatePrevious));

        assert_eq!(app.navigator.current_index(), 2);
        assert_eq!(current_title(&app), "The Scream");
    }

    #[test]
    fn window_resize_flips_orientation() {
        let mut app = App::default();
        assert_eq!(app.orientation(), Orientation::Portrait);

        let _ = app.update(Message::WindowResized(Size::new(800.0, 480.0)));
        assert_eq!(app.orientation(), Orientation::Landscape);

        let _ = app.update(Message::WindowResized(Size::new(480.0, 800.0)));
        assert_eq!(app.orientation(), Orientation::Portrait);
    }

    #[test]
    fn resizing_does_not_touch_navigation_state() {
        let mut app = App::default();
        let _ = app.update(Message::Gallery(gallery::Message::NavigateNext));

        let _ = app.update(Message::WindowResized(Size::new(800.0, 480.0)));

        assert_eq!(app.navigator.current_index(), 1);
        assert_eq!(current_title(&app), "Mona Lisa");
    }

    #[test]
    fn title_names_the_current_artwork() {
        let mut app = App::default();
        assert_eq!(app.title(), "The Birth of Venus - Art Space");

        let _ = app.update(Message::Gallery(gallery::Message::NavigateNext));
        assert_eq!(app.title(), "Mona Lisa - Art Space");
    }

    #[test]
    fn view_renders_in_both_orientations() {
        let mut app = App::default();
        drop(app.view());

        let _ = app.update(Message::WindowResized(Size::new(800.0, 480.0)));
        drop(app.view());
    }
}
