// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a single-screen artwork gallery built with the Iced GUI framework.
//!
//! It displays a fixed catalog of artworks one at a time, with wrap-around
//! Previous/Next navigation, and demonstrates internationalization with
//! Fluent, user preference management, and orientation-aware layout.

pub mod app;
pub mod assets;
pub mod catalog;
pub mod catalog_navigation;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
