// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization using the Fluent localization system.
//! It handles locale detection, translation file loading, and string lookup.
//!
//! Locale resolution order: CLI override, config file, OS locale, then the
//! built-in default (`en-US`). Only UI chrome is translated; artwork titles,
//! artists, and years are catalog data, not translations.

pub mod fluent;
