//! Palette-slot theme engine for light/dark UI themes.
//!
//! Each color mode owns an independent [`slots::SlotSet`] whose color slots
//! hold keys into a fixed eight-color palette. The crate projects slot sets
//! to CSS custom properties, encodes them into the nested token trees stored
//! by the theme API, and decodes stored trees back into slot sets.
//!
//! # Quick start
//!
//! ```no_run
//! use themekit::palette::PaletteColor;
//! use themekit::slots::{ColorSlot, Mode};
//! use themekit::store::{FileStorage, NullEnvironment, ThemeStore};
//!
//! # fn example() -> Result<(), themekit::error::ThemeError> {
//! let mut store = ThemeStore::open(
//!     Box::new(FileStorage::new("state.json")),
//!     Box::new(NullEnvironment),
//!     Mode::Light,
//! );
//! store.set_color(Mode::Dark, ColorSlot::Accent, Some(PaletteColor::Lime))?;
//! println!("{}", store.export_css());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod build_info;
pub mod config;
pub mod css;
pub mod error;
pub mod palette;
pub mod reconcile;
pub mod render;
pub mod slots;
pub mod store;
#[cfg(test)]
pub mod testsupport;
pub mod tokens;
