// SPDX-License-Identifier: MPL-2.0
//! Localization support built on Fluent.
//!
//! Translations live in embedded `.ftl` files under `assets/i18n/`; the
//! active locale is resolved from the CLI flag, then the config file, then
//! the OS locale.

pub mod fluent;
