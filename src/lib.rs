// SPDX-License-Identifier: MPL-2.0
//! `iced_picker` is a popup, grid-based photo picker component for the Iced
//! GUI framework.
//!
//! The crate scans a photo library directory, presents a thumbnail grid with
//! ordered multi-selection badges, and hands the confirmed photos back to the
//! host application. It also ships a small gallery demo that hosts the picker
//! behind a presentation toggle.

#![doc(html_root_url = "https://docs.rs/iced_picker/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod library;
pub mod picker;
pub mod ui;
