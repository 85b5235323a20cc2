// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons.
//!
//! Icons are inline SVG sources embedded at compile time; handles are cached
//! with `OnceLock` so repeated views reuse the parsed asset. Names describe
//! the icon's appearance, not the action context.

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

static CLOSE_CIRCLE_SVG: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20Zm3.54 12.13a1 1 0 0 1-1.41 1.41L12 13.41l-2.13 2.13a1 1 0 0 1-1.41-1.41L10.59 12 8.46 9.87a1 1 0 1 1 1.41-1.41L12 10.59l2.13-2.13a1 1 0 0 1 1.41 1.41L13.41 12l2.13 2.13Z"/></svg>"##;

static PICTURE_SVG: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M19 3H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V5a2 2 0 0 0-2-2Zm-9.5 5A1.5 1.5 0 1 1 8 9.5 1.5 1.5 0 0 1 9.5 8Zm9.5 11H5v-2.59l3.79-3.79 2.5 2.5L16 11.41 19 14.4V19Z"/></svg>"##;

static FOLDER_SVG: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M10 4H4a2 2 0 0 0-2 2v12a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-8l-2-2Z"/></svg>"##;

fn cached<'a>(cell: &'static OnceLock<Handle>, bytes: &'static [u8]) -> Svg<'a> {
    let handle = cell.get_or_init(|| Handle::from_memory(bytes));
    Svg::new(handle.clone())
}

/// Filled circle with an X, used to close the popup.
pub fn close_circle<'a>() -> Svg<'a> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    cached(&HANDLE, CLOSE_CIRCLE_SVG)
}

/// Framed landscape, used for the gallery's empty state and open button.
pub fn picture<'a>() -> Svg<'a> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    cached(&HANDLE, PICTURE_SVG)
}

/// Plain folder, used for the library chooser button.
pub fn folder<'a>() -> Svg<'a> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    cached(&HANDLE, FOLDER_SVG)
}

/// Applies a square size to an icon.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(size).height(size)
}
