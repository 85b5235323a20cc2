// SPDX-License-Identifier: MPL-2.0
//! Demo gallery application hosting the picker.
//!
//! The `App` owns the presentation toggle: the picker is an
//! `Option<picker::State>`, so presenting builds a fresh instance (fresh
//! scan, empty selection) and dismissing drops it. Confirmed selections are
//! decoded through [`crate::library::delivery`] and rendered as a strip.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::library::delivery::PickedImage;
use crate::picker;
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::{window, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root application state bridging the gallery host and the picker popup.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    app_theme: AppTheme,
    /// Library directory the next presentation will scan.
    library_dir: PathBuf,
    /// Presentation toggle: `Some` while the popup is shown.
    picker: Option<picker::State>,
    /// Last confirmed selection, decoded.
    picked: Vec<PickedImage>,
    /// True between a confirm and the arrival of its decoded images.
    delivering: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("picker_open", &self.picker.is_some())
            .field("picked", &self.picked.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
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

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let theme_mode = config.theme_mode.unwrap_or_default();
        let library_dir = flags
            .library_dir
            .map(PathBuf::from)
            .or_else(|| config.library_dir.clone())
            .or_else(dirs::picture_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        let app = App {
            i18n,
            config,
            theme_mode,
            app_theme: AppTheme::new(theme_mode),
            library_dir,
            picker: None,
            picked: Vec::new(),
            delivering: false,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
