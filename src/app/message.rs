// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::library::delivery::PickedImage;
use crate::picker;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The `Picker` variant
/// forwards the component's messages while keeping a single update
/// entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Picker(picker::Message),
    /// Present a fresh picker over the gallery.
    OpenPicker,
    /// Open the folder chooser for the library directory.
    ChooseLibrary,
    /// Result from the folder chooser.
    LibraryChosen(Option<PathBuf>),
    /// The confirmed selection finished decoding.
    PickedLoaded(Vec<PickedImage>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional photo library directory to scan instead of the configured
    /// one.
    pub library_dir: Option<String>,
}
