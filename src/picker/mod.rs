// SPDX-License-Identifier: MPL-2.0
//! Popup photo picker component.
//!
//! Follows the component-based architecture with the Elm-style "state down,
//! messages up" pattern:
//!
//! - [`entry`] - Grid entry model with local identity separate from the
//!   library identity
//! - [`selection`] - Ordered multi-selection with contiguous ranks
//! - [`component`] - `State`/`Message`/`handle_message` wiring of scan,
//!   thumbnails, and selection
//! - [`view`] - Popup card rendering (header, grid, confirm bar)
//! - [`popup`] - Overlay helper that stacks the card over host content with a
//!   click-to-dismiss backdrop

pub mod component;
pub mod entry;
pub mod popup;
pub mod selection;
pub mod view;

pub use component::{Effect, Message, State};
pub use entry::{EntryId, GridEntry};
pub use selection::Selection;
