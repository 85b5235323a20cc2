// SPDX-License-Identifier: MPL-2.0
//! Picker component encapsulating state and update logic.
//!
//! One `State` is one presentation of the popup: constructing it kicks off a
//! fresh library scan and an empty selection, and the host drops the whole
//! instance on dismissal, so nothing persists between presentations. All
//! mutation happens inside [`State::handle_message`] on the UI task; the scan
//! and every thumbnail decode run in the background and re-enter as messages.

use crate::error::Error;
use crate::library::asset::PhotoAsset;
use crate::library::scanner;
use crate::library::thumbnail::{self, Thumbnail, ThumbnailCache};
use crate::picker::entry::{EntryId, GridEntry};
use crate::picker::selection::Selection;
use crate::picker::view::{self, ViewEnv};
use iced::{Element, Subscription, Task};
use std::collections::HashSet;
use std::ops::Range;
use std::path::PathBuf;
use std::time::Duration;

/// Side length of one grid cell, in logical pixels.
pub const CELL_SIZE: f32 = 70.0;
/// Gap between grid cells.
pub const GRID_SPACING: f32 = 10.0;
/// Grid viewport height assumed before the first scroll event arrives.
const INITIAL_VIEWPORT_HEIGHT: f32 = 440.0;
/// Rows requested beyond the visible band so slow decodes stay off-screen.
const OVERSCAN_ROWS: usize = 1;
/// Spinner rotation per tick at 16 ms (half a turn per second).
const ROTATION_SPEED: f32 = std::f32::consts::PI * 0.016;

/// Messages consumed by the picker's update loop.
#[derive(Debug, Clone)]
pub enum Message {
    /// Result of the one-shot library scan.
    LibraryLoaded(Result<Vec<PhotoAsset>, Error>),
    /// The grid scrolled; drives lazy thumbnail requests.
    GridScrolled { offset_y: f32, height: f32 },
    /// A background thumbnail decode finished.
    ThumbnailLoaded {
        id: EntryId,
        result: Result<Thumbnail, Error>,
    },
    /// A grid cell was clicked.
    EntryPressed(EntryId),
    ConfirmPressed,
    ClosePressed,
    BackdropPressed,
    SpinnerTick,
}

/// Outcome of a message, communicated upward to the host.
#[derive(Debug)]
pub enum Effect {
    None,
    /// The user confirmed; the payload is the selection in selection order.
    Confirmed(Vec<PhotoAsset>),
    /// The user closed the popup without confirming.
    Dismissed,
}

/// State of one picker presentation.
pub struct State {
    entries: Vec<GridEntry>,
    selection: Selection,
    thumbnails: ThumbnailCache,
    /// Entries whose thumbnail load has been issued; never removed, so each
    /// entry is requested at most once even if the load fails.
    requested: HashSet<EntryId>,
    listing_loading: bool,
    columns: usize,
    thumbnail_px: u32,
    scroll_offset: f32,
    viewport_height: f32,
    spinner_rotation: f32,
}

impl State {
    /// Creates a fresh picker over `library_dir` and returns the task that
    /// performs the initial scan.
    pub fn new(library_dir: PathBuf, columns: usize, thumbnail_px: u32) -> (Self, Task<Message>) {
        let state = Self {
            entries: Vec::new(),
            selection: Selection::new(),
            thumbnails: ThumbnailCache::with_defaults(),
            requested: HashSet::new(),
            listing_loading: true,
            columns,
            thumbnail_px,
            scroll_offset: 0.0,
            viewport_height: INITIAL_VIEWPORT_HEIGHT,
            spinner_rotation: 0.0,
        };

        let scan = Task::perform(scanner::scan_library_task(library_dir), Message::LibraryLoaded);
        (state, scan)
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::LibraryLoaded(Ok(assets)) => {
                self.listing_loading = false;
                self.entries = assets.into_iter().map(GridEntry::new).collect();
                (Effect::None, self.request_visible_thumbnails())
            }
            Message::LibraryLoaded(Err(err)) => {
                // Degrade to an empty grid; there is no scan error state.
                eprintln!("Photo library scan failed: {err}");
                self.listing_loading = false;
                self.entries = Vec::new();
                (Effect::None, Task::none())
            }
            Message::GridScrolled { offset_y, height } => {
                self.scroll_offset = offset_y;
                self.viewport_height = height;
                (Effect::None, self.request_visible_thumbnails())
            }
            Message::ThumbnailLoaded { id, result } => {
                self.apply_thumbnail(id, result);
                (Effect::None, Task::none())
            }
            Message::EntryPressed(id) => {
                if let Some(entry) = self.entries.iter().find(|entry| entry.id == id) {
                    let entry = entry.clone();
                    self.selection.toggle(&entry);
                }
                (Effect::None, Task::none())
            }
            Message::ConfirmPressed => {
                if self.selection.is_empty() {
                    // The button is disabled while empty; ignore stray presses.
                    (Effect::None, Task::none())
                } else {
                    (Effect::Confirmed(self.selection.confirm()), Task::none())
                }
            }
            Message::ClosePressed | Message::BackdropPressed => {
                self.selection.cancel();
                (Effect::Dismissed, Task::none())
            }
            Message::SpinnerTick => {
                self.spinner_rotation =
                    (self.spinner_rotation + ROTATION_SPEED) % (2.0 * std::f32::consts::PI);
                (Effect::None, Task::none())
            }
        }
    }

    /// Animates loading placeholders while the scan or any thumbnail is
    /// outstanding.
    pub fn subscription(&self) -> Subscription<Message> {
        let animating =
            self.listing_loading || self.entries.iter().any(|entry| entry.thumbnail.is_none());

        if animating {
            iced::time::every(Duration::from_millis(16)).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        view::view(self, env)
    }

    /// Issues thumbnail loads for the entries inside (and just beyond) the
    /// visible band. Cache hits are applied synchronously; every miss is
    /// requested at most once per entry.
    fn request_visible_thumbnails(&mut self) -> Task<Message> {
        let range = visible_entry_range(
            self.entries.len(),
            self.columns,
            self.scroll_offset,
            self.viewport_height,
        );

        let mut loads = Vec::new();
        for entry in &mut self.entries[range] {
            if entry.thumbnail.is_some() || self.requested.contains(&entry.id) {
                continue;
            }

            if let Some(cached) = self.thumbnails.get(entry.asset.path()) {
                entry.thumbnail = Some(cached);
                continue;
            }

            self.requested.insert(entry.id);
            let id = entry.id;
            let asset = entry.asset.clone();
            let target_px = self.thumbnail_px;
            loads.push(Task::perform(
                thumbnail::load_thumbnail(asset, target_px),
                move |(_, result)| Message::ThumbnailLoaded { id, result },
            ));
        }

        Task::batch(loads)
    }

    /// Stores a finished thumbnail on its entry, if the entry still exists.
    fn apply_thumbnail(&mut self, id: EntryId, result: Result<Thumbnail, Error>) {
        let thumbnail = match result {
            Ok(thumbnail) => thumbnail,
            Err(err) => {
                // The cell keeps its placeholder; purely cosmetic failure.
                eprintln!("Thumbnail load failed: {err}");
                return;
            }
        };

        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            self.thumbnails
                .insert(entry.asset.path().to_path_buf(), thumbnail.clone());
            entry.thumbnail = Some(thumbnail);
        }
    }

    // Accessors used by the view and by tests.

    pub fn entries(&self) -> &[GridEntry] {
        &self.entries
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.listing_loading
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Whether the confirm action is currently invocable.
    #[must_use]
    pub fn confirm_enabled(&self) -> bool {
        !self.selection.is_empty()
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("entries", &self.entries.len())
            .field("selected", &self.selection.len())
            .field("listing_loading", &self.listing_loading)
            .finish()
    }
}

/// Index range of the entries whose rows intersect the visible band, padded
/// by [`OVERSCAN_ROWS`] on each side.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
// Row counts are far below f32 precision limits and non-negative after max(0).
fn visible_entry_range(len: usize, columns: usize, offset_y: f32, height: f32) -> Range<usize> {
    if len == 0 || columns == 0 {
        return 0..0;
    }

    let row_height = CELL_SIZE + GRID_SPACING;
    let first_row = (offset_y / row_height).floor().max(0.0) as usize;
    let last_row = ((offset_y + height) / row_height).ceil().max(0.0) as usize;

    let first = first_row.saturating_sub(OVERSCAN_ROWS) * columns;
    let last = (last_row + OVERSCAN_ROWS + 1) * columns;

    first.min(len)..last.min(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;

    fn assets(count: usize) -> Vec<PhotoAsset> {
        (0..count)
            .map(|i| {
                PhotoAsset::new(
                    PathBuf::from(format!("/photos/{i}.jpg")),
                    SystemTime::UNIX_EPOCH,
                )
            })
            .collect()
    }

    fn loaded_state(count: usize) -> State {
        let (mut state, _scan) = State::new(PathBuf::from("/photos"), 4, 100);
        let (_, _task) = state.handle_message(Message::LibraryLoaded(Ok(assets(count))));
        state
    }

    #[test]
    fn scan_failure_degrades_to_empty_grid() {
        let (mut state, _scan) = State::new(PathBuf::from("/photos"), 4, 100);
        let (effect, _task) =
            state.handle_message(Message::LibraryLoaded(Err(Error::Io("denied".into()))));

        assert!(matches!(effect, Effect::None));
        assert!(!state.is_loading());
        assert!(state.entries().is_empty());
        assert!(!state.confirm_enabled());
    }

    #[test]
    fn entries_preserve_scan_order() {
        let state = loaded_state(6);
        let names: Vec<_> = state
            .entries()
            .iter()
            .map(|entry| entry.asset.file_name())
            .collect();
        assert_eq!(names.len(), 6);
        assert_eq!(names[0], "0.jpg");
        assert_eq!(names[5], "5.jpg");
    }

    #[test]
    fn pressing_an_entry_selects_it() {
        let mut state = loaded_state(3);
        let id = state.entries()[1].id;

        let (effect, _task) = state.handle_message(Message::EntryPressed(id));
        assert!(matches!(effect, Effect::None));
        assert_eq!(state.selection().rank_of(id), Some(0));
        assert!(state.confirm_enabled());
    }

    #[test]
    fn pressing_twice_deselects_again() {
        let mut state = loaded_state(3);
        let id = state.entries()[1].id;

        state.handle_message(Message::EntryPressed(id));
        state.handle_message(Message::EntryPressed(id));

        assert_eq!(state.selection().rank_of(id), None);
        assert!(!state.confirm_enabled());
    }

    #[test]
    fn pressing_unknown_id_is_a_no_op() {
        let mut state = loaded_state(3);
        let stray = EntryId::next();

        let (effect, _task) = state.handle_message(Message::EntryPressed(stray));
        assert!(matches!(effect, Effect::None));
        assert!(state.selection().is_empty());
    }

    #[test]
    fn confirm_projects_selection_order() {
        let mut state = loaded_state(3);
        let first = state.entries()[2].id;
        let second = state.entries()[0].id;

        state.handle_message(Message::EntryPressed(first));
        state.handle_message(Message::EntryPressed(second));
        let (effect, _task) = state.handle_message(Message::ConfirmPressed);

        match effect {
            Effect::Confirmed(picked) => {
                assert_eq!(picked.len(), 2);
                assert_eq!(picked[0].file_name(), "2.jpg");
                assert_eq!(picked[1].file_name(), "0.jpg");
            }
            other => panic!("expected Confirmed, got {other:?}"),
        }
    }

    #[test]
    fn confirm_with_empty_selection_does_nothing() {
        let mut state = loaded_state(0);
        let (effect, _task) = state.handle_message(Message::ConfirmPressed);
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn close_dismisses_and_clears_selection() {
        let mut state = loaded_state(2);
        let id = state.entries()[0].id;
        state.handle_message(Message::EntryPressed(id));

        let (effect, _task) = state.handle_message(Message::ClosePressed);
        assert!(matches!(effect, Effect::Dismissed));
        assert!(state.selection().is_empty());
    }

    #[test]
    fn thumbnail_is_requested_at_most_once() {
        let mut state = loaded_state(4);
        let requested_after_load = state.requested.len();
        assert!(requested_after_load > 0, "initial band should be requested");

        // A failed load must not trigger a retry on the next scroll.
        let id = state.entries()[0].id;
        state.handle_message(Message::ThumbnailLoaded {
            id,
            result: Err(Error::Image("broken".into())),
        });
        let _ = state.request_visible_thumbnails();
        assert_eq!(state.requested.len(), requested_after_load);
    }

    #[test]
    fn finished_thumbnail_lands_on_its_entry_and_cache() {
        let mut state = loaded_state(2);
        let id = state.entries()[0].id;
        let path = state.entries()[0].asset.path().to_path_buf();

        let pixels = vec![0u8; 4 * 4 * 4];
        let thumbnail = Thumbnail {
            handle: iced::widget::image::Handle::from_rgba(4, 4, pixels),
            width: 4,
            height: 4,
        };
        state.handle_message(Message::ThumbnailLoaded {
            id,
            result: Ok(thumbnail),
        });

        assert!(state.entries()[0].thumbnail.is_some());
        assert!(state.thumbnails.contains(&path));
    }

    #[test]
    fn stale_thumbnail_for_unknown_entry_is_dropped() {
        let mut state = loaded_state(1);
        let stray = EntryId::next();

        let pixels = vec![0u8; 4];
        state.handle_message(Message::ThumbnailLoaded {
            id: stray,
            result: Ok(Thumbnail {
                handle: iced::widget::image::Handle::from_rgba(1, 1, pixels),
                width: 1,
                height: 1,
            }),
        });

        assert!(state.entries()[0].thumbnail.is_none());
        assert!(state.thumbnails.is_empty());
    }

    #[test]
    fn visible_range_is_clamped_to_len() {
        assert_eq!(visible_entry_range(0, 4, 0.0, 400.0), 0..0);
        assert_eq!(visible_entry_range(3, 4, 0.0, 400.0), 0..3);
    }

    #[test]
    fn visible_range_follows_scroll_offset() {
        // 100 entries in 4 columns; 80 px rows.
        let near_top = visible_entry_range(100, 4, 0.0, 160.0);
        assert_eq!(near_top.start, 0);
        assert!(near_top.end >= 8, "two rows plus overscan");

        let scrolled = visible_entry_range(100, 4, 800.0, 160.0);
        assert!(scrolled.start >= 4 * 9, "rows above the band are skipped");
        assert!(scrolled.end <= 100);
    }
}
