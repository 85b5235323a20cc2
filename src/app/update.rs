// SPDX-License-Identifier: MPL-2.0
//! Update loop for the demo application.

use super::{App, Message};
use crate::config;
use crate::library::delivery;
use crate::picker;
use iced::Task;
use std::path::PathBuf;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenPicker => self.open_picker(),
            Message::Picker(message) => self.forward_to_picker(message),
            Message::ChooseLibrary => Task::perform(choose_library(), Message::LibraryChosen),
            Message::LibraryChosen(None) => Task::none(),
            Message::LibraryChosen(Some(dir)) => {
                self.library_dir = dir.clone();
                self.config.library_dir = Some(dir);
                if let Err(err) = config::save(&self.config) {
                    eprintln!("Failed to save settings: {err}");
                }
                Task::none()
            }
            Message::PickedLoaded(images) => {
                self.delivering = false;
                self.picked = images;
                Task::none()
            }
        }
    }

    /// Builds a fresh picker instance; nothing carries over from the
    /// previous presentation.
    fn open_picker(&mut self) -> Task<Message> {
        let (state, scan) = picker::State::new(
            self.library_dir.clone(),
            self.config.grid_columns(),
            self.config.thumbnail_px(),
        );
        self.picker = Some(state);
        scan.map(Message::Picker)
    }

    fn forward_to_picker(&mut self, message: picker::Message) -> Task<Message> {
        let Some(picker) = &mut self.picker else {
            return Task::none();
        };

        let (effect, task) = picker.handle_message(message);
        let task = task.map(Message::Picker);

        match effect {
            picker::Effect::None => task,
            picker::Effect::Dismissed => {
                self.picker = None;
                task
            }
            picker::Effect::Confirmed(assets) => {
                self.picker = None;
                self.delivering = true;
                Task::batch([
                    task,
                    Task::perform(delivery::load_selected(assets), Message::PickedLoaded),
                ])
            }
        }
    }
}

async fn choose_library() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .pick_folder()
        .await
        .map(|folder| folder.path().to_path_buf())
}
