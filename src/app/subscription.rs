// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.
//!
//! The only active subscription is the picker's spinner clock, and only
//! while the popup is presented.

use super::{App, Message};
use iced::Subscription;

impl App {
    pub fn subscription(&self) -> Subscription<Message> {
        match &self.picker {
            Some(picker) => picker.subscription().map(Message::Picker),
            None => Subscription::none(),
        }
    }
}
