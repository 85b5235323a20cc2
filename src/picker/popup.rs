// SPDX-License-Identifier: MPL-2.0
//! Overlay presentation of the picker card.
//!
//! The host owns the presentation toggle as an `Option<picker::State>`; this
//! helper only composes layers. The card sits over a dimmed backdrop that
//! blocks events from reaching the host content; clicking the backdrop emits
//! the dismiss message, clicking the card does not.

use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::widget::{mouse_area, opaque, Container, Stack};
use iced::{alignment, mouse, Element, Length};

/// Stacks `popup` (when present) over `base` with a click-to-dismiss
/// backdrop.
pub fn overlay<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    popup: Option<Element<'a, Message>>,
    theme: &AppTheme,
    on_backdrop: Message,
) -> Element<'a, Message> {
    let Some(popup) = popup else {
        return base;
    };

    let backdrop = Container::new(opaque(popup))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::backdrop(theme));

    // mouse_area resets the cursor over the backdrop and catches the
    // dismissing click; the inner opaque keeps card clicks out of it.
    let blocker = mouse_area(backdrop)
        .interaction(mouse::Interaction::Idle)
        .on_press(on_backdrop);

    Stack::new().push(base).push(opaque(blocker)).into()
}
