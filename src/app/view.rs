// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The gallery host renders behind the picker; the popup overlay (when open)
//! is stacked on top with a click-to-dismiss backdrop.

use super::{App, Message};
use crate::picker::{self, popup, view::ViewEnv};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, image, svg, Column, Container, Row, Scrollable, Text};
use iced::{alignment, ContentFit, Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let host = self.view_gallery();

        let popup_card = self
            .picker
            .as_ref()
            .map(|state| {
                state
                    .view(ViewEnv {
                        i18n: &self.i18n,
                        theme: &self.app_theme,
                    })
                    .map(Message::Picker)
            });

        popup::overlay(
            host,
            popup_card,
            &self.app_theme,
            Message::Picker(picker::Message::BackdropPressed),
        )
    }

    fn view_gallery(&self) -> Element<'_, Message> {
        let heading = Text::new(self.i18n.tr("app-title"))
            .size(typography::TITLE_MD)
            .color(self.app_theme.colors.text_primary)
            .width(Length::Fill);

        let toolbar = Row::new()
            .push(heading)
            .push(self.toolbar_button(
                icons::folder(),
                self.i18n.tr("gallery-change-library"),
                Message::ChooseLibrary,
            ))
            .push(self.toolbar_button(
                icons::picture(),
                self.i18n.tr("gallery-open-picker"),
                Message::OpenPicker,
            ))
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);

        let body: Element<'_, Message> = if self.delivering {
            self.centered_caption(self.i18n.tr("gallery-loading"))
        } else if self.picked.is_empty() {
            self.centered_caption(self.i18n.tr("gallery-empty"))
        } else {
            self.picked_strip()
        };

        Column::new()
            .push(toolbar)
            .push(Container::new(body).width(Length::Fill).height(Length::Fill))
            .padding(spacing::LG)
            .spacing(spacing::LG)
            .into()
    }

    fn toolbar_button<'a>(
        &'a self,
        icon: svg::Svg<'a>,
        label: String,
        on_press: Message,
    ) -> Element<'a, Message> {
        let icon_color = self.app_theme.colors.text_primary;
        let content = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                icons::sized(icon, sizing::ICON_SM).style(move |_theme, _status| svg::Style {
                    color: Some(icon_color),
                }),
            )
            .push(Text::new(label).size(typography::BODY_SM));

        button(content)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::secondary)
            .on_press(on_press)
            .into()
    }

    fn picked_strip(&self) -> Element<'_, Message> {
        let heading = Text::new(self.i18n.tr("gallery-picked-heading"))
            .size(typography::BODY)
            .color(self.app_theme.colors.text_secondary);

        let mut strip = Row::new().spacing(spacing::SM);
        for picked in &self.picked {
            strip = strip.push(
                image::Image::new(picked.handle.clone())
                    .content_fit(ContentFit::Contain)
                    .height(Length::Fixed(sizing::PICKED_STRIP)),
            );
        }

        Column::new()
            .push(heading)
            .push(Scrollable::new(strip).width(Length::Fill))
            .spacing(spacing::SM)
            .into()
    }

    fn centered_caption(&self, caption: String) -> Element<'_, Message> {
        Container::new(
            Text::new(caption)
                .size(typography::BODY_SM)
                .color(self.app_theme.colors.text_secondary),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
    }
}
