// SPDX-License-Identifier: MPL-2.0
//! Popup card rendering: header, thumbnail grid, and confirm bar.

use crate::i18n::fluent::I18n;
use crate::picker::component::{Message, State, CELL_SIZE, GRID_SPACING};
use crate::picker::entry::GridEntry;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use crate::ui::widgets::AnimatedSpinner;
use fluent_bundle::FluentArgs;
use iced::widget::{
    button, container, image, mouse_area, svg, Column, Container, Row, Scrollable, Stack, Text,
};
use iced::{alignment, mouse, ContentFit, Element, Length};

/// Fixed popup card footprint, sized for a four-column grid.
pub const CARD_WIDTH: f32 = 350.0;
pub const CARD_HEIGHT: f32 = 560.0;

/// Context required to render the picker popup.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
}

/// Renders the popup card.
pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = if state.is_loading() {
        loading_state(state, &env)
    } else if state.entries().is_empty() {
        empty_state(&env)
    } else {
        grid(state, &env)
    };

    let content = Column::new()
        .push(header(&env))
        .push(Container::new(body).width(Length::Fill).height(Length::Fill))
        .push(confirm_bar(state, &env));

    Container::new(content)
        .width(Length::Fixed(CARD_WIDTH))
        .height(Length::Fixed(CARD_HEIGHT))
        .style(styles::container::card(env.theme))
        .into()
}

fn header<'a>(env: &ViewEnv<'a>) -> Element<'a, Message> {
    let title = Text::new(env.i18n.tr("picker-title"))
        .size(typography::TITLE_SM)
        .color(env.theme.colors.text_primary)
        .width(Length::Fill);

    let close_color = env.theme.colors.text_primary;
    let close_icon = icons::sized(icons::close_circle(), sizing::ICON_MD)
        .style(move |_theme, _status| svg::Style {
            color: Some(close_color),
        });

    let close = button(close_icon)
        .padding(spacing::XXS)
        .style(styles::button::bare(close_color))
        .on_press(Message::ClosePressed);

    Row::new()
        .push(title)
        .push(close)
        .align_y(alignment::Vertical::Center)
        .padding([spacing::SM, spacing::MD])
        .into()
}

fn grid<'a>(state: &'a State, env: &ViewEnv<'a>) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(GRID_SPACING);
    for band in state.entries().chunks(state.columns()) {
        let mut row = Row::new().spacing(GRID_SPACING);
        for entry in band {
            row = row.push(cell(
                entry,
                state.selection().rank_of(entry.id),
                state.spinner_rotation(),
                env,
            ));
        }
        rows = rows.push(row);
    }

    Scrollable::new(
        Container::new(rows)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding([spacing::XS, spacing::MD]),
    )
    .height(Length::Fill)
    .on_scroll(|viewport| Message::GridScrolled {
        offset_y: viewport.absolute_offset().y,
        height: viewport.bounds().height,
    })
    .into()
}

/// One grid cell: thumbnail (or spinner placeholder), scrim, and badge,
/// stacked and clickable.
fn cell<'a>(
    entry: &'a GridEntry,
    rank: Option<usize>,
    spinner_rotation: f32,
    env: &ViewEnv<'a>,
) -> Element<'a, Message> {
    let base: Element<'a, Message> = match &entry.thumbnail {
        Some(thumbnail) => image::Image::new(thumbnail.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(CELL_SIZE))
            .height(Length::Fixed(CELL_SIZE))
            .into(),
        None => Container::new(
            AnimatedSpinner::new(
                env.theme.colors.brand_primary,
                spinner_rotation,
                sizing::ICON_MD,
            )
            .into_element(),
        )
        .width(Length::Fixed(CELL_SIZE))
        .height(Length::Fixed(CELL_SIZE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::cell_placeholder)
        .into(),
    };

    let scrim = Container::new(Column::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::badge::cell_scrim);

    let badge_corner = Container::new(badge(rank))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::XXS);

    let stacked = Stack::new().push(base).push(scrim).push(badge_corner);

    mouse_area(
        Container::new(stacked)
            .width(Length::Fixed(CELL_SIZE))
            .height(Length::Fixed(CELL_SIZE))
            .clip(true),
    )
    .interaction(mouse::Interaction::Pointer)
    .on_press(Message::EntryPressed(entry.id))
    .into()
}

fn badge<'a>(rank: Option<usize>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match rank {
        Some(position) => Text::new((position + 1).to_string())
            .size(typography::CAPTION)
            .into(),
        None => Column::new().into(),
    };

    let style: fn(&iced::Theme) -> container::Style = if rank.is_some() {
        styles::badge::numbered
    } else {
        styles::badge::ring
    };

    Container::new(content)
        .width(Length::Fixed(sizing::BADGE))
        .height(Length::Fixed(sizing::BADGE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(style)
        .into()
}

fn confirm_bar<'a>(state: &'a State, env: &ViewEnv<'a>) -> Element<'a, Message> {
    let count = state.selection().len();
    let label = if count == 0 {
        env.i18n.tr("picker-confirm-empty")
    } else {
        let mut args = FluentArgs::new();
        args.set("count", count);
        env.i18n.tr_args("picker-confirm", &args)
    };

    let confirm = button(Text::new(label).size(typography::BODY))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary)
        .on_press_maybe(state.confirm_enabled().then_some(Message::ConfirmPressed));

    Container::new(confirm)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding([spacing::SM, spacing::MD])
        .into()
}

fn empty_state<'a>(env: &ViewEnv<'a>) -> Element<'a, Message> {
    let caption = Text::new(env.i18n.tr("picker-empty"))
        .size(typography::BODY_SM)
        .color(env.theme.colors.text_secondary);

    Container::new(caption)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn loading_state<'a>(state: &'a State, env: &ViewEnv<'a>) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(
        env.theme.colors.brand_primary,
        state.spinner_rotation(),
        sizing::ICON_LG,
    )
    .into_element();

    Container::new(spinner)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
