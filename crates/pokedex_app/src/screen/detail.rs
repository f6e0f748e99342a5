//! The per-creature detail screen, themed with the row's dominant color.

use std::collections::HashMap;

use iced::widget::{button, column, container, image, progress_bar, row, text};
use iced::{Alignment, Color, Element, Length};

use pokedex_core::{CreatureDetail, DetailView, Msg, Resource};

use crate::app::{Message, SpriteSlot};
use crate::style;

pub fn view<'a>(
    detail: &'a DetailView,
    sprites: &'a HashMap<u32, SpriteSlot>,
) -> Element<'a, Message> {
    let slot = sprites.get(&detail.entry.number);
    let tint = match slot {
        Some(SpriteSlot::Ready { dominant, .. }) => *dominant,
        _ => style::PLACEHOLDER_TINT,
    };

    let back = button(text("← Back").size(18).color(Color::WHITE))
        .on_press(Message::Core(Msg::BackClicked))
        .style(button::text);

    let sprite = slot.and_then(|slot| match slot {
        SpriteSlot::Ready { handle, .. } => Some(image(handle.clone()).width(220).height(220)),
        _ => None,
    });

    let body: Element<'a, Message> = match &detail.detail {
        Resource::Loading => text("Loading…").size(18).into(),
        Resource::Error(message) => column![
            text(message).size(18).color(style::ERROR_TEXT),
            button("Retry").on_press(Message::Core(Msg::RetryClicked)),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .into(),
        Resource::Success(record) => detail_section(record, tint),
    };

    let content = column![back]
        .push_maybe(sprite)
        .push(body)
        .spacing(16)
        .padding(20)
        .align_x(Alignment::Center)
        .width(Length::Fill);

    container(content)
        .style(move |_theme| style::tinted_card(tint))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn detail_section(record: &CreatureDetail, tint: Color) -> Element<'_, Message> {
    let types = record.types.iter().fold(
        row![].spacing(8),
        |types, name| {
            let badge_tint = style::type_color(name);
            types.push(
                container(
                    text(style::capitalize(name))
                        .size(18)
                        .color(Color::WHITE),
                )
                .style(move |_theme| style::type_badge(badge_tint))
                .padding([6, 20]),
            )
        },
    );

    // Bars are scaled against the creature's own largest stat, like the
    // original Pokédex layout.
    let max_stat = record
        .stats
        .iter()
        .map(|stat| stat.value)
        .max()
        .unwrap_or(1)
        .max(1);

    let mut stats = column![text("Base Stats").size(22).color(Color::WHITE)].spacing(10);
    for stat in &record.stats {
        stats = stats.push(
            row![
                text(style::stat_abbreviation(&stat.name))
                    .size(16)
                    .color(Color::WHITE)
                    .width(60),
                progress_bar(0.0..=max_stat as f32, stat.value as f32)
                    .height(18)
                    .style(move |_theme| style::stat_bar(tint)),
                text(stat.value.to_string()).size(16).color(Color::WHITE),
            ]
            .align_y(Alignment::Center)
            .spacing(10),
        );
    }

    column![
        text(format!("#{}", record.id)).size(20).color(Color::WHITE),
        text(style::capitalize(&record.name))
            .size(32)
            .color(Color::WHITE),
        types,
        stats,
    ]
    .spacing(14)
    .align_x(Alignment::Center)
    .into()
}
