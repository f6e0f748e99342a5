//! The paginated, searchable list screen.

use std::collections::HashMap;

use iced::widget::{button, column, container, image, row, scrollable, text, text_input, Space};
use iced::{Alignment, Color, Element, Length};

use pokedex_core::{DexEntry, ListView, Msg};

use crate::app::{Message, SpriteSlot};
use crate::style;

pub fn view<'a>(
    list: &'a ListView,
    sprites: &'a HashMap<u32, SpriteSlot>,
) -> Element<'a, Message> {
    let search = text_input("What Pokémon are you looking for?", &list.query)
        .on_input(|query| Message::Core(Msg::SearchChanged(query)))
        .padding(12);

    let mut rows = column![].spacing(10).padding(4);
    for entry in &list.entries {
        rows = rows.push(entry_row(entry, sprites.get(&entry.number)));
    }

    let entries = scrollable(rows)
        .on_scroll(|viewport| Message::ListScrolled(viewport.relative_offset()))
        .height(Length::Fill);

    let status_line = if list.is_loading {
        let label = match list.total {
            Some(total) => format!("Loading… ({} of {} loaded)", list.loaded_count, total),
            None => "Loading…".to_string(),
        };
        Some(text(label).size(16))
    } else if list.end_reached && !list.is_searching {
        Some(text("That's every creature in the catalog.").size(14))
    } else {
        None
    };

    let content = column![text("Pokédex").size(42), search, entries]
        .push_maybe(status_line)
        .push_maybe(list.load_error.as_deref().map(retry_section))
        .spacing(16)
        .padding(20)
        .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn entry_row<'a>(entry: &'a DexEntry, slot: Option<&'a SpriteSlot>) -> Element<'a, Message> {
    let tint = match slot {
        Some(SpriteSlot::Ready { dominant, .. }) => *dominant,
        _ => style::PLACEHOLDER_TINT,
    };

    let sprite: Element<'a, Message> = match slot {
        Some(SpriteSlot::Ready { handle, .. }) => {
            image(handle.clone()).width(96).height(96).into()
        }
        _ => Space::new(96, 96).into(),
    };

    let label = column![
        text(format!("#{}", entry.number)).size(20).color(Color::WHITE),
        text(style::capitalize(&entry.name))
            .size(24)
            .color(Color::WHITE),
    ]
    .spacing(4)
    .width(Length::Fill);

    let card = container(
        row![label, sprite]
            .align_y(Alignment::Center)
            .spacing(12)
            .padding(12),
    )
    .style(move |_theme| style::tinted_card(tint))
    .width(Length::Fill);

    button(card)
        .on_press(Message::Core(Msg::EntrySelected {
            entry: entry.clone(),
        }))
        .style(button::text)
        .padding(0)
        .width(Length::Fill)
        .into()
}

fn retry_section(error: &str) -> Element<'_, Message> {
    column![
        text(error).size(18).color(style::ERROR_TEXT),
        button("Retry").on_press(Message::Core(Msg::RetryClicked)),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .into()
}
