//! Colors and small styling helpers shared by both screens.

use iced::border;
use iced::widget::{container, progress_bar};
use iced::{Background, Color};

/// Row tint used until a sprite (and with it a dominant color) has arrived,
/// and when the sprite fetch failed.
pub const PLACEHOLDER_TINT: Color = Color {
    r: 0.35,
    g: 0.35,
    b: 0.40,
    a: 1.0,
};

/// Track color behind the stat bars.
const BAR_TRACK: Color = Color {
    r: 0.31,
    g: 0.31,
    b: 0.31,
    a: 1.0,
};

pub const ERROR_TEXT: Color = Color {
    r: 0.90,
    g: 0.22,
    b: 0.21,
    a: 1.0,
};

/// Card style for a list row, tinted with the entry's dominant color.
pub fn tinted_card(tint: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(tint)),
        border: border::rounded(14),
        ..container::Style::default()
    }
}

/// Pill badge for an elemental type.
pub fn type_badge(tint: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(tint)),
        border: border::rounded(16),
        ..container::Style::default()
    }
}

/// Stat bar drawn in the screen's dominant color.
pub fn stat_bar(tint: Color) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(BAR_TRACK),
        bar: Background::Color(tint),
        border: border::rounded(9),
    }
}

/// The conventional color per elemental type; unknown types get a neutral
/// gray.
pub fn type_color(name: &str) -> Color {
    match name {
        "normal" => Color::from_rgb8(0xA8, 0xA7, 0x7A),
        "fire" => Color::from_rgb8(0xEE, 0x81, 0x30),
        "water" => Color::from_rgb8(0x63, 0x90, 0xF0),
        "electric" => Color::from_rgb8(0xF7, 0xD0, 0x2C),
        "grass" => Color::from_rgb8(0x7A, 0xC7, 0x4C),
        "ice" => Color::from_rgb8(0x96, 0xD9, 0xD6),
        "fighting" => Color::from_rgb8(0xC2, 0x2E, 0x28),
        "poison" => Color::from_rgb8(0xA3, 0x3E, 0xA1),
        "ground" => Color::from_rgb8(0xE2, 0xBF, 0x65),
        "flying" => Color::from_rgb8(0xA9, 0x8F, 0xF3),
        "psychic" => Color::from_rgb8(0xF9, 0x55, 0x87),
        "bug" => Color::from_rgb8(0xA6, 0xB9, 0x1A),
        "rock" => Color::from_rgb8(0xB6, 0xA1, 0x36),
        "ghost" => Color::from_rgb8(0x73, 0x57, 0x97),
        "dragon" => Color::from_rgb8(0x6F, 0x35, 0xFC),
        "dark" => Color::from_rgb8(0x70, 0x57, 0x46),
        "steel" => Color::from_rgb8(0xB7, 0xB7, 0xCE),
        "fairy" => Color::from_rgb8(0xD6, 0x85, 0xAD),
        _ => Color::from_rgb8(0x9E, 0x9E, 0x9E),
    }
}

/// Short label for a base statistic, matching the usual Pokédex shorthand.
pub fn stat_abbreviation(name: &str) -> &str {
    match name {
        "hp" => "HP",
        "attack" => "Atk",
        "defense" => "Def",
        "special-attack" => "SpAtk",
        "special-defense" => "SpDef",
        "speed" => "Spd",
        other => other,
    }
}

/// Uppercase the first letter for display; the catalog serves lowercase
/// names.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_abbreviations_cover_the_six_base_stats() {
        assert_eq!(stat_abbreviation("hp"), "HP");
        assert_eq!(stat_abbreviation("special-defense"), "SpDef");
        assert_eq!(stat_abbreviation("evasion"), "evasion");
    }

    #[test]
    fn capitalize_handles_empty_and_ascii() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("pikachu"), "Pikachu");
    }
}
