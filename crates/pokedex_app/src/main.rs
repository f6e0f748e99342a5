mod app;
mod logging;
mod screen;
mod style;

use app::Pokedex;

fn main() -> iced::Result {
    logging::initialize();

    iced::application("Pokédex", Pokedex::update, Pokedex::view)
        .theme(Pokedex::theme)
        .centered()
        .run_with(Pokedex::new)
}
