use std::collections::HashMap;
use std::sync::Arc;

use iced::widget::image as iced_image;
use iced::widget::scrollable::RelativeOffset;
use iced::{Color, Element, Task, Theme};

use pokedex_core::{update, AppState, AppViewModel, Effect, Msg, ScreenView};
use pokedex_engine::{CatalogApi, CatalogSettings, ReqwestCatalog, Sprite, SpriteFetcher};

use crate::screen;

/// How far down the list has to be scrolled before the next page is
/// requested.
const LOAD_MORE_THRESHOLD: f32 = 0.9;

/// Per-entry sprite slot. A failed fetch degrades to the placeholder tint,
/// never to an error surface.
#[derive(Debug, Clone)]
pub enum SpriteSlot {
    Loading,
    Ready {
        handle: iced_image::Handle,
        dominant: Color,
    },
    Failed,
}

/// Main application state: the pure core state machine plus everything only
/// the shell cares about (HTTP clients, decoded sprites).
pub struct Pokedex {
    state: AppState,
    /// Render snapshot, refreshed after every core dispatch so `view` can
    /// borrow from it.
    view_model: AppViewModel,
    /// Sprite cache keyed by catalog number, kept for the process lifetime.
    sprites: HashMap<u32, SpriteSlot>,
    catalog: Arc<ReqwestCatalog>,
    sprite_fetcher: Arc<SpriteFetcher>,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A message for the core state machine.
    Core(Msg),
    /// The list was scrolled; near the bottom this turns into a page load.
    ListScrolled(RelativeOffset),
    /// A sprite download finished.
    SpriteFetched {
        number: u32,
        result: Result<Sprite, String>,
    },
}

impl Pokedex {
    /// Create a new instance of the application and kick off the first page.
    pub fn new() -> (Self, Task<Message>) {
        let settings = CatalogSettings::default();
        // Without HTTP clients the app cannot function at all, so failing to
        // build them at startup is fatal.
        let catalog =
            Arc::new(ReqwestCatalog::new(settings.clone()).expect("failed to build catalog client"));
        let sprite_fetcher =
            Arc::new(SpriteFetcher::new(&settings).expect("failed to build sprite client"));

        let state = AppState::new();
        let view_model = state.view();
        let mut app = Pokedex {
            state,
            view_model,
            sprites: HashMap::new(),
            catalog,
            sprite_fetcher,
        };
        let task = app.dispatch(Msg::LoadNextPage);
        (app, task)
    }

    /// Handle application messages and update state.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Core(msg) => self.dispatch(msg),
            Message::ListScrolled(offset) => {
                if offset.y >= LOAD_MORE_THRESHOLD {
                    self.dispatch(Msg::LoadNextPage)
                } else {
                    Task::none()
                }
            }
            Message::SpriteFetched { number, result } => {
                let slot = match result {
                    Ok(sprite) => SpriteSlot::Ready {
                        handle: iced_image::Handle::from_bytes(sprite.bytes),
                        dominant: Color::from_rgb8(
                            sprite.dominant.r,
                            sprite.dominant.g,
                            sprite.dominant.b,
                        ),
                    },
                    Err(message) => {
                        log::warn!("sprite fetch for #{number} failed: {message}");
                        SpriteSlot::Failed
                    }
                };
                self.sprites.insert(number, slot);
                Task::none()
            }
        }
    }

    /// Build the user interface.
    pub fn view(&self) -> Element<'_, Message> {
        match &self.view_model.screen {
            ScreenView::List(list) => screen::list::view(list, &self.sprites),
            ScreenView::Detail(detail) => screen::detail::view(detail, &self.sprites),
        }
    }

    /// Set the application theme.
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Run a core message through the pure update function, refresh the
    /// render snapshot, and turn the returned effects into tasks.
    fn dispatch(&mut self, msg: Msg) -> Task<Message> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.view_model = self.state.view();

        let mut tasks: Vec<Task<Message>> = effects
            .into_iter()
            .map(|effect| self.run_effect(effect))
            .collect();
        tasks.push(self.request_missing_sprites());
        Task::batch(tasks)
    }

    /// Each effect becomes one cooperative task on the framework's executor.
    fn run_effect(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::FetchPage { offset, limit } => {
                let catalog = self.catalog.clone();
                Task::perform(
                    async move { catalog.entry_page(offset, limit).await },
                    move |result| match result {
                        Ok(page) => Message::Core(Msg::PageLoaded {
                            offset,
                            total: page.total,
                            entries: page.entries,
                        }),
                        Err(err) => Message::Core(Msg::PageFailed {
                            offset,
                            message: err.to_string(),
                        }),
                    },
                )
            }
            Effect::FetchDetail { name } => {
                let catalog = self.catalog.clone();
                let request = name.clone();
                Task::perform(
                    async move { catalog.creature_detail(&request).await },
                    move |result| {
                        Message::Core(Msg::DetailLoaded {
                            name: name.clone(),
                            result: result.map_err(|err| err.to_string()),
                        })
                    },
                )
            }
        }
    }

    /// Schedule sprite downloads for entries that have none yet.
    fn request_missing_sprites(&mut self) -> Task<Message> {
        let mut wanted: Vec<(u32, String)> = Vec::new();
        match &self.view_model.screen {
            ScreenView::List(list) => {
                for entry in &list.entries {
                    if !self.sprites.contains_key(&entry.number) {
                        wanted.push((entry.number, entry.image_url.clone()));
                    }
                }
            }
            ScreenView::Detail(detail) => {
                let number = detail.entry.number;
                if !self.sprites.contains_key(&number) {
                    // Prefer the richer record's own sprite once it arrived.
                    let url = detail
                        .detail
                        .success()
                        .map(|record| record.image_url.clone())
                        .filter(|url| !url.is_empty())
                        .unwrap_or_else(|| detail.entry.image_url.clone());
                    wanted.push((number, url));
                }
            }
        }

        let tasks: Vec<Task<Message>> = wanted
            .into_iter()
            .map(|(number, url)| self.fetch_sprite(number, url))
            .collect();
        Task::batch(tasks)
    }

    fn fetch_sprite(&mut self, number: u32, url: String) -> Task<Message> {
        self.sprites.insert(number, SpriteSlot::Loading);
        let fetcher = self.sprite_fetcher.clone();
        Task::perform(
            async move { fetcher.fetch(&url).await.map_err(|err| err.to_string()) },
            move |result| Message::SpriteFetched { number, result },
        )
    }
}
