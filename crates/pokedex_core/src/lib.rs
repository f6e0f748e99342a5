//! Pokédex core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod resource;
mod state;
mod types;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use resource::Resource;
pub use state::AppState;
pub use types::{BaseStat, CreatureDetail, DexEntry, EntryPage, PAGE_SIZE};
pub use update::update;
pub use view_model::{AppViewModel, DetailView, ListView, ScreenView};
