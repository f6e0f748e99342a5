//! Pokédex engine: IO layer for the remote catalog and sprite images.
mod catalog;
mod dto;
mod palette;
mod sprite;
mod types;

pub use catalog::{CatalogApi, CatalogSettings, ReqwestCatalog};
pub use palette::{dominant_color, Rgb8};
pub use sprite::{Sprite, SpriteFetcher};
pub use types::CatalogError;
