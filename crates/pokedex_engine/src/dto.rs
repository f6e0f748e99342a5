//! Serde views of the remote catalog schema.
//!
//! Only the fields this app reads are declared; serde skips the rest of the
//! service's (large) payloads.

use serde::Deserialize;

use pokedex_core::{BaseStat, CreatureDetail, DexEntry, EntryPage};

use crate::types::CatalogError;

#[derive(Debug, Deserialize)]
pub(crate) struct PageDto {
    pub count: u32,
    pub results: Vec<NamedResourceDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NamedResourceDto {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailDto {
    pub id: u32,
    pub name: String,
    pub types: Vec<TypeSlotDto>,
    pub stats: Vec<StatEntryDto>,
    pub sprites: SpritesDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypeSlotDto {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResourceDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatEntryDto {
    pub base_stat: u32,
    pub stat: NamedResourceDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpritesDto {
    pub front_default: Option<String>,
}

impl PageDto {
    /// Map the raw page into domain entries. The catalog number is the
    /// trailing path segment of each result URL; the sprite URL is derived
    /// from it.
    pub(crate) fn into_entry_page(self, sprite_base_url: &str) -> Result<EntryPage, CatalogError> {
        let sprite_base = sprite_base_url.trim_end_matches('/');
        let mut entries = Vec::with_capacity(self.results.len());
        for result in self.results {
            let number = trailing_number(&result.url).ok_or_else(|| {
                CatalogError::Decode(format!("no catalog number in result url {}", result.url))
            })?;
            entries.push(DexEntry {
                number,
                name: result.name,
                image_url: format!("{sprite_base}/{number}.png"),
            });
        }
        Ok(EntryPage {
            total: self.count,
            entries,
        })
    }
}

impl DetailDto {
    pub(crate) fn into_detail(mut self) -> CreatureDetail {
        self.types.sort_by_key(|entry| entry.slot);
        CreatureDetail {
            id: self.id,
            name: self.name,
            types: self.types.into_iter().map(|entry| entry.kind.name).collect(),
            stats: self
                .stats
                .into_iter()
                .map(|entry| BaseStat {
                    name: entry.stat.name,
                    value: entry.base_stat,
                })
                .collect(),
            image_url: self.sprites.front_default.unwrap_or_default(),
        }
    }
}

/// Parse the catalog number out of a resource URL such as
/// `https://pokeapi.co/api/v2/pokemon/25/`.
fn trailing_number(url: &str) -> Option<u32> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}
