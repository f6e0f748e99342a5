use std::time::Duration;

use serde::de::DeserializeOwned;

use pokedex_core::{CreatureDetail, EntryPage};

use crate::dto::{DetailDto, PageDto};
use crate::types::{map_reqwest_error, CatalogError};

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    /// Root of the catalog API, without a trailing slash.
    pub base_url: String,
    /// Root of the sprite repository; entries derive their image URL from it.
    pub sprite_base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            sprite_base_url:
                "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon"
                    .to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch one page of lightweight entries: GET `{base}/pokemon?offset=&limit=`.
    async fn entry_page(&self, offset: u32, limit: u32) -> Result<EntryPage, CatalogError>;

    /// Fetch the full record for one creature: GET `{base}/pokemon/{name}`.
    async fn creature_detail(&self, name: &str) -> Result<CreatureDetail, CatalogError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCatalog {
    settings: CatalogSettings,
    client: reqwest::Client,
}

impl ReqwestCatalog {
    pub fn new(settings: CatalogSettings) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| CatalogError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.settings.base_url.trim_end_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| CatalogError::InvalidUrl(err.to_string()))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus(status.as_u16()));
        }

        response.json::<T>().await.map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl CatalogApi for ReqwestCatalog {
    async fn entry_page(&self, offset: u32, limit: u32) -> Result<EntryPage, CatalogError> {
        let url = self.endpoint(&format!("pokemon?offset={offset}&limit={limit}"));
        log::debug!("fetching entry page offset={offset} limit={limit}");
        let page: PageDto = self.get_json(&url).await?;
        page.into_entry_page(&self.settings.sprite_base_url)
    }

    async fn creature_detail(&self, name: &str) -> Result<CreatureDetail, CatalogError> {
        let url = self.endpoint(&format!("pokemon/{name}"));
        log::debug!("fetching detail for {name}");
        let detail: DetailDto = self.get_json(&url).await?;
        Ok(detail.into_detail())
    }
}
