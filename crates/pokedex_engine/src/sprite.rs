use crate::catalog::CatalogSettings;
use crate::palette::{dominant_color, Rgb8};
use crate::types::{map_reqwest_error, CatalogError};

/// Size-reduction factor for the palette pass; sprites are small, a fifth of
/// the pixels is plenty to pick a theme color from.
const PALETTE_SCALE: f32 = 0.23;

/// A downloaded sprite: the encoded bytes as served (for the image widget)
/// plus the representative color extracted from them.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub bytes: Vec<u8>,
    pub dominant: Rgb8,
}

#[derive(Debug, Clone)]
pub struct SpriteFetcher {
    client: reqwest::Client,
}

impl SpriteFetcher {
    pub fn new(settings: &CatalogSettings) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| CatalogError::Network(err.to_string()))?;
        Ok(Self { client })
    }

    /// Download and decode one sprite, then run the palette pass on it.
    pub async fn fetch(&self, url: &str) -> Result<Sprite, CatalogError> {
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

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let image = image::load_from_memory(&bytes)
            .map_err(|err| CatalogError::Decode(err.to_string()))?;
        let dominant = dominant_color(&image, PALETTE_SCALE);

        Ok(Sprite {
            bytes: bytes.to_vec(),
            dominant,
        })
    }
}
