/// Failure surface of the remote catalog and sprite fetches.
///
/// The UI collapses every variant to its display string; the variants exist
/// so tests can assert on the failure class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> CatalogError {
    if err.is_timeout() {
        return CatalogError::Timeout;
    }
    if err.is_decode() {
        return CatalogError::Decode(err.to_string());
    }
    CatalogError::Network(err.to_string())
}
