use async_trait::async_trait;

use crate::error::AppError;
use crate::models::document::IndexedDocument;

/// Source of the search index, enabling mock testing.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait IndexLoader {
    /// Fetch and decode the whole index.
    async fn fetch(&self) -> Result<Vec<IndexedDocument>, AppError>;
}

/// Fetches the index with a single `GET` from the browser.
///
/// No timeout is applied; a request that never settles leaves the index empty.
#[cfg(feature = "hydrate")]
pub struct HttpIndexLoader {
    url: String,
}

#[cfg(feature = "hydrate")]
impl HttpIndexLoader {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl IndexLoader for HttpIndexLoader {
    async fn fetch(&self) -> Result<Vec<IndexedDocument>, AppError> {
        let response = gloo_net::http::Request::get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::Http(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        parse_index(&body)
    }
}

/// Decode the JSON array served as the search index.
pub fn parse_index(body: &str) -> Result<Vec<IndexedDocument>, AppError> {
    Ok(serde_json::from_str(body)?)
}
