use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use shared::{
    domain::{Item, ItemId, NewItem},
    protocol::{
        item_path, CategoryQuery, ADD_ITEM_PATH, LIST_ALL_PATH, LIST_BY_CATEGORY_PATH,
        LIST_SORTED_BY_PRICE_PATH,
    },
};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("invalid catalog service url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("catalog service unreachable: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("catalog service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed catalog service response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Which listing to request from the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemQuery {
    All,
    ByCategory(String),
    SortedByPrice,
}

impl ItemQuery {
    pub fn label(&self) -> &'static str {
        match self {
            ItemQuery::All => "list_all_items",
            ItemQuery::ByCategory(_) => "list_items_by_category",
            ItemQuery::SortedByPrice => "list_items_sorted_by_price",
        }
    }
}

/// Operations the desktop app needs from the cookie service.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Any 2xx counts as created. The echoed item is only present when the
    /// service returned one that decodes.
    async fn create_item(&self, payload: NewItem) -> Result<Option<Item>, RemoteError>;
    async fn list_all_items(&self) -> Result<Vec<Item>, RemoteError>;
    async fn list_items_by_category(&self, category: &str) -> Result<Vec<Item>, RemoteError>;
    /// Ascending by price; ties keep server order.
    async fn list_items_sorted_by_price(&self) -> Result<Vec<Item>, RemoteError>;
    async fn delete_item(&self, item_id: ItemId) -> Result<(), RemoteError>;

    async fn list_items(&self, query: &ItemQuery) -> Result<Vec<Item>, RemoteError> {
        match query {
            ItemQuery::All => self.list_all_items().await,
            ItemQuery::ByCategory(category) => self.list_items_by_category(category).await,
            ItemQuery::SortedByPrice => self.list_items_sorted_by_price().await,
        }
    }
}

pub struct HttpCatalogClient {
    http: Client,
    base_url: Url,
}

impl HttpCatalogClient {
    pub fn new(base_url: &str) -> Result<Self, RemoteError> {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: &str) -> Result<Self, RemoteError> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized).map_err(|source| RemoteError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, RemoteError> {
        self.base_url
            .join(path)
            .map_err(|source| RemoteError::InvalidBaseUrl {
                url: format!("{}{path}", self.base_url),
                source,
            })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, RemoteError> {
        let response = request.send().await.map_err(RemoteError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn fetch_items(&self, request: RequestBuilder) -> Result<Vec<Item>, RemoteError> {
        let records: Vec<Value> = self
            .send(request)
            .await?
            .json()
            .await
            .map_err(RemoteError::Decode)?;
        Ok(decode_listing(records))
    }
}

/// Decodes each record on its own so one bad entry never sinks the listing.
fn decode_listing(records: Vec<Value>) -> Vec<Item> {
    let total = records.len();
    let items: Vec<Item> = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Item>(record) {
            Ok(item) if item.is_displayable() => Some(item),
            Ok(item) => {
                warn!(item_id = %item.id, "dropping incomplete catalog item");
                None
            }
            Err(err) => {
                warn!(%err, "dropping undecodable catalog item");
                None
            }
        })
        .collect();
    if items.len() != total {
        warn!(
            dropped = total - items.len(),
            kept = items.len(),
            "catalog response contained incomplete items"
        );
    }
    items
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn create_item(&self, payload: NewItem) -> Result<Option<Item>, RemoteError> {
        info!(name = %payload.name, category = %payload.category, "creating catalog item");
        let request = self.http.post(self.endpoint(ADD_ITEM_PATH)?).json(&payload);
        let response = self.send(request).await?;
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => {
                warn!(%err, "item created but response body could not be read");
                return Ok(None);
            }
        };
        match serde_json::from_slice::<Item>(&body) {
            Ok(item) => Ok(Some(item)),
            Err(err) => {
                debug!(%err, "item created without a decodable echo");
                Ok(None)
            }
        }
    }

    async fn list_all_items(&self) -> Result<Vec<Item>, RemoteError> {
        info!("listing all catalog items");
        let request = self.http.get(self.endpoint(LIST_ALL_PATH)?);
        self.fetch_items(request).await
    }

    async fn list_items_by_category(&self, category: &str) -> Result<Vec<Item>, RemoteError> {
        info!(%category, "listing catalog items by category");
        let request = self
            .http
            .get(self.endpoint(LIST_BY_CATEGORY_PATH)?)
            .query(&CategoryQuery {
                flavor: category.to_string(),
            });
        self.fetch_items(request).await
    }

    async fn list_items_sorted_by_price(&self) -> Result<Vec<Item>, RemoteError> {
        info!("listing catalog items sorted by price");
        let request = self.http.get(self.endpoint(LIST_SORTED_BY_PRICE_PATH)?);
        self.fetch_items(request).await
    }

    async fn delete_item(&self, item_id: ItemId) -> Result<(), RemoteError> {
        info!(%item_id, "deleting catalog item");
        let request = self.http.delete(self.endpoint(&item_path(item_id))?);
        self.send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
