//! In-memory stand-in for the cookie service.

use std::sync::Mutex;

use async_trait::async_trait;
use catalog_client::{CatalogApi, RemoteError};
use shared::domain::{Item, ItemId, NewItem};

#[derive(Default)]
pub struct FakeCatalog {
    items: Mutex<Vec<Item>>,
    calls: Mutex<Vec<String>>,
    created: Mutex<Vec<NewItem>>,
    fail_create: bool,
    fail_list: bool,
}

impl FakeCatalog {
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
            ..Self::default()
        }
    }

    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    pub fn failing_list() -> Self {
        Self {
            fail_list: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn created(&self) -> Vec<NewItem> {
        self.created.lock().expect("created lock").clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().expect("calls lock").push(call.into());
    }

    fn listing(&self) -> Result<Vec<Item>, RemoteError> {
        if self.fail_list {
            return Err(RemoteError::Status {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        Ok(self.items.lock().expect("items lock").clone())
    }
}

pub fn item(id: i64, name: &str, category: &str, unit_price: f64, quantity_available: u32) -> Item {
    Item {
        id: ItemId(id),
        name: name.to_string(),
        category: category.to_string(),
        unit_price,
        quantity_available,
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn create_item(&self, payload: NewItem) -> Result<Option<Item>, RemoteError> {
        self.record("create_item");
        if self.fail_create {
            return Err(RemoteError::Status {
                status: 500,
                body: "Add failed".to_string(),
            });
        }
        self.created.lock().expect("created lock").push(payload.clone());
        let mut items = self.items.lock().expect("items lock");
        let next_id = items.iter().map(|item| item.id.0).max().unwrap_or(0) + 1;
        let created = payload.into_item(ItemId(next_id));
        items.push(created.clone());
        Ok(Some(created))
    }

    async fn list_all_items(&self) -> Result<Vec<Item>, RemoteError> {
        self.record("list_all_items");
        self.listing()
    }

    async fn list_items_by_category(&self, category: &str) -> Result<Vec<Item>, RemoteError> {
        self.record(format!("list_items_by_category:{category}"));
        Ok(self
            .listing()?
            .into_iter()
            .filter(|item| item.category == category)
            .collect())
    }

    async fn list_items_sorted_by_price(&self) -> Result<Vec<Item>, RemoteError> {
        self.record("list_items_sorted_by_price");
        let mut items = self.listing()?;
        items.sort_by(|a, b| a.unit_price.total_cmp(&b.unit_price));
        Ok(items)
    }

    async fn delete_item(&self, item_id: ItemId) -> Result<(), RemoteError> {
        self.record(format!("delete_item:{item_id}"));
        let mut items = self.items.lock().expect("items lock");
        let before = items.len();
        items.retain(|item| item.id != item_id);
        if items.len() == before {
            return Err(RemoteError::Status {
                status: 404,
                body: format!("no cookie with id {item_id}"),
            });
        }
        Ok(())
    }
}
