//! REST surface of the remote cookie service.

use serde::{Deserialize, Serialize};

use crate::domain::ItemId;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/cookies";

pub const ADD_ITEM_PATH: &str = "addCookie";
pub const LIST_ALL_PATH: &str = "allCookies";
pub const LIST_BY_CATEGORY_PATH: &str = "byFlavor";
pub const LIST_SORTED_BY_PRICE_PATH: &str = "sortedByPrice";

/// Query string of the by-category listing (`?flavor=...`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryQuery {
    pub flavor: String,
}

/// Path segment addressing a single item for deletion.
pub fn item_path(item_id: ItemId) -> String {
    item_id.0.to_string()
}
