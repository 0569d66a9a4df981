use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ItemId);

/// One catalog entry as returned by the cookie service.
///
/// Field names on the wire follow the service (`cookieName`, `flavor`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(rename = "cookieName")]
    pub name: String,
    #[serde(rename = "flavor")]
    pub category: String,
    #[serde(rename = "price")]
    pub unit_price: f64,
    #[serde(rename = "quantityAvailable")]
    pub quantity_available: u32,
}

impl Item {
    /// Whether every displayed field carries a usable value.
    pub fn is_displayable(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.category.trim().is_empty()
            && self.unit_price.is_finite()
            && self.unit_price > 0.0
            && self.quantity_available > 0
    }
}

/// Creation payload: an [`Item`] without the server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(rename = "cookieName")]
    pub name: String,
    #[serde(rename = "flavor")]
    pub category: String,
    #[serde(rename = "price")]
    pub unit_price: f64,
    #[serde(rename = "quantityAvailable")]
    pub quantity_available: u32,
}

impl NewItem {
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            category: self.category,
            unit_price: self.unit_price,
            quantity_available: self.quantity_available,
        }
    }
}
