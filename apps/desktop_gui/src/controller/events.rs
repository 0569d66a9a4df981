//! UI/backend events and error modeling for desktop GUI controller.

use catalog_client::RemoteError;
use shared::domain::{Item, ItemId};

#[derive(Debug)]
pub enum UiEvent {
    ItemsFetched {
        generation: u64,
        result: Result<Vec<Item>, RemoteError>,
    },
    ItemCreated(Option<Item>),
    ItemCreateFailed(RemoteError),
    ItemDeleted(ItemId),
    ItemDeleteFailed {
        item_id: ItemId,
        error: RemoteError,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    CommandQueue,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(
        category: UiErrorCategory,
        context: UiErrorContext,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            context,
            message: message.into(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
