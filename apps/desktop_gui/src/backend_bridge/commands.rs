//! Backend commands queued from UI to backend worker.

use catalog_client::ItemQuery;
use shared::domain::{ItemId, NewItem};

#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    FetchItems { generation: u64, query: ItemQuery },
    CreateItem { payload: NewItem },
    DeleteItem { item_id: ItemId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::FetchItems { query, .. } => query.label(),
            BackendCommand::CreateItem { .. } => "create_item",
            BackendCommand::DeleteItem { .. } => "delete_item",
        }
    }
}
