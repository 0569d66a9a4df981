//! Runtime bridge between UI command queue and backend event intake.

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use catalog_client::CatalogApi;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use tracing::{debug, error, info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext, UiEvent};

/// Spawns the backend worker thread. It runs until every command sender is dropped.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    api: Arc<dyn CatalogApi>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                send_event(
                    &ui_tx,
                    UiEvent::Error(UiError::new(
                        UiErrorCategory::Unknown,
                        UiErrorContext::BackendStartup,
                        format!("backend worker startup failure: failed to build runtime: {err}"),
                    )),
                );
                error!("failed to build backend runtime: {err}");
                return;
            }
        };
        info!("backend worker ready");

        while let Ok(cmd) = cmd_rx.recv() {
            debug!(command = cmd.name(), "backend worker picked up command");
            runtime.spawn(execute(Arc::clone(&api), cmd, ui_tx.clone()));
        }

        info!("command queue closed; backend worker stopping");
    })
}

async fn execute(api: Arc<dyn CatalogApi>, cmd: BackendCommand, ui_tx: Sender<UiEvent>) {
    let event = match cmd {
        BackendCommand::FetchItems { generation, query } => {
            let result = api.list_items(&query).await;
            match &result {
                Ok(items) => debug!(generation, count = items.len(), "catalog items fetched"),
                Err(err) => warn!(generation, operation = query.label(), %err, "catalog fetch failed"),
            }
            UiEvent::ItemsFetched { generation, result }
        }
        BackendCommand::CreateItem { payload } => match api.create_item(payload).await {
            Ok(created) => UiEvent::ItemCreated(created),
            Err(err) => {
                warn!(%err, "catalog item creation failed");
                UiEvent::ItemCreateFailed(err)
            }
        },
        BackendCommand::DeleteItem { item_id } => match api.delete_item(item_id).await {
            Ok(()) => UiEvent::ItemDeleted(item_id),
            Err(err) => {
                warn!(%item_id, %err, "catalog item deletion failed");
                UiEvent::ItemDeleteFailed { item_id, error: err }
            }
        },
    };
    send_event(&ui_tx, event);
}

fn send_event(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    match ui_tx.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => warn!("ui event queue is full; dropping backend event"),
        Err(TrySendError::Disconnected(_)) => debug!("ui event receiver gone; dropping backend event"),
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
