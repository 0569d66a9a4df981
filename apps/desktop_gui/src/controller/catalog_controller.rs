//! Composition root of the catalog screen: the only writer of [`ViewState`].

use crossbeam_channel::Sender;
use shared::domain::ItemId;
use tracing::{info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::entry_form::EntryForm;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::view_state::{FilterMode, RefreshOutcome, ViewState};

pub const CREATE_FAILED_MESSAGE: &str = "Failed to add cookie";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete cookie";

pub struct CatalogController {
    cmd_tx: Sender<BackendCommand>,
    view: ViewState,
    form: EntryForm,
    status: String,
    status_banner: Option<UiError>,
    pending_deletes: usize,
}

impl CatalogController {
    pub fn new(cmd_tx: Sender<BackendCommand>) -> Self {
        Self {
            cmd_tx,
            view: ViewState::default(),
            form: EntryForm::default(),
            status: "Starting".to_string(),
            status_banner: None,
            pending_deletes: 0,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn form_mut(&mut self) -> &mut EntryForm {
        &mut self.form
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn status_banner(&self) -> Option<&UiError> {
        self.status_banner.as_ref()
    }

    pub fn dismiss_status_banner(&mut self) {
        self.status_banner = None;
    }

    /// Whether a backend answer is still expected.
    pub fn has_pending_work(&self) -> bool {
        self.view.is_loading() || self.form.is_submitting() || self.pending_deletes > 0
    }

    pub fn mount(&mut self) {
        info!("mounting catalog view");
        self.refresh();
    }

    pub fn select_filter(&mut self, mode: FilterMode) {
        if let Some(request) = self.view.select_filter(mode) {
            self.issue_refresh(request.generation, request.query);
        }
    }

    pub fn set_category_text(&mut self, text: impl Into<String>) {
        if let Some(request) = self.view.set_category_text(text) {
            self.issue_refresh(request.generation, request.query);
        }
    }

    pub fn submit_form(&mut self) {
        let Some(payload) = self.form.begin_submit() else {
            return;
        };
        if !self.dispatch(BackendCommand::CreateItem { payload }) {
            self.form.finish_submit(false);
        }
    }

    pub fn delete_item(&mut self, item_id: ItemId) {
        if self.dispatch(BackendCommand::DeleteItem { item_id }) {
            self.pending_deletes += 1;
        }
    }

    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::ItemsFetched { generation, result } => {
                match self.view.apply_refresh(generation, result) {
                    RefreshOutcome::Applied => {
                        self.status = format!("{} cookies loaded", self.view.items().len());
                    }
                    RefreshOutcome::Failed => {
                        self.status = "Last refresh failed".to_string();
                    }
                    RefreshOutcome::Stale => {}
                }
            }
            UiEvent::ItemCreated(created) => {
                self.form.finish_submit(true);
                self.status = match created {
                    Some(item) => {
                        info!(item_id = %item.id, name = %item.name, "catalog item created");
                        format!("Added {}", item.name)
                    }
                    None => {
                        info!("catalog item created");
                        "Cookie added".to_string()
                    }
                };
                self.refresh();
            }
            UiEvent::ItemCreateFailed(err) => {
                warn!(%err, "keeping draft after failed creation");
                self.form.finish_submit(false);
                self.view.record_failure(CREATE_FAILED_MESSAGE);
            }
            UiEvent::ItemDeleted(item_id) => {
                self.pending_deletes = self.pending_deletes.saturating_sub(1);
                info!(%item_id, "catalog item deleted");
                self.status = format!("Deleted cookie #{item_id}");
                self.refresh();
            }
            UiEvent::ItemDeleteFailed { item_id, error } => {
                self.pending_deletes = self.pending_deletes.saturating_sub(1);
                warn!(%item_id, %error, "catalog item deletion failed");
                self.view.record_failure(DELETE_FAILED_MESSAGE);
            }
            UiEvent::Error(err) => {
                warn!(context = ?err.context(), error = err.message(), "backend reported an error");
                self.status = err.message().to_string();
                self.status_banner = Some(err);
            }
        }
    }

    fn refresh(&mut self) {
        if let Some(request) = self.view.begin_refresh() {
            self.issue_refresh(request.generation, request.query);
        }
    }

    fn issue_refresh(&mut self, generation: u64, query: catalog_client::ItemQuery) {
        if !self.dispatch(BackendCommand::FetchItems { generation, query }) {
            self.view.abandon_refresh(generation);
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand) -> bool {
        match dispatch_backend_command(&self.cmd_tx, cmd) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = err.message(), "failed to queue backend command");
                self.status = err.message().to_string();
                self.status_banner = Some(err);
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/catalog_controller_tests.rs"]
mod tests;
