//! Filter selection state machine and the items/loading/error triple it drives.

use catalog_client::{ItemQuery, RemoteError};
use shared::domain::Item;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch cookies";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    ByCategory,
    SortedByPrice,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [
        FilterMode::All,
        FilterMode::ByCategory,
        FilterMode::SortedByPrice,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All Cookies",
            FilterMode::ByCategory => "Filter by Flavor",
            FilterMode::SortedByPrice => "Sort by Price",
        }
    }
}

/// A retrieval the controller wants issued, tagged with its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshRequest {
    pub generation: u64,
    pub query: ItemQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    Failed,
    Stale,
}

#[derive(Debug, Default)]
pub struct ViewState {
    filter_mode: FilterMode,
    category_text: String,
    items: Vec<Item>,
    loading: bool,
    error: Option<String>,
    latest_generation: u64,
}

impl ViewState {
    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn category_text(&self) -> &str {
        &self.category_text
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switches filter mode. Leaving `ByCategory` discards the category text.
    pub fn select_filter(&mut self, mode: FilterMode) -> Option<RefreshRequest> {
        if mode == self.filter_mode {
            return None;
        }
        self.filter_mode = mode;
        if mode != FilterMode::ByCategory {
            self.category_text.clear();
        }
        self.begin_refresh()
    }

    /// Only meaningful while filtering by category; ignored otherwise.
    pub fn set_category_text(&mut self, text: impl Into<String>) -> Option<RefreshRequest> {
        if self.filter_mode != FilterMode::ByCategory {
            return None;
        }
        let text = text.into();
        if text == self.category_text {
            return None;
        }
        self.category_text = text;
        self.begin_refresh()
    }

    /// Starts the refresh protocol for the current filter. Returns `None` when
    /// no retrieval applies (category filter with empty text); the current
    /// items then stay on screen untouched.
    pub fn begin_refresh(&mut self) -> Option<RefreshRequest> {
        self.error = None;
        let query = match self.filter_mode {
            FilterMode::All => ItemQuery::All,
            FilterMode::SortedByPrice => ItemQuery::SortedByPrice,
            FilterMode::ByCategory => {
                let category = self.category_text.trim();
                if category.is_empty() {
                    self.loading = false;
                    // Supersede anything still in flight for the previous filter.
                    self.latest_generation += 1;
                    return None;
                }
                ItemQuery::ByCategory(category.to_string())
            }
        };

        self.latest_generation += 1;
        self.loading = true;
        Some(RefreshRequest {
            generation: self.latest_generation,
            query,
        })
    }

    /// Applies a finished retrieval. Results from anything but the most
    /// recently issued refresh are dropped.
    pub fn apply_refresh(
        &mut self,
        generation: u64,
        result: Result<Vec<Item>, RemoteError>,
    ) -> RefreshOutcome {
        if generation != self.latest_generation {
            tracing::debug!(
                generation,
                latest = self.latest_generation,
                "discarding stale catalog response"
            );
            return RefreshOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                RefreshOutcome::Applied
            }
            Err(_) => {
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
                RefreshOutcome::Failed
            }
        }
    }

    /// Undoes the loading flag of a refresh that never reached the backend.
    pub fn abandon_refresh(&mut self, generation: u64) {
        if generation == self.latest_generation {
            self.loading = false;
        }
    }

    /// Surfaces a failed mutation; items are left as they are.
    pub fn record_failure(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}

#[cfg(test)]
#[path = "tests/view_state_tests.rs"]
mod tests;
