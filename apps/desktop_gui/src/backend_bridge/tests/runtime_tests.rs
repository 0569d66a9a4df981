use super::*;
use std::time::Duration;

use crossbeam_channel::bounded;

use crate::controller::catalog_controller::{CatalogController, CREATE_FAILED_MESSAGE};
use crate::controller::view_state::{FilterMode, FETCH_FAILED_MESSAGE};
use crate::test_support::{item, FakeCatalog};
use crate::ui::result_view::ResultView;

const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

struct Harness {
    api: Arc<FakeCatalog>,
    controller: CatalogController,
    ui_rx: Receiver<UiEvent>,
    worker: JoinHandle<()>,
}

impl Harness {
    fn start(api: FakeCatalog) -> Self {
        let api = Arc::new(api);
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        let worker = launch(cmd_rx, ui_tx, api.clone());
        Self {
            api,
            controller: CatalogController::new(cmd_tx),
            ui_rx,
            worker,
        }
    }

    /// Feeds the next backend event into the controller, as one UI frame would.
    fn pump(&mut self) {
        let event = self
            .ui_rx
            .recv_timeout(EVENT_TIMEOUT)
            .expect("backend event");
        self.controller.handle_event(event);
    }

    fn view(&self) -> ResultView {
        ResultView::from_view(self.controller.view())
    }

    fn shutdown(self) -> Arc<FakeCatalog> {
        drop(self.controller);
        self.worker.join().expect("worker thread");
        self.api
    }
}

#[test]
fn mount_then_create_refreshes_and_renders_new_entry() {
    let mut harness = Harness::start(FakeCatalog::default());

    harness.controller.mount();
    assert_eq!(harness.view(), ResultView::Loading);
    harness.pump();
    assert_eq!(harness.view(), ResultView::Empty);

    {
        let draft = &mut harness.controller.form_mut().draft;
        draft.name = "New Cookie".to_string();
        draft.category = "Chocolate".to_string();
        draft.price = "25".to_string();
        draft.quantity = "15".to_string();
    }
    harness.controller.submit_form();
    harness.pump();
    assert!(harness.controller.form_mut().draft == Default::default());
    harness.pump();

    let ResultView::Cards(cards) = harness.view() else {
        panic!("expected cards");
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "New Cookie");
    assert_eq!(cards[0].category, "Chocolate");
    assert_eq!(cards[0].price, "$25");
    assert_eq!(cards[0].quantity, "15");

    let api = harness.shutdown();
    assert_eq!(
        api.calls(),
        vec!["list_all_items", "create_item", "list_all_items"]
    );
    let created = api.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].unit_price, 25.0);
    assert_eq!(created[0].quantity_available, 15);
}

#[test]
fn sorted_filter_calls_sorted_listing_once() {
    let mut harness = Harness::start(FakeCatalog::with_items(vec![
        item(1, "Choco Chip", "Chocolate", 50.0, 20),
        item(2, "Vanilla Delight", "Vanilla", 40.0, 10),
    ]));
    harness.controller.mount();
    harness.pump();

    harness.controller.select_filter(FilterMode::SortedByPrice);
    harness.pump();

    let names: Vec<String> = harness
        .controller
        .view()
        .items()
        .iter()
        .map(|item| item.name.clone())
        .collect();
    assert_eq!(names, vec!["Vanilla Delight", "Choco Chip"]);

    let api = harness.shutdown();
    let sorted_calls = api
        .calls()
        .iter()
        .filter(|call| call.as_str() == "list_items_sorted_by_price")
        .count();
    assert_eq!(sorted_calls, 1);
}

#[test]
fn category_filter_without_text_makes_no_call() {
    let mut harness = Harness::start(FakeCatalog::with_items(vec![item(
        1,
        "Choco Chip",
        "Chocolate",
        50.0,
        20,
    )]));
    harness.controller.mount();
    harness.pump();

    harness.controller.select_filter(FilterMode::ByCategory);
    assert!(harness.ui_rx.recv_timeout(Duration::from_millis(200)).is_err());
    assert_eq!(harness.controller.view().items().len(), 1);

    harness.controller.set_category_text("Chocolate");
    harness.pump();
    assert_eq!(harness.controller.view().items().len(), 1);

    let api = harness.shutdown();
    assert_eq!(
        api.calls(),
        vec!["list_all_items", "list_items_by_category:Chocolate"]
    );
}

#[test]
fn failed_fetch_shows_generic_error() {
    let mut harness = Harness::start(FakeCatalog::failing_list());
    harness.controller.mount();
    harness.pump();

    assert_eq!(
        harness.view(),
        ResultView::Error(FETCH_FAILED_MESSAGE.to_string())
    );
    harness.shutdown();
}

#[test]
fn failed_create_keeps_draft_and_reports_error() {
    let mut harness = Harness::start(FakeCatalog::failing_create());
    harness.controller.mount();
    harness.pump();

    {
        let draft = &mut harness.controller.form_mut().draft;
        draft.name = "Test Cookie".to_string();
        draft.category = "Butter".to_string();
        draft.price = "30".to_string();
        draft.quantity = "10".to_string();
    }
    harness.controller.submit_form();
    harness.pump();

    assert_eq!(harness.controller.form_mut().draft.name, "Test Cookie");
    assert_eq!(
        harness.view(),
        ResultView::Error(CREATE_FAILED_MESSAGE.to_string())
    );

    let api = harness.shutdown();
    assert_eq!(api.calls(), vec!["list_all_items", "create_item"]);
    assert!(api.created().is_empty());
}

#[test]
fn delete_removes_item_and_refreshes() {
    let mut harness = Harness::start(FakeCatalog::with_items(vec![
        item(1, "Choco Chip", "Chocolate", 50.0, 20),
        item(2, "Vanilla Delight", "Vanilla", 40.0, 10),
    ]));
    harness.controller.mount();
    harness.pump();

    harness.controller.delete_item(shared::domain::ItemId(1));
    harness.pump();
    harness.pump();

    assert_eq!(harness.controller.view().items().len(), 1);
    assert_eq!(harness.controller.view().items()[0].name, "Vanilla Delight");
    harness.shutdown();
}
