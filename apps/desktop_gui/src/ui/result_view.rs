//! Item list: render model derived from (loading, error, items) and its painting.

use eframe::egui;
use shared::domain::{Item, ItemId};

use crate::controller::view_state::ViewState;

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No cookies available";

#[derive(Debug, Clone, PartialEq)]
pub struct ItemCard {
    pub item_id: ItemId,
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
}

impl ItemCard {
    fn from_item(item: &Item) -> Self {
        Self {
            item_id: item.id,
            name: item.name.clone(),
            category: item.category.clone(),
            price: format_price(item.unit_price),
            quantity: item.quantity_available.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Loading,
    Error(String),
    Empty,
    Cards(Vec<ItemCard>),
}

impl ResultView {
    /// First match wins: loading, then error, then empty, then cards.
    pub fn from_parts(loading: bool, error: Option<&str>, items: &[Item]) -> Self {
        if loading {
            return ResultView::Loading;
        }
        if let Some(error) = error {
            return ResultView::Error(error.to_string());
        }
        if items.is_empty() {
            return ResultView::Empty;
        }
        ResultView::Cards(items.iter().map(ItemCard::from_item).collect())
    }

    pub fn from_view(view: &ViewState) -> Self {
        Self::from_parts(view.is_loading(), view.error(), view.items())
    }
}

/// `50.0` renders as `$50`, `12.5` as `$12.5`.
pub fn format_price(unit_price: f64) -> String {
    format!("${unit_price}")
}

/// Paints the list and reports which card's delete action was clicked, if any.
pub fn show(ui: &mut egui::Ui, view: &ResultView) -> Option<ItemId> {
    match view {
        ResultView::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(LOADING_TEXT);
            });
            None
        }
        ResultView::Error(message) => {
            ui.colored_label(egui::Color32::from_rgb(220, 80, 80), message);
            None
        }
        ResultView::Empty => {
            ui.label(EMPTY_TEXT);
            None
        }
        ResultView::Cards(cards) => {
            let mut delete_clicked = None;
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for card in cards {
                        if show_card(ui, card) {
                            delete_clicked = Some(card.item_id);
                        }
                    }
                });
            });
            delete_clicked
        }
    }
}

fn show_card(ui: &mut egui::Ui, card: &ItemCard) -> bool {
    egui::Frame::group(ui.style())
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_min_width(180.0);
            ui.vertical(|ui| {
                ui.heading(&card.name);
                ui.label(format!("Flavor: {}", card.category));
                ui.label(format!("Price: {}", card.price));
                ui.label(format!("Quantity: {}", card.quantity));
                ui.small_button("Delete").clicked()
            })
            .inner
        })
        .inner
}
