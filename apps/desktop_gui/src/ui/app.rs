use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::catalog_controller::CatalogController;
use crate::controller::events::{UiErrorCategory, UiEvent};
use crate::controller::view_state::FilterMode;
use crate::ui::{entry_form_panel, result_view};

const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);
const IDLE_REPAINT_INTERVAL: Duration = Duration::from_millis(500);

fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Connection",
        UiErrorCategory::Unknown => "Error",
    }
}

pub struct DesktopGuiApp {
    controller: CatalogController,
    ui_rx: Receiver<UiEvent>,
    api_base_url: String,
}

impl DesktopGuiApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        api_base_url: impl Into<String>,
    ) -> Self {
        let mut controller = CatalogController::new(cmd_tx);
        controller.mount();
        Self {
            controller,
            ui_rx,
            api_base_url: api_base_url.into(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.controller.handle_event(event);
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🍪 Cookie Store");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("Management System");
                });
            });
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.controller.status());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(&self.api_base_url);
                });
            });
        });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.controller.status_banner().cloned() else {
            return;
        };

        egui::Frame::NONE
            .fill(egui::Color32::from_rgb(111, 53, 53))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{}: {}",
                            err_label(banner.category()),
                            banner.message()
                        ))
                        .color(egui::Color32::WHITE),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.controller.dismiss_status_banner();
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn show_filters(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("View Options:");

            let current = self.controller.view().filter_mode();
            let mut selected = current;
            egui::ComboBox::from_id_salt("filter_mode")
                .selected_text(selected.label())
                .show_ui(ui, |ui| {
                    for mode in FilterMode::ALL {
                        ui.selectable_value(&mut selected, mode, mode.label());
                    }
                });
            if selected != current {
                self.controller.select_filter(selected);
            }

            if self.controller.view().filter_mode() == FilterMode::ByCategory {
                let mut category = self.controller.view().category_text().to_string();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut category)
                        .hint_text("Enter flavor (e.g., Chocolate, Vanilla)")
                        .desired_width(260.0),
                );
                if response.changed() {
                    self.controller.set_category_text(category);
                }
            }
        });
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_header(ctx);
        self.show_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Cookie Store Management");
            ui.add_space(8.0);
            self.show_status_banner(ui);

            if entry_form_panel::show(ui, self.controller.form_mut()) {
                self.controller.submit_form();
            }
            ui.separator();

            self.show_filters(ui);
            ui.add_space(8.0);

            let view = result_view::ResultView::from_view(self.controller.view());
            if let Some(item_id) = result_view::show(ui, &view) {
                self.controller.delete_item(item_id);
            }
        });

        // Backend events only land on the next frame.
        let interval = if self.controller.has_pending_work() {
            PENDING_REPAINT_INTERVAL
        } else {
            IDLE_REPAINT_INTERVAL
        };
        ctx.request_repaint_after(interval);
    }
}
