use eframe::egui;

use crate::controller::entry_form::{DraftField, EntryForm};

/// Paints the new-item form. Returns true when the user asked to submit.
pub fn show(ui: &mut egui::Ui, form: &mut EntryForm) -> bool {
    let submitting = form.is_submitting();
    let mut submit_requested = false;

    ui.horizontal_wrapped(|ui| {
        for field in DraftField::ALL {
            let width = match field {
                DraftField::Name | DraftField::Category => 200.0,
                DraftField::Price | DraftField::Quantity => 90.0,
            };
            let response = ui.add_enabled(
                !submitting,
                egui::TextEdit::singleline(form.draft.field_mut(field))
                    .hint_text(field.placeholder())
                    .desired_width(width),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit_requested = true;
            }
        }

        let label = if submitting { "Adding..." } else { "Add Cookie" };
        if ui.add_enabled(!submitting, egui::Button::new(label)).clicked() {
            submit_requested = true;
        }
    });

    if let Some(message) = form.validation_message() {
        ui.colored_label(egui::Color32::from_rgb(220, 80, 80), message);
    }

    submit_requested
}
