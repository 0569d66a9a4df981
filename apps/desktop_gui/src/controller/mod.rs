//! Controller layer: UI events, view-state transitions, form handling, and command orchestration.

pub mod catalog_controller;
pub mod entry_form;
pub mod events;
pub mod orchestration;
pub mod view_state;
