//! UI layer for desktop GUI: app shell, new-item form panel, and result list.

pub mod app;
pub mod entry_form_panel;
pub mod result_view;

pub use app::DesktopGuiApp;
