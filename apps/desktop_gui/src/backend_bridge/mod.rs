//! Bridge between the UI thread and the worker that talks to the cookie service.

pub mod commands;
pub mod runtime;
