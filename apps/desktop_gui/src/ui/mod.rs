//! UI layer for the desktop app: app shell, forms, task list, and theme handling.

pub mod app;

pub use app::TaskboardApp;
