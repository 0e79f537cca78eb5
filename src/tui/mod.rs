//! Terminal User Interface module
//!
//! The interactive dashboard: category summary cards, recent expense
//! history, and a modal add-expense dialog, rendered with ratatui.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

pub use app::App;
pub use terminal::run_tui;
