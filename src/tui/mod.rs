//! Terminal User Interface module
//!
//! This module provides the interactive report form using ratatui: a form
//! view, an output view with the generated text, and dialogs for picking
//! charges, confirming a clear and showing help.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
