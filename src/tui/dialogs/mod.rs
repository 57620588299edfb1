//! Dialog modules for the TUI
//!
//! Contains modal dialogs drawn over the form

pub mod charges;
pub mod confirm;
pub mod help;
