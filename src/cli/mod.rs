//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report session.

pub mod catalog;
pub mod generate;

pub use catalog::{handle_charges_command, handle_fields_command};
pub use generate::{handle_generate_command, GenerateArgs};
