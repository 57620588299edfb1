//! Display formatting for terminal output
//!
//! Provides utilities for formatting the charge catalog, evidence schemas and
//! configuration for the command line.

pub mod catalog;
pub mod config;

pub use catalog::{format_charge_catalog, format_evidence_fields};
pub use config::format_config;
