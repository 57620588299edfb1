//! Core data models for crime-report
//!
//! This module contains the data structures behind the report form: the
//! category, the evidence schema, the charge catalog, and the report state.

pub mod category;
pub mod charges;
pub mod evidence;
pub mod report;

pub use category::ReportCategory;
pub use charges::{ChargeCatalog, ChargeSelection, ChargeTier, ALL_CHARGES, TOP_CHARGES};
pub use evidence::{EvidenceField, EvidenceKey};
pub use report::{GeneratedReport, ReportInputs, ReportState};
