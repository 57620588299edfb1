//! crime-report - gang and family crime report generator
//!
//! This library provides the report model and text renderer behind the
//! `crime-report` binary. A report is filled in through a form (terminal UI or
//! command-line flags) and rendered into two blocks of text: a one-line
//! header and a structured body listing evidence and charges.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Report category, evidence schemas, charge catalog, report state
//! - `render`: Pure text rendering of a report state
//! - `session`: Form events applied to one report
//! - `clock`: "Now" in the report time zone
//! - `config`: Configuration and path management
//! - `export`: Saving reports and snapshots to disk
//! - `clipboard`: Copying report parts
//! - `cli`, `display`, `tui`: Front ends
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use crime_report::clock::ZonedClock;
//! use crime_report::session::{FormEvent, ReportSession, SessionOutcome};
//!
//! let mut session = ReportSession::new(ZonedClock::default());
//! session.handle(FormEvent::SubjectNameChanged("Ballas".into()));
//! if let SessionOutcome::Generated(report) = session.handle(FormEvent::Generate) {
//!     println!("{}", report.full_report);
//! }
//! ```

pub mod cli;
pub mod clipboard;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod render;
pub mod session;
pub mod tui;

pub use error::{ReportError, ReportResult};
