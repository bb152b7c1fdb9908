//! Presenter and driver program for the ride-sharing demonstration.
//!
//! The crate is organized into three modules:
//!
//! - [`report`]: textual report rendering (all stdout text lives here)
//! - [`metrics`]: run summary extraction from a built scenario
//! - [`export`]: summary export to JSON/CSV

pub mod export;
pub mod metrics;
pub mod report;

pub use export::{export_to_csv, export_to_json};
pub use metrics::{PartyTotal, RunSummary};
pub use report::render_full_report;
