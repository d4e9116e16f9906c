//! DOM-free view controller for wetator HTML test reports.
//!
//! The controller keeps the report's UI state (collapsible sections, the
//! overview table pair, the successful-row filter and the preview overlay)
//! in an explicit [`model::ViewState`] and answers every operation with a
//! list of [`wet_report_protocol::DomCommand`]s for the host to apply.

pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod query;

pub use config::ReportConfig;
pub use controller::ReportController;
pub use error::ReportError;
