//! examgrade-report — Secondary renderers for result collections.
//!
//! The canonical artifact is the JSON file written by
//! `ResultCollection::save_json`; these renderers produce the human-facing
//! grade sheets derived from it.

pub mod csv;
pub mod html;

pub use csv::write_csv_report;
pub use html::write_html_report;
