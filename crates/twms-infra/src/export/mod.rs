//! Export of the truck collection to CSV and plain-text report files

mod csv_export;
mod report;

pub use csv_export::{export_csv, write_csv, CSV_HEADER};
pub use report::{generate_report, write_report};
