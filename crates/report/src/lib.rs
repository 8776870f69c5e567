//! Count sheet rendering: xlsx layout, report header and download filename.

pub mod error;
pub mod filename;
pub mod header;
pub mod workbook;

pub use error::ReportError;
pub use filename::derive_filename;
pub use header::{ReportHeader, ShiftType};
pub use workbook::{CONTENT_TYPE, SHEET_NAME, render_workbook};
