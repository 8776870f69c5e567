use thiserror::Error;

/// Failure while producing a count sheet.
///
/// None of these are caused by count fragments; those never fail a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid dateShift {value:?}, expected MM/DD/YYYY: {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },

    #[error("invalid timeCounted {value:?}, expected 24h HH:MM: {source}")]
    InvalidTime {
        value: String,
        source: chrono::ParseError,
    },

    #[error("spreadsheet writer failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
