use serde::Deserialize;

/// Shift the count was taken on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
pub enum ShiftType {
    #[serde(rename = "Day Shift")]
    Day,
    #[serde(rename = "Night Shift")]
    Night,
}

impl ShiftType {
    /// Label written into the sheet.
    pub fn label(self) -> &'static str {
        match self {
            ShiftType::Day => "Day Shift",
            ShiftType::Night => "Night Shift",
        }
    }

    /// Suffix used in the download filename.
    pub fn code(self) -> &'static str {
        match self {
            ShiftType::Day => "DS",
            ShiftType::Night => "NS",
        }
    }
}

/// Metadata printed above the count table.
///
/// `date_shift` and `time_counted` are kept as submitted; they are only
/// interpreted when the filename is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    pub date_shift: String,
    pub time_counted: String,
    pub shift: ShiftType,
}
