use chrono::{NaiveDate, NaiveTime};

use crate::error::ReportError;
use crate::header::ReportHeader;

/// `PMC_<MON>_<DD>_<YYYY>_<hh><mm>_<AM|PM>_<DS|NS>.xlsx`
///
/// `date_shift` must be `MM/DD/YYYY` and `time_counted` a 24h `HH:MM`; the
/// time is rendered on a 12-hour clock.
pub fn derive_filename(header: &ReportHeader) -> Result<String, ReportError> {
    let date = NaiveDate::parse_from_str(header.date_shift.trim(), "%m/%d/%Y").map_err(|source| {
        ReportError::InvalidDate {
            value: header.date_shift.clone(),
            source,
        }
    })?;
    let time = NaiveTime::parse_from_str(header.time_counted.trim(), "%H:%M").map_err(|source| {
        ReportError::InvalidTime {
            value: header.time_counted.clone(),
            source,
        }
    })?;

    Ok(format!(
        "PMC_{}_{}_{}.xlsx",
        date.format("%b_%d_%Y").to_string().to_uppercase(),
        time.format("%I%M_%p"),
        header.shift.code(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::ShiftType;

    fn header(date: &str, time: &str, shift: ShiftType) -> ReportHeader {
        ReportHeader {
            date_shift: date.to_string(),
            time_counted: time.to_string(),
            shift,
        }
    }

    #[test]
    fn afternoon_night_shift() {
        let name = derive_filename(&header("03/15/2024", "14:30", ShiftType::Night)).unwrap();
        assert_eq!(name, "PMC_MAR_15_2024_0230_PM_NS.xlsx");
    }

    #[test]
    fn morning_day_shift() {
        let name = derive_filename(&header("12/01/2023", "09:05", ShiftType::Day)).unwrap();
        assert_eq!(name, "PMC_DEC_01_2023_0905_AM_DS.xlsx");
    }

    #[test]
    fn midnight_and_noon_render_as_twelve() {
        let midnight = derive_filename(&header("01/02/2024", "00:15", ShiftType::Night)).unwrap();
        assert_eq!(midnight, "PMC_JAN_02_2024_1215_AM_NS.xlsx");

        let noon = derive_filename(&header("01/02/2024", "12:00", ShiftType::Day)).unwrap();
        assert_eq!(noon, "PMC_JAN_02_2024_1200_PM_DS.xlsx");
    }

    #[test]
    fn unpadded_date_is_padded() {
        let name = derive_filename(&header("3/5/2024", "7:00", ShiftType::Day)).unwrap();
        assert_eq!(name, "PMC_MAR_05_2024_0700_AM_DS.xlsx");
    }

    #[test]
    fn malformed_date_is_rejected() {
        for date in ["2024-03-15", "13/01/2024", "02/30/2024", ""] {
            let err = derive_filename(&header(date, "14:30", ShiftType::Day)).unwrap_err();
            assert!(matches!(err, ReportError::InvalidDate { .. }), "{date}");
        }
    }

    #[test]
    fn malformed_time_is_rejected() {
        for time in ["2:30 PM", "25:00", "14", ""] {
            let err = derive_filename(&header("03/15/2024", time, ShiftType::Day)).unwrap_err();
            assert!(matches!(err, ReportError::InvalidTime { .. }), "{time}");
        }
    }
}
