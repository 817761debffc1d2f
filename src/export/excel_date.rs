// src/export/excel_date.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub(crate) const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Excel serial (days since 1899-12-30, fractional part = time of day).
pub(crate) fn to_excel_serial(dt: DateTime<Utc>) -> f64 {
    naive_datetime_to_excel_serial(&dt.naive_utc())
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let Some(epoch) = NaiveDate::from_ymd_opt(1899, 12, 30).and_then(|d| d.and_hms_opt(0, 0, 0))
    else {
        return 0.0;
    };
    let delta = *dt - epoch;
    delta.num_milliseconds() as f64 / 86_400_000.0
}
