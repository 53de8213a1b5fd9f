//! Date math for the trailing dashboard window.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

use crate::{error::Error, model::metrics::MonthBucketDto};

/// The "YYYY-MM" bucket key for a timestamp.
pub fn month_key(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m").to_string()
}

/// Start of the trailing 12-month window: midnight on the first day of the
/// month 11 months before `now`'s month, so the window covers 12 calendar
/// months including the current one.
pub fn trailing_window_start(now: DateTime<Utc>) -> Result<NaiveDateTime, Error> {
    let today = now.date_naive();
    let months_back = 11i32;

    let total = today.year() * 12 + today.month0() as i32 - months_back;
    let year = total.div_euclid(12);
    let month0 = total.rem_euclid(12);

    let first_of_month = NaiveDate::from_ymd_opt(year, month0 as u32 + 1, 1).ok_or_else(|| {
        Error::ParseError(format!(
            "Failed to compute trailing window start from {}",
            today
        ))
    })?;

    first_of_month.and_hms_opt(0, 0, 0).ok_or_else(|| {
        Error::ParseError("Failed to compute midnight of trailing window start".to_string())
    })
}

/// Buckets timestamps by calendar month, ascending by key. Months with no
/// entries are omitted; charting consumers zero-fill client-side.
pub fn bucket_by_month(dates: &[NaiveDateTime]) -> Vec<MonthBucketDto> {
    let mut buckets: BTreeMap<String, i64> = BTreeMap::new();

    for dt in dates {
        *buckets.entry(month_key(*dt)).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(mes, total)| MonthBucketDto { mes, total })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::{bucket_by_month, month_key, trailing_window_start};

    fn at(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    /// Expect zero-padded month keys
    fn test_month_key_format() {
        assert_eq!(month_key(at(2026, 3, 9)), "2026-03");
        assert_eq!(month_key(at(2026, 12, 31)), "2026-12");
    }

    #[test]
    /// Expect the window to start 11 months back on the first of the month
    fn test_trailing_window_start_same_year() {
        let now = Utc.with_ymd_and_hms(2026, 12, 15, 10, 0, 0).unwrap();

        let start = trailing_window_start(now).unwrap();

        assert_eq!(start, at(2026, 1, 1).date().and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    /// Expect the window start to cross the year boundary
    fn test_trailing_window_start_crosses_year() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 10, 0, 0).unwrap();

        let start = trailing_window_start(now).unwrap();

        assert_eq!(start, at(2025, 9, 1).date().and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    /// Expect months with no activity to be omitted, keys ascending
    fn test_bucket_by_month_omits_empty() {
        let dates = vec![at(2026, 1, 3), at(2026, 1, 20), at(2026, 4, 7)];

        let buckets = bucket_by_month(&dates);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].mes, "2026-01");
        assert_eq!(buckets[0].total, 2);
        assert_eq!(buckets[1].mes, "2026-04");
        assert_eq!(buckets[1].total, 1);
    }

    #[test]
    /// Expect an empty input to produce an empty series
    fn test_bucket_by_month_empty() {
        assert!(bucket_by_month(&[]).is_empty());
    }
}
