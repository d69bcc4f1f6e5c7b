//! Canonical text forms of date, time and timestamp values.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, TimeDelta, Timelike};

const NANOS_DIGITS: usize = 9;

/// Formats a date as `YYYY-MM-DD`.
///
/// Years outside `0..=9999` use the ISO 8601 expanded form with an explicit
/// sign and at least four digits: `+12345-01-02`, `-0044-03-15`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats a time as `HH:MM:SS`, followed by `precision` fractional digits
/// when `precision > 0`. Excess digits are dropped; missing ones are zeros.
#[must_use]
pub fn format_time(time: NaiveTime, precision: u32) -> String {
    let mut out = time.format("%H:%M:%S").to_string();
    push_fraction(&mut out, time.nanosecond(), precision);
    out
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS[.f...]`.
///
/// With `precision > 0` the value is rounded to that many fractional digits
/// before formatting; with `precision == 0` the fraction is omitted. A value
/// too close to [`NaiveDateTime::MAX`] to round up is truncated instead.
/// Years are written as in [`format_date`].
#[must_use]
pub fn format_timestamp(timestamp: NaiveDateTime, precision: u32) -> String {
    let timestamp = if precision > 0 {
        round_subsecs(timestamp, precision.min(9))
    } else {
        timestamp
    };
    let mut out = timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
    push_fraction(&mut out, timestamp.nanosecond(), precision);
    out
}

fn round_subsecs(timestamp: NaiveDateTime, digits: u32) -> NaiveDateTime {
    let truncated = timestamp.trunc_subsecs(u16::try_from(digits).unwrap_or(9));
    let span = 10_i64.pow(9 - digits);
    let below = i64::from(timestamp.nanosecond()) % span;
    if below * 2 < span {
        return truncated;
    }
    timestamp
        .checked_add_signed(TimeDelta::nanoseconds(span - below))
        .unwrap_or(truncated)
}

fn push_fraction(out: &mut String, nanos: u32, precision: u32) {
    if precision == 0 {
        return;
    }
    // Leap seconds are reported as nanos >= 1e9.
    let digits = format!("{:09}", nanos % 1_000_000_000);
    let precision = precision as usize;
    out.push('.');
    if precision <= NANOS_DIGITS {
        out.push_str(&digits[..precision]);
    } else {
        out.push_str(&digits);
        out.extend(core::iter::repeat('0').take(precision - NANOS_DIGITS));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32, s: u32, milli: u32) -> NaiveTime {
        NaiveTime::from_hms_milli_opt(h, m, s, milli).unwrap()
    }

    fn timestamp(milli: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_time(time(23, 59, 58, milli))
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(1969, 7, 21).unwrap();
        assert_eq!(format_date(date), "1969-07-21");
    }

    #[test]
    fn test_format_time_precision() {
        let t = time(14, 33, 44, 567);
        assert_eq!(format_time(t, 0), "14:33:44");
        assert_eq!(format_time(t, 3), "14:33:44.567");
        assert_eq!(format_time(t, 2), "14:33:44.56");
        assert_eq!(format_time(t, 5), "14:33:44.56700");
    }

    #[test]
    fn test_format_time_beyond_nanos() {
        let t = time(1, 2, 3, 4);
        assert_eq!(format_time(t, 11), "01:02:03.00400000000");
    }

    #[test]
    fn test_format_timestamp_rounds() {
        assert_eq!(format_timestamp(timestamp(567), 2), "2024-02-29 23:59:58.57");
        assert_eq!(format_timestamp(timestamp(567), 3), "2024-02-29 23:59:58.567");
    }

    #[test]
    fn test_format_timestamp_precision_zero_has_no_fraction() {
        assert_eq!(format_timestamp(timestamp(999), 0), "2024-02-29 23:59:58");
    }

    #[test]
    fn test_format_date_expanded_years() {
        let far = NaiveDate::from_ymd_opt(12345, 1, 2).unwrap();
        assert_eq!(format_date(far), "+12345-01-02");
        let ides = NaiveDate::from_ymd_opt(-44, 3, 15).unwrap();
        assert_eq!(format_date(ides), "-0044-03-15");
    }

    #[test]
    fn test_format_timestamp_at_max_truncates() {
        assert_eq!(
            format_timestamp(NaiveDateTime::MAX, 3),
            "+262142-12-31 23:59:59.999"
        );
        assert_eq!(
            format_timestamp(NaiveDateTime::MAX, 12),
            "+262142-12-31 23:59:59.999999999000"
        );
    }

    #[test]
    fn test_format_timestamp_round_carries() {
        assert_eq!(format_timestamp(timestamp(996), 2), "2024-02-29 23:59:59.00");
    }
}
