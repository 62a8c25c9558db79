//! datestring.rs
//!
//! The textual face of the engine. A selection crosses the widget
//! boundary as a single `YYYY/MM/DD` string (month and day zero-padded,
//! year as-is); this module parses that form back into a
//! [`PersianDate`], formats one out, and shifts a date string by whole
//! days for the picker's previous/next-day navigation.

use std::fmt;

use crate::date::{add_days, PersianDate};

/// Parses a `YYYY/MM/DD` string into a [`PersianDate`].
///
/// The string must split on `/` into exactly three segments, each a
/// plain integer. No range validation happens here: `"1404/13/40"`
/// parses, and downstream month-length logic tolerates the values. A
/// malformed string yields `None` and the caller keeps its current
/// selection.
///
/// ```
/// # use taqvim::date::PersianDate;
/// # use taqvim::datestring::parse_date;
/// assert_eq!(parse_date("1404/07/03"), Some(PersianDate::new(1404, 7, 3)));
/// assert_eq!(parse_date(""), None);
/// assert_eq!(parse_date("1404/07"), None);
/// assert_eq!(parse_date("abc/07/03"), None);
/// ```
pub fn parse_date(text: &str) -> Option<PersianDate> {
    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let year = parts[0].parse::<i32>().ok()?;
    let month = parts[1].parse::<u32>().ok()?;
    let day = parts[2].parse::<u32>().ok()?;
    Some(PersianDate { year, month, day })
}

/// Formats a date in the canonical `YYYY/MM/DD` form: month and day
/// zero-padded to two digits, year unpadded.
///
/// ```
/// # use taqvim::date::PersianDate;
/// # use taqvim::datestring::{format_date, parse_date};
/// let d = PersianDate::new(1404, 7, 3);
/// assert_eq!(format_date(&d), "1404/07/03");
/// assert_eq!(parse_date(&format_date(&d)), Some(d));
/// ```
pub fn format_date(date: &PersianDate) -> String {
    format!("{}/{:02}/{:02}", date.year, date.month, date.day)
}

impl fmt::Display for PersianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// Takes a date string in `YYYY/MM/DD` format, shifts it by `inc` days
/// (which can be negative) and returns the new string in the same
/// format. A string that does not parse is returned unchanged.
///
/// ```
/// # use taqvim::datestring::shift_days;
/// assert_eq!(shift_days("1404/12/29", 1), "1405/01/01");
/// assert_eq!(shift_days("1405/01/01", -1), "1404/12/29");
/// assert_eq!(shift_days("not a date", 5), "not a date");
/// ```
pub fn shift_days(text: &str, inc: i64) -> String {
    match parse_date(text) {
        Some(date) => format_date(&add_days(date, inc)),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_date("1404/07/03"), Some(PersianDate::new(1404, 7, 3)));
        assert_eq!(parse_date("1405/1/1"), Some(PersianDate::new(1405, 1, 1)));
        assert_eq!(parse_date("5/01/01"), Some(PersianDate::new(5, 1, 1)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("1404/07"), None);
        assert_eq!(parse_date("abc/07/03"), None);
        assert_eq!(parse_date("1404/07/03/01"), None);
        assert_eq!(parse_date("1404//03"), None);
        assert_eq!(parse_date("1404-07-03"), None);
        assert_eq!(parse_date("1404/07/03 "), None);
    }

    #[test]
    fn test_parse_skips_range_validation() {
        // Out-of-range components come through; month-length logic
        // downstream is tolerant of them.
        assert_eq!(
            parse_date("1404/13/40"),
            Some(PersianDate::new(1404, 13, 40))
        );
        assert_eq!(parse_date("1404/00/00"), Some(PersianDate::new(1404, 0, 0)));
    }

    #[test]
    fn test_format_zero_pads_month_and_day_only() {
        assert_eq!(format_date(&PersianDate::new(1404, 7, 3)), "1404/07/03");
        assert_eq!(format_date(&PersianDate::new(1404, 11, 23)), "1404/11/23");
        assert_eq!(format_date(&PersianDate::new(5, 1, 1)), "5/01/01");
    }

    #[test]
    fn test_round_trip() {
        for (year, month, day) in [
            (1350, 1, 1),
            (1404, 7, 3),
            (1405, 12, 30),
            (1490, 12, 29),
            (1404, 31, 31),
        ] {
            let d = PersianDate::new(year, month, day);
            assert_eq!(parse_date(&format_date(&d)), Some(d));
        }
    }

    #[test]
    fn test_display_matches_format_date() {
        let d = PersianDate::new(1404, 7, 3);
        assert_eq!(d.to_string(), format_date(&d));
    }

    #[test]
    fn test_shift_days_navigation() {
        assert_eq!(shift_days("1404/07/03", 1), "1404/07/04");
        assert_eq!(shift_days("1404/07/01", -1), "1404/06/31");
        assert_eq!(shift_days("1404/12/29", 1), "1405/01/01");
        assert_eq!(shift_days("1405/12/30", 1), "1406/01/01");
    }

    #[test]
    fn test_shift_days_passes_malformed_through() {
        assert_eq!(shift_days("", 3), "");
        assert_eq!(shift_days("07/03", 3), "07/03");
        assert_eq!(shift_days("not a date", -2), "not a date");
    }

    #[test]
    fn test_shift_days_zero_canonicalizes() {
        // A parseable but unpadded string comes back in canonical form.
        assert_eq!(shift_days("1404/7/3", 0), "1404/07/03");
    }
}
