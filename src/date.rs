//! date.rs
//!
//! Persian (Solar Hijri) calendar arithmetic for the date picker. All
//! computation is purely algorithmic: month lengths follow the civil
//! pattern (months 1–6 have 31 days, 7–11 have 30, Esfand has 29 or 30),
//! leap years come from a hardcoded list, and weekdays are propagated
//! from a single reference date rather than taken from the system clock.
//!
//! # Overview
//!
//! The module includes:
//!
//! - **`leap_year(year)`**: Checks whether a given year is in the leap-year list.
//! - **`days_in_month(month, year)`**: Length of a month, leap-aware for Esfand.
//! - **`days_in_year(year)`**: 365 or 366.
//! - **`first_weekday_of_year(year)`**: Weekday of 1 Farvardin, propagated from the anchor.
//! - **`first_weekday_of_month(year, month)`**: Weekday of the 1st of any month.
//! - **`day_of_week(day, month, year)`**: Returns the weekday (0 = Saturday, 1 = Sunday, …, 6 = Friday).
//! - **`date_to_ydays(day, month, year)`**: Converts a date to its day-of-year index (1-based).
//! - **`ydays_to_date(day_of_year, year)`**: Converts a day-of-year back into (day, month, year).
//! - **`date_to_days(day, month, year)`**: Signed day count relative to the anchor date.
//! - **`days_to_date(days)`**: Inverse of `date_to_days`.
//! - **`add_days(date, inc)`**: Shifts a [`PersianDate`] across month and year boundaries.
//! - **`next_month(year, month)` / `prev_month(year, month)`**: Picker arrow navigation.
//! - **`clamp_day(date)`**: Pulls an overlong day back into its month.
//!
//! The week starts on Saturday (Shanbeh), so 0 = Saturday and 6 = Friday
//! throughout the crate. This is the calendar's native convention, not
//! the Gregorian Sunday- or Monday-start one.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Year of the reference date, 1 Farvardin 1405.
pub const ANCHOR_YEAR: i32 = 1405;

/// Weekday of the reference date: 1 Farvardin 1405 is a Saturday (0).
pub const ANCHOR_WEEKDAY: u32 = 0;

/// The hardcoded leap-year list the picker ships with.
///
/// Membership in this set is the single source of truth for leap years:
/// the weekday propagation in [`first_weekday_of_year`] is calibrated
/// against exactly these entries, so the list must not be swapped for the
/// 33-year-cycle formula (the two disagree, most visibly around
/// 1403/1405). Years outside the list count as non-leap, which also
/// bounds how far conversions can stay aligned with the civil calendar.
static LEAP_YEARS: Lazy<HashSet<i32>> = Lazy::new(|| {
    [
        1337, 1342, 1346, 1350, 1354, 1358, 1362, 1366, 1370, 1375, 1379,
        1383, 1387, 1391, 1395, 1399, 1405, 1408, 1412, 1416, 1420, 1424,
        1428, 1432, 1436, 1441, 1445, 1449, 1453, 1457, 1461, 1465, 1469,
        1474, 1478, 1482, 1486, 1490,
    ]
    .into_iter()
    .collect()
});

/// Returns `true` if the given year is in the leap-year list.
///
/// ```
/// # use taqvim::date::leap_year;
/// assert!(!leap_year(1404));
/// assert!(leap_year(1405));
/// assert!(!leap_year(1403));
/// assert!(leap_year(1408));
/// ```
pub fn leap_year(year: i32) -> bool {
    LEAP_YEARS.contains(&year)
}

/// Returns the number of days in the given month.
///
/// Months 1–6 have 31 days, months 7–11 have 30, and Esfand (month 12)
/// has 30 in a leap year and 29 otherwise. Any other month value falls
/// back to 31 so that callers holding an unvalidated month still get a
/// usable length.
///
/// ```
/// # use taqvim::date::days_in_month;
/// assert_eq!(days_in_month(1, 1404), 31);
/// assert_eq!(days_in_month(7, 1404), 30);
/// assert_eq!(days_in_month(12, 1404), 29);
/// assert_eq!(days_in_month(12, 1408), 30);
/// ```
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 => {
            if leap_year(year) {
                30
            } else {
                29
            }
        }
        _ => 31,
    }
}

/// Returns the number of days in the given year (365 or 366).
///
/// ```
/// # use taqvim::date::days_in_year;
/// assert_eq!(days_in_year(1404), 365);
/// assert_eq!(days_in_year(1405), 366);
/// ```
pub fn days_in_year(year: i32) -> u32 {
    if leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the weekday of 1 Farvardin of the given year (0 = Saturday).
///
/// The value is propagated year by year from the anchor: forward of 1405
/// each year advances the weekday by `days_in_year(y) % 7`, backward of
/// 1405 each year retreats it by the same amount (with a +7 guard so the
/// running value never goes negative). The walk is O(|year − 1405|),
/// which is fine for the interactive year range the picker covers.
///
/// ```
/// # use taqvim::date::first_weekday_of_year;
/// assert_eq!(first_weekday_of_year(1405), 0); // Saturday, the anchor
/// assert_eq!(first_weekday_of_year(1404), 6); // Friday
/// ```
pub fn first_weekday_of_year(year: i32) -> u32 {
    let mut wd = ANCHOR_WEEKDAY;
    if year > ANCHOR_YEAR {
        for y in ANCHOR_YEAR..year {
            wd = (wd + days_in_year(y) % 7) % 7;
        }
    } else if year < ANCHOR_YEAR {
        for y in (year..ANCHOR_YEAR).rev() {
            wd = (wd + 7 - days_in_year(y) % 7) % 7;
        }
    }
    wd
}

/// Returns the weekday of the 1st of the given month (0 = Saturday).
///
/// ```
/// # use taqvim::date::first_weekday_of_month;
/// assert_eq!(first_weekday_of_month(1405, 1), 0);
/// assert_eq!(first_weekday_of_month(1404, 7), 3); // 1 Mehr 1404 is a Tuesday
/// ```
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    let mut wd = first_weekday_of_year(year);
    for m in 1..month {
        wd = (wd + days_in_month(m, year) % 7) % 7;
    }
    wd
}

/// Computes the day of week, returning:
/// - 0 = Saturday (Shanbeh)
/// - 1 = Sunday
/// - 2 = Monday
/// - 3 = Tuesday
/// - 4 = Wednesday
/// - 5 = Thursday
/// - 6 = Friday (Jomeh)
///
/// ```
/// # use taqvim::date::day_of_week;
/// assert_eq!(day_of_week(1, 1, 1405), 0); // anchor date, Saturday
/// assert_eq!(day_of_week(3, 7, 1404), 5); // 3 Mehr 1404, Thursday
/// ```
pub fn day_of_week(day: u32, month: u32, year: i32) -> u32 {
    (first_weekday_of_month(year, month) + day - 1) % 7
}

/// Converts a date to its day-of-year index (1-based).
///
/// ```
/// # use taqvim::date::date_to_ydays;
/// assert_eq!(date_to_ydays(1, 1, 1404), 1);
/// assert_eq!(date_to_ydays(3, 7, 1404), 189); // 6 * 31 + 3
/// assert_eq!(date_to_ydays(30, 12, 1405), 366);
/// ```
pub fn date_to_ydays(day: u32, month: u32, year: i32) -> u32 {
    let mut days = day;
    for m in 1..month {
        days += days_in_month(m, year);
    }
    days
}

/// Converts a 1-based day-of-year index back into `(day, month, year)`.
///
/// A day-of-year past the end of the year stays in Esfand with the
/// excess left in the day component; callers that need a real date use
/// [`days_to_date`], which never produces such an input.
///
/// ```
/// # use taqvim::date::ydays_to_date;
/// assert_eq!(ydays_to_date(189, 1404), (3, 7, 1404));
/// assert_eq!(ydays_to_date(366, 1405), (30, 12, 1405));
/// ```
pub fn ydays_to_date(day_of_year: u32, year: i32) -> (u32, u32, i32) {
    let mut m = 1;
    let mut d = day_of_year;
    while m < 12 && d > days_in_month(m, year) {
        d -= days_in_month(m, year);
        m += 1;
    }
    (d, m, year)
}

/// Converts a date to a signed day count relative to the anchor date,
/// 1 Farvardin 1405 (which itself maps to 0).
///
/// ```
/// # use taqvim::date::date_to_days;
/// assert_eq!(date_to_days(1, 1, 1405), 0);
/// assert_eq!(date_to_days(2, 1, 1405), 1);
/// assert_eq!(date_to_days(3, 7, 1404), -177);
/// ```
pub fn date_to_days(day: u32, month: u32, year: i32) -> i64 {
    let ord = date_to_ydays(day, month, year) as i64 - 1;
    if year >= ANCHOR_YEAR {
        let mut days = 0i64;
        for y in ANCHOR_YEAR..year {
            days += days_in_year(y) as i64;
        }
        days + ord
    } else {
        let mut days = 0i64;
        for y in year..ANCHOR_YEAR {
            days += days_in_year(y) as i64;
        }
        ord - days
    }
}

/// Converts a signed day count (relative to the anchor date) back into
/// `(day, month, year)`.
///
/// ```
/// # use taqvim::date::days_to_date;
/// assert_eq!(days_to_date(0), (1, 1, 1405));
/// assert_eq!(days_to_date(-1), (29, 12, 1404));
/// assert_eq!(days_to_date(365), (30, 12, 1405));
/// assert_eq!(days_to_date(366), (1, 1, 1406));
/// ```
pub fn days_to_date(days: i64) -> (u32, u32, i32) {
    let mut year = ANCHOR_YEAR;
    let mut rem = days;
    while rem < 0 {
        year -= 1;
        rem += days_in_year(year) as i64;
    }
    while rem >= days_in_year(year) as i64 {
        rem -= days_in_year(year) as i64;
        year += 1;
    }
    ydays_to_date(rem as u32 + 1, year)
}

/// A Persian calendar date as the picker holds it.
///
/// The fields are plain and public; nothing is validated on construction
/// because [`parse_date`](crate::datestring::parse_date) deliberately
/// performs no range checks. Use [`PersianDate::is_valid`] where a real
/// calendar date is required, and [`clamp_day`] to repair the day after
/// month navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersianDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl PersianDate {
    /// Creates a date from raw components, unchecked.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        PersianDate { year, month, day }
    }

    /// Returns `true` if the month is in 1..=12 and the day fits the month.
    ///
    /// ```
    /// # use taqvim::date::PersianDate;
    /// assert!(PersianDate::new(1405, 12, 30).is_valid());
    /// assert!(!PersianDate::new(1404, 12, 30).is_valid());
    /// assert!(!PersianDate::new(1404, 13, 1).is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= days_in_month(self.month, self.year)
    }

    /// Weekday of this date (0 = Saturday).
    pub fn weekday(&self) -> u32 {
        day_of_week(self.day, self.month, self.year)
    }
}

/// Shifts a date by `inc` days (which can be negative), crossing month
/// and year boundaries as needed.
///
/// ```
/// # use taqvim::date::{add_days, PersianDate};
/// let d = add_days(PersianDate::new(1404, 12, 29), 1);
/// assert_eq!(d, PersianDate::new(1405, 1, 1));
/// let d = add_days(PersianDate::new(1405, 1, 1), -1);
/// assert_eq!(d, PersianDate::new(1404, 12, 29));
/// ```
pub fn add_days(date: PersianDate, inc: i64) -> PersianDate {
    let total = date_to_days(date.day, date.month, date.year) + inc;
    let (day, month, year) = days_to_date(total);
    PersianDate { year, month, day }
}

/// Returns the `(year, month)` one month after the given one, wrapping
/// Esfand into Farvardin of the next year.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Returns the `(year, month)` one month before the given one, wrapping
/// Farvardin into Esfand of the previous year.
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Pulls the day back into the month's length, leaving everything else
/// untouched. Selections carried across month navigation go through this
/// so that e.g. 31 Shahrivar does not survive into Mehr.
///
/// ```
/// # use taqvim::date::{clamp_day, PersianDate};
/// let d = clamp_day(PersianDate::new(1404, 7, 31));
/// assert_eq!(d, PersianDate::new(1404, 7, 30));
/// ```
pub fn clamp_day(date: PersianDate) -> PersianDate {
    let max = days_in_month(date.month, date.year);
    PersianDate {
        day: date.day.min(max).max(1),
        ..date
    }
}
