//! gregorian.rs
//!
//! Gregorian interop for the picker. The engine itself never touches the
//! system clock; this module carries the one place where the two
//! calendars meet, pinning the Persian anchor date to its Gregorian
//! face and converting by signed day offset in either direction. The
//! widget uses it for the "today" highlight and for seeding an empty
//! selection.

use chrono::{Duration, Local, NaiveDate, Weekday};

use crate::date::{date_to_days, days_to_date, PersianDate};

/// Gregorian face of the anchor: 1 Farvardin 1405 is 21 March 2026,
/// a Saturday on both sides.
fn gregorian_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 21).unwrap()
}

/// Converts a Persian date to its Gregorian equivalent.
///
/// Returns `None` only when the result falls outside what chrono can
/// represent, which no picker-range input does.
///
/// ```
/// # use chrono::NaiveDate;
/// # use taqvim::date::PersianDate;
/// # use taqvim::gregorian::to_gregorian;
/// let g = to_gregorian(&PersianDate::new(1404, 7, 3));
/// assert_eq!(g, NaiveDate::from_ymd_opt(2025, 9, 25));
/// ```
pub fn to_gregorian(date: &PersianDate) -> Option<NaiveDate> {
    let offset = date_to_days(date.day, date.month, date.year);
    gregorian_anchor().checked_add_signed(Duration::days(offset))
}

/// Converts a Gregorian date to its Persian equivalent.
///
/// ```
/// # use chrono::NaiveDate;
/// # use taqvim::date::PersianDate;
/// # use taqvim::gregorian::from_gregorian;
/// let nowruz = NaiveDate::from_ymd_opt(2026, 3, 21).unwrap();
/// assert_eq!(from_gregorian(nowruz), PersianDate::new(1405, 1, 1));
/// ```
pub fn from_gregorian(date: NaiveDate) -> PersianDate {
    let offset = date.signed_duration_since(gregorian_anchor()).num_days();
    let (day, month, year) = days_to_date(offset);
    PersianDate { year, month, day }
}

/// The current local date as a Persian date.
pub fn today() -> PersianDate {
    from_gregorian(Local::now().date_naive())
}

/// Maps a chrono weekday onto the Saturday-first index this crate uses
/// (Saturday = 0 … Friday = 6).
pub fn weekday_index(weekday: Weekday) -> u32 {
    (weekday.num_days_from_monday() + 2) % 7
}
