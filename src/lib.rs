//! Persian (Solar Hijri) calendar engine for a date-selection widget.
//!
//! The crate provides the pure date arithmetic a picker needs and
//! nothing else: leap-year lookup, month lengths, weekday propagation
//! from a fixed reference date, month-grid generation, `YYYY/MM/DD`
//! (de)serialization and Gregorian interop. Everything is stateless and
//! synchronous; every abnormal condition is a return value, never a
//! panic, so the surrounding widget stays responsive on any input.
//!
//! # Usage
//!
//! ```
//! use taqvim::date::{day_of_week, days_in_month};
//! use taqvim::datestring::{format_date, parse_date};
//! use taqvim::grid::month_grid;
//!
//! // Render Mehr 1404 and read a click on day 3 back out as a string.
//! let cells = month_grid(1404, 7);
//! assert_eq!(cells.len() as u32, 3 + days_in_month(7, 1404));
//!
//! let selected = parse_date("1404/07/03").unwrap();
//! assert_eq!(day_of_week(selected.day, selected.month, selected.year), 5);
//! assert_eq!(format_date(&selected), "1404/07/03");
//! ```

use lazy_static::lazy_static;
use std::collections::HashMap;

pub mod date;
pub mod datestring;
pub mod grid;
pub mod gregorian;

pub use date::PersianDate;

/// First year the picker's year dropdown offers.
pub const PICKER_FIRST_YEAR: i32 = 1350;

/// Last year the picker's year dropdown offers.
pub const PICKER_LAST_YEAR: i32 = 1490;

/// Month names in Persian script (index 1..12); index 0 is unused.
pub static MONTH_NAMES: [&str; 13] = [
    "",
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Month names transliterated (index 1..12); index 0 is unused.
pub static MONTH_NAMES_LATIN: [&str; 13] = [
    "",
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Weekday names in Persian script, Saturday first.
pub static WEEKDAY_NAMES: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
];

/// Weekday names transliterated, Saturday first.
pub static WEEKDAY_NAMES_LATIN: [&str; 7] = [
    "Shanbeh",
    "Yekshanbeh",
    "Doshanbeh",
    "Seshanbeh",
    "Chaharshanbeh",
    "Panjshanbeh",
    "Jomeh",
];

lazy_static! {
    /// Reverse lookup from a month name (either script) to its number.
    static ref MONTH_NUMBERS: HashMap<&'static str, u32> = {
        let mut m = HashMap::new();
        for month in 1..=12 {
            m.insert(MONTH_NAMES[month as usize], month);
            m.insert(MONTH_NAMES_LATIN[month as usize], month);
        }
        m
    };
}

/// Returns the Persian-script name of a month, or `""` for an
/// out-of-range month number.
pub fn month_name(month: u32) -> &'static str {
    if (1..=12).contains(&month) {
        MONTH_NAMES[month as usize]
    } else {
        ""
    }
}

/// Returns the Persian-script weekday name for a Saturday-first index,
/// or `""` for an index outside 0..=6.
pub fn weekday_name(weekday: u32) -> &'static str {
    WEEKDAY_NAMES.get(weekday as usize).copied().unwrap_or("")
}

/// Looks up a month number from its name in either script.
///
/// ```
/// # use taqvim::month_number;
/// assert_eq!(month_number("Mehr"), Some(7));
/// assert_eq!(month_number("مهر"), Some(7));
/// assert_eq!(month_number("Brumaire"), None);
/// ```
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NUMBERS.get(name).copied()
}

/// The years the picker's dropdown iterates over, in order.
pub fn picker_years() -> std::ops::RangeInclusive<i32> {
    PICKER_FIRST_YEAR..=PICKER_LAST_YEAR
}
