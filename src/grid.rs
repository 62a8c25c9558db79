//! grid.rs
//!
//! Month-grid generation for the picker table. The grid is the padded
//! cell sequence the widget renders: leading blanks so that day 1 lands
//! in its weekday column (Saturday first), then the day numbers.

use crate::date::{days_in_month, first_weekday_of_month};

/// Builds the cell sequence for one month: `first_weekday_of_month`
/// leading `None` placeholders followed by `Some(1)..=Some(n)` where `n`
/// is the month length. The sequence is exactly `lead + n` cells long;
/// there is no trailing padding, the widget renders precisely this many
/// cells.
///
/// ```
/// # use taqvim::grid::month_grid;
/// let cells = month_grid(1404, 7);
/// assert_eq!(cells.len(), 33); // 3 leading blanks + 30 days
/// assert_eq!(cells[2], None);
/// assert_eq!(cells[3], Some(1));
/// assert_eq!(cells[32], Some(30));
/// ```
pub fn month_grid(year: i32, month: u32) -> Vec<Option<u32>> {
    let lead = first_weekday_of_month(year, month);
    let len = days_in_month(month, year);
    let mut cells = Vec::with_capacity((lead + len) as usize);
    for _ in 0..lead {
        cells.push(None);
    }
    for day in 1..=len {
        cells.push(Some(day));
    }
    cells
}

/// The same cells chunked into week rows of at most 7, the shape the
/// picker table is drawn in. The last row is left short rather than
/// padded out.
///
/// ```
/// # use taqvim::grid::month_rows;
/// let rows = month_rows(1404, 7);
/// assert_eq!(rows.len(), 5);
/// assert_eq!(rows[0], vec![None, None, None, Some(1), Some(2), Some(3), Some(4)]);
/// assert_eq!(rows[4].len(), 5);
/// ```
pub fn month_rows(year: i32, month: u32) -> Vec<Vec<Option<u32>>> {
    month_grid(year, month)
        .chunks(7)
        .map(|week| week.to_vec())
        .collect()
}
