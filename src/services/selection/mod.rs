//! Click-to-date conversions: the engine side of selection updates.
//!
//! Each function takes the current selection date plus a resolved grid
//! index and returns the replacement date for the UI shell.

use chrono::NaiveDateTime;

use crate::models::appointment::{Appointment, RecordError};
use crate::models::settings::LayoutSettings;
use crate::utils::date;

/// Month-grid cell click: the clicked cell's day, at midnight.
pub fn month_cell_click(current: NaiveDateTime, idx: usize) -> NaiveDateTime {
    date::index_to_day(idx, current)
}

/// Scheduling-grid cell click: re-anchor the clicked column onto the
/// month grid, then apply the clicked row's hour.
pub fn main_cell_click(current: NaiveDateTime, idx: usize) -> NaiveDateTime {
    let month_idx = date::day_to_index(current) + idx % date::WEEK_DAYS;
    let month_idx = month_idx - date::day_of_week(current);
    let day = date::index_to_day(month_idx, current);
    date::index_to_datetime(idx, day)
}

/// Day-selector click above the scheduling grid: same re-anchoring,
/// without an hour.
pub fn day_selector_click(current: NaiveDateTime, day_idx: usize) -> NaiveDateTime {
    let month_idx = date::day_to_index(current) + day_idx - date::day_of_week(current);
    date::index_to_day(month_idx, current)
}

/// Navigation-arrow click: arrow 0 steps a month back, arrow 1 forward.
pub fn arrow_click(current: NaiveDateTime, arrow_idx: usize) -> NaiveDateTime {
    date::shift_month(current, 2 * arrow_idx as i32 - 1)
}

/// A booking record for the selected slot, one block-time unit long with
/// the configured default summary. Handing it to the data source is the
/// caller's job.
pub fn booking_record(
    current: NaiveDateTime,
    settings: &LayoutSettings,
) -> Result<Appointment, RecordError> {
    Appointment::one_slot(current, settings.booking_summary.clone())
}
