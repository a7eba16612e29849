//! Date arithmetic shared by the month and scheduling grids.
//!
//! All conversions derive grid indices from dates, never the other way
//! around; dates are the single source of truth for position.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Granularity of a scheduling slot, in minutes.
pub const BLOCK_MINUTES: i64 = 60;

/// First hour shown on the scheduling grid.
pub const DAY_START_HOUR: u32 = 9;
/// Hour at which the scheduling grid ends (exclusive for slot starts).
pub const DAY_END_HOUR: u32 = 21;

/// Cell counts for the two grids.
pub const MONTH_CELLS: usize = 42;
pub const WEEK_DAYS: usize = 7;
pub const MAIN_CELLS: usize = 84;

/// One block-time unit as a `Duration`.
pub fn block_time() -> Duration {
    Duration::minutes(BLOCK_MINUTES)
}

/// Monday-based weekday: Monday = 0 ... Sunday = 6.
pub fn day_of_week(date: NaiveDateTime) -> usize {
    date.weekday().num_days_from_monday() as usize
}

fn first_of_month(date: NaiveDateTime) -> NaiveDate {
    date.date() - Duration::days(date.day() as i64 - 1)
}

fn first_weekday_of_month(date: NaiveDateTime) -> usize {
    first_of_month(date)
        .and_time(NaiveTime::MIN)
        .weekday()
        .num_days_from_monday() as usize
}

fn last_of_month(date: NaiveDateTime) -> NaiveDate {
    let first = first_of_month(date);
    let next_first = first
        .checked_add_months(chrono::Months::new(1))
        .unwrap_or(first);
    next_first - Duration::days(1)
}

/// Month-grid index of `date`'s day: weekday offset of the 1st of the month
/// plus `(day - 1)`. Always in `[0, 41]`.
pub fn day_to_index(date: NaiveDateTime) -> usize {
    first_weekday_of_month(date) + date.day() as usize - 1
}

/// Inverse of [`day_to_index`], holding month/year from `date`.
///
/// Indices in the adjacent-month padding roll over into the neighboring
/// month. Returns midnight of the resolved day.
pub fn index_to_day(idx: usize, date: NaiveDateTime) -> NaiveDateTime {
    let offset = idx as i64 - first_weekday_of_month(date) as i64;
    (first_of_month(date) + Duration::days(offset)).and_time(NaiveTime::MIN)
}

/// The 42 day-numbers of the month grid: days borrowed from the previous
/// month to fill the first row, every day of the current month, then days
/// of the next month up to a full 6x7 grid.
pub fn days_of_month(date: NaiveDateTime) -> Vec<u32> {
    let lead = first_weekday_of_month(date);
    let len = last_of_month(date).day() as usize;
    let prev_last = {
        let first = first_of_month(date);
        (first - Duration::days(1)).day() as usize
    };

    let mut days = Vec::with_capacity(MONTH_CELLS);
    days.extend((0..lead).map(|i| (prev_last - lead + i + 1) as u32));
    days.extend(1..=len as u32);
    days.extend(1..=(MONTH_CELLS - lead - len) as u32);
    days
}

fn first_index_of_week(date: NaiveDateTime) -> usize {
    day_to_index(date) - day_of_week(date)
}

/// The 7 day-numbers of `date`'s week: the matching slice of
/// [`days_of_month`].
pub fn days_of_week(date: NaiveDateTime) -> Vec<u32> {
    let days = days_of_month(date);
    let first = first_index_of_week(date);
    days[first..first + WEEK_DAYS].to_vec()
}

/// True when `date`'s hour has a scheduling-grid slot of its own.
pub fn in_scheduling_window(date: NaiveDateTime) -> bool {
    (DAY_START_HOUR..DAY_END_HOUR).contains(&date.hour())
}

/// Scheduling-grid index of `date`: `day_of_week + (hour - 9) * 7`.
///
/// Hours outside the displayed window are clamped onto the first/last row so
/// the result is always in `[0, 83]`; callers that must not display such
/// records filter with [`in_scheduling_window`] first.
pub fn datetime_to_main_index(date: NaiveDateTime) -> usize {
    let hour = date.hour().clamp(DAY_START_HOUR, DAY_END_HOUR - 1);
    day_of_week(date) + (hour - DAY_START_HOUR) as usize * WEEK_DAYS
}

/// Starting hour of a scheduling-grid row: `idx / 7 + 9`.
pub fn index_to_hour(idx: usize) -> u32 {
    (idx / WEEK_DAYS) as u32 + DAY_START_HOUR
}

/// Set `date`'s hour from a scheduling-grid index, zeroing minutes/seconds.
pub fn index_to_datetime(idx: usize, date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(NaiveTime::MIN) + Duration::hours(index_to_hour(idx) as i64)
}

/// `date` truncated to the start of its hour.
pub fn truncate_to_hour(date: NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(NaiveTime::MIN) + Duration::hours(date.hour() as i64)
}

/// Predicate for membership in `reference`'s Monday-first week.
///
/// The interval is open at both ends: Monday 00:00 itself and the following
/// Monday 00:00 (i.e. Sunday 24:00) are excluded.
pub fn is_this_week(reference: NaiveDateTime) -> impl Fn(NaiveDateTime) -> bool {
    let monday = (reference.date() - Duration::days(day_of_week(reference) as i64))
        .and_time(NaiveTime::MIN);
    let next_monday = monday + Duration::days(WEEK_DAYS as i64);
    move |other: NaiveDateTime| other > monday && other < next_monday
}

/// Duration from `start` to `end` in block-time units, fractional slots
/// possible. Negative when `end` precedes `start`.
pub fn end_start_diff(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_milliseconds() as f64 / (BLOCK_MINUTES * 60_000) as f64
}

/// Shift `date` by whole months, clamping the day-of-month to the target
/// month's length. Returns midnight of the resolved day.
pub fn shift_month(date: NaiveDateTime, shift: i32) -> NaiveDateTime {
    let months = chrono::Months::new(shift.unsigned_abs());
    let shifted = if shift >= 0 {
        date.date().checked_add_months(months)
    } else {
        date.date().checked_sub_months(months)
    };
    shifted.unwrap_or_else(|| date.date()).and_time(NaiveTime::MIN)
}
