// Property-based tests for the date-index mapping invariants

use agenda_grid::models::appointment::Appointment;
use agenda_grid::services::layout::process_events;
use agenda_grid::utils::date;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use proptest::prelude::*;
use std::collections::HashSet;

fn datetime(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

proptest! {
    /// Property: mapping a day to its month-grid index and back yields the
    /// same calendar day.
    #[test]
    fn prop_day_index_roundtrip(
        year in 2000..2100i32,
        month in 1..=12u32,
        day in 1..=28u32,
        hour in 0..24u32,
    ) {
        let d = datetime(year, month, day, hour);
        let roundtrip = date::index_to_day(date::day_to_index(d), d);
        prop_assert_eq!(roundtrip.date(), d.date());
    }

    /// Property: the month grid is always 6 full weeks, and the week slice
    /// matches daysOfWeek.
    #[test]
    fn prop_month_grid_is_42_cells(
        year in 2000..2100i32,
        month in 1..=12u32,
        day in 1..=28u32,
    ) {
        let d = datetime(year, month, day, 12);
        let days = date::days_of_month(d);
        prop_assert_eq!(days.len(), date::MONTH_CELLS);

        let first = date::day_to_index(d) - date::day_of_week(d);
        let week = date::days_of_week(d);
        prop_assert_eq!(&days[first..first + 7], week.as_slice());
    }

    /// Property: the day-number sequence is 1-based and never zero.
    #[test]
    fn prop_month_grid_days_are_plausible(
        year in 2000..2100i32,
        month in 1..=12u32,
    ) {
        let d = datetime(year, month, 10, 12);
        let days = date::days_of_month(d);
        prop_assert!(days.iter().all(|&day| (1..=31).contains(&day)));
    }

    /// Property: normalized records have unique truncated-hour starts and
    /// never outnumber the split input.
    #[test]
    fn prop_processed_slots_are_unique(
        hours in proptest::collection::vec(9..21u32, 1..12),
    ) {
        let records: Vec<Appointment> = hours
            .iter()
            .map(|&h| Appointment::new(datetime(2021, 6, 2, h), None, "Session").unwrap())
            .collect();
        let processed = process_events(records);

        let starts: HashSet<NaiveDateTime> = processed.iter().map(|r| r.start).collect();
        prop_assert_eq!(starts.len(), processed.len());
        prop_assert!(processed.iter().all(|r| r.start.minute() == 0));
    }
}

/// The scheduling window is small enough to check exhaustively: 7 days x
/// 12 rows map onto indices 0..84 with no collisions.
#[test]
fn test_main_index_is_injective_over_the_window() {
    let mut seen = HashSet::new();
    for day in 0..7u32 {
        for hour in date::DAY_START_HOUR..date::DAY_END_HOUR {
            // Week of 2021-05-31 (Monday) .. 2021-06-06
            let d = datetime(2021, 5, 31, hour) + chrono::Duration::days(day as i64);
            let idx = date::datetime_to_main_index(d);
            assert!(idx < date::MAIN_CELLS, "index {} out of range", idx);
            assert!(seen.insert(idx), "collision at day {} hour {}", day, hour);
        }
    }
    assert_eq!(seen.len(), 7 * 12);
}
