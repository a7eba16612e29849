// Test fixtures - reusable test data
// Provides consistent dates and appointment records across test files

use chrono::{NaiveDate, NaiveDateTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday 2021-05-31 at midnight (start of the reference week)
    pub fn monday_week_start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 5, 31)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Wednesday 2021-06-02 at 13:00
    pub fn wednesday_1pm() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 6, 2)
            .unwrap()
            .and_hms_opt(13, 0, 0)
            .unwrap()
    }

    /// Sunday 2021-06-06 at 23:59 (last minute of the reference week)
    pub fn sunday_night() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 6, 6)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap()
    }
}

/// Sample raw payloads for testing
pub mod payloads {
    /// Three items: a two-hour appointment, a colliding half-hour one and
    /// one with a label over the truncation threshold.
    pub fn week_of_appointments() -> &'static str {
        r#"[
            {
                "start": { "dateTime": "2021-06-02T13:00:00" },
                "end": { "dateTime": "2021-06-02T15:00:00" },
                "summary": "Therapy"
            },
            {
                "start": { "dateTime": "2021-06-02T13:30:00" },
                "end": { "dateTime": "2021-06-02T14:00:00" },
                "summary": "Sync"
            },
            {
                "start": { "dateTime": "2021-06-04T10:00:00" },
                "end": { "dateTime": "2021-06-04T11:00:00" },
                "summary": "Quarterly planning session"
            }
        ]"#
    }
}
