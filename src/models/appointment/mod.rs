// Appointment module
// Record model for the scheduling grid, plus wire-shape parsing

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date;

/// Errors raised while turning raw data-source items into records.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("unparseable timestamp '{0}'")]
    BadTimestamp(String),
    #[error("appointment summary is empty")]
    EmptySummary,
    #[error("appointment is missing a start time")]
    MissingStart,
    #[error("malformed event payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// An appointment record.
///
/// Raw records from the data source carry an `end`; records synthesized by
/// the layout pipeline have `end` of `None` and are implicitly one
/// block-time unit long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub summary: String,
}

/// Records as loaded from the data source; `None` until the first fetch
/// completes.
pub type EventStore = Option<Vec<Appointment>>;

impl Appointment {
    /// Create a record with a validated, non-empty summary.
    pub fn new(
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
        summary: impl Into<String>,
    ) -> Result<Self, RecordError> {
        let summary = summary.into();
        if summary.trim().is_empty() {
            return Err(RecordError::EmptySummary);
        }
        Ok(Self {
            start,
            end,
            summary,
        })
    }

    /// A booking record spanning exactly one block-time unit from `start`.
    pub fn one_slot(start: NaiveDateTime, summary: impl Into<String>) -> Result<Self, RecordError> {
        Self::new(start, Some(start + date::block_time()), summary)
    }

    /// Duration in block-time units; `None` for synthesized one-unit
    /// records that carry no end.
    pub fn duration_slots(&self) -> Option<f64> {
        self.end.map(|end| date::end_start_diff(self.start, end))
    }
}

/// Wire shape of a timestamp field: `{"dateTime": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEventTime {
    #[serde(rename = "dateTime")]
    pub date_time: String,
}

/// Wire shape of one event item as delivered by the data source.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEventItem {
    pub start: Option<RawEventTime>,
    pub end: Option<RawEventTime>,
    pub summary: String,
}

/// Parse an RFC 3339 timestamp, keeping its own wall-clock time. A bare
/// `YYYY-MM-DDTHH:MM:SS` without offset is accepted as-is.
fn parse_timestamp(value: &str) -> Result<NaiveDateTime, RecordError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_local())
        .or_else(|_| value.parse::<NaiveDateTime>())
        .map_err(|_| RecordError::BadTimestamp(value.to_string()))
}

impl RawEventItem {
    /// Extract a validated [`Appointment`] from the wire shape.
    pub fn into_record(self) -> Result<Appointment, RecordError> {
        let start = self.start.ok_or(RecordError::MissingStart)?;
        let start = parse_timestamp(&start.date_time)?;
        let end = self
            .end
            .map(|t| parse_timestamp(&t.date_time))
            .transpose()?;
        Appointment::new(start, end, self.summary)
    }
}

/// Parse a JSON array of wire items into records.
pub fn records_from_json(payload: &str) -> Result<Vec<Appointment>, RecordError> {
    let items: Vec<RawEventItem> = serde_json::from_str(payload)?;
    items.into_iter().map(RawEventItem::into_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 6, 2)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_new_rejects_empty_summary() {
        assert!(matches!(
            Appointment::new(at(13), None, "   "),
            Err(RecordError::EmptySummary)
        ));
    }

    #[test]
    fn test_one_slot_spans_one_unit() {
        let record = Appointment::one_slot(at(13), "Checkup").unwrap();
        assert_eq!(record.end, Some(at(14)));
        assert_eq!(record.duration_slots(), Some(1.0));
    }

    #[test]
    fn test_parse_timestamp_keeps_wall_clock() {
        let parsed = parse_timestamp("2021-06-02T13:00:00-04:00").unwrap();
        assert_eq!(parsed, at(13));
        let bare = parse_timestamp("2021-06-02T13:00:00").unwrap();
        assert_eq!(bare, at(13));
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(matches!(
            parse_timestamp("yesterday-ish"),
            Err(RecordError::BadTimestamp(_))
        ));
    }

    #[test]
    fn test_records_from_json() {
        let payload = r#"[
            {
                "start": { "dateTime": "2021-06-02T13:00:00" },
                "end": { "dateTime": "2021-06-02T15:00:00" },
                "summary": "Therapy"
            }
        ]"#;
        let records = records_from_json(payload).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].start, at(13));
        assert_eq!(records[0].end, Some(at(15)));
        assert_eq!(records[0].summary, "Therapy");
    }

    #[test]
    fn test_missing_start_is_an_error() {
        let item = RawEventItem {
            start: None,
            end: None,
            summary: "Therapy".to_string(),
        };
        assert!(matches!(item.into_record(), Err(RecordError::MissingStart)));
    }
}
