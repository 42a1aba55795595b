//! Ingestion-time derivation of runner fields.
//!
//! The finish time is computed once, when a submission is turned into a
//! stored record, and is never recomputed afterwards. Times of day carry no
//! date, so an event that ends after midnight yields a negative duration.
//! That value is kept as-is rather than wrapped around.

use chrono::{DateTime, Utc};
use pacer_model::{NewRunner, RunnerID, RunnerRecord, TimeOfDay};
use tracing::debug;

use crate::error::Result;

/// Elapsed minutes from `raw_start` to `raw_end`, both `HH:MM`.
pub fn derive_finish_time(raw_start: &str, raw_end: &str) -> Result<i64> {
    let start = TimeOfDay::parse(raw_start)?;
    let end = TimeOfDay::parse(raw_end)?;
    Ok(elapsed_minutes(start, end))
}

pub fn elapsed_minutes(start: TimeOfDay, end: TimeOfDay) -> i64 {
    end.minutes_since_midnight() - start.minutes_since_midnight()
}

/// Turn a raw submission into a stored record.
///
/// Fails with `InvalidTimeFormat` if either time does not parse; in that
/// case no record is produced at all.
pub fn ingest(
    submission: NewRunner,
    id: RunnerID,
    created_at: DateTime<Utc>,
) -> Result<RunnerRecord> {
    let start_time = TimeOfDay::parse(&submission.start_time)?;
    let end_time = TimeOfDay::parse(&submission.end_time)?;
    let finish_time = elapsed_minutes(start_time, end_time);

    if finish_time < 0 {
        debug!(
            runner.id = %id,
            start = %start_time,
            end = %end_time,
            finish_time,
            "end time precedes start time; keeping negative finish time"
        );
    }

    Ok(RunnerRecord {
        id,
        name: submission.name,
        bib_number: submission.bib_number,
        city: submission.city,
        categories: submission.categories,
        start_time,
        end_time,
        did_finish: submission.did_finish,
        medal_received: submission.medal_received,
        certificate_received: submission.certificate_received,
        finish_time: Some(finish_time),
        sponsors: submission.sponsors,
        refreshment_stalls: submission.refreshment_stalls,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PacerError;

    #[test]
    fn derives_whole_minutes() {
        assert_eq!(derive_finish_time("08:00", "10:15").unwrap(), 135);
        assert_eq!(derive_finish_time("06:30", "06:30").unwrap(), 0);
    }

    #[test]
    fn midnight_crossing_stays_negative() {
        assert_eq!(derive_finish_time("23:30", "00:15").unwrap(), -1395);
    }

    #[test]
    fn invalid_time_is_reported_with_the_raw_input() {
        match derive_finish_time("08:00", "ten past ten") {
            Err(PacerError::InvalidTimeFormat(raw)) => assert_eq!(raw, "ten past ten"),
            other => panic!("expected InvalidTimeFormat, got {other:?}"),
        }
    }

    #[test]
    fn ingest_attaches_finish_time_and_keeps_raw_sets() {
        let submission = NewRunner {
            name: "Meera".into(),
            bib_number: "B-9".into(),
            city: "Pune".into(),
            categories: vec!["10K".into(), "10K".into()],
            start_time: "07:05".into(),
            end_time: "08:00".into(),
            did_finish: false,
            sponsors: vec!["Nike".into()],
            ..Default::default()
        };
        let id = RunnerID::new();
        let created_at = Utc::now();

        let record = ingest(submission, id, created_at).unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.finish_time, Some(55));
        assert_eq!(record.categories.len(), 2);
        assert!(!record.did_finish);
        assert_eq!(record.start_time.to_string(), "07:05");
        assert_eq!(record.created_at, created_at);
    }

    #[test]
    fn ingest_rejects_bad_start_time() {
        let submission = NewRunner {
            start_time: "25:00".into(),
            end_time: "08:00".into(),
            ..Default::default()
        };
        let err = ingest(submission, RunnerID::new(), Utc::now()).unwrap_err();
        assert!(matches!(err, PacerError::InvalidTimeFormat(raw) if raw == "25:00"));
    }
}
