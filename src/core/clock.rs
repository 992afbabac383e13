//! The clock engine: pure decision logic behind the punch.
//!
//! Given "now" and the most recent record it decides whether the tap opens a
//! new work day or closes the current one, and computes the frozen duration.
//! No I/O, no state, no failure mode; applying the action is the caller's
//! job.

use crate::models::{WorkRecord, WorkRecordDraft};
use crate::utils::time;

/// What a punch should do to the archive.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockAction {
    /// First tap of a calendar day: insert a fresh open record.
    OpenNewDay(WorkRecordDraft),
    /// Same-day tap: stamp the clock-out on the day's record.
    CloseDay {
        record_id: i64,
        off_duty_time: i64,
        working_hours: f64,
    },
}

/// Decide what a tap at `now_ms` does, given the highest-id record.
///
/// The calendar day is taken in the fixed reference timezone. A same-day tap
/// closes the day's record even when it is already closed; re-closing
/// overwrites the previous clock-out (the caller reports it, see the punch
/// logic).
pub fn clock_event(now_ms: i64, latest: Option<&WorkRecord>) -> ClockAction {
    let today = time::day_key(now_ms);

    match latest {
        Some(rec) if rec.date() == today => ClockAction::CloseDay {
            record_id: rec.id(),
            off_duty_time: now_ms,
            working_hours: working_hours(rec.duty_time(), now_ms),
        },
        _ => ClockAction::OpenNewDay(WorkRecordDraft {
            date: today,
            month_date: time::month_key(now_ms),
            duty_time: now_ms,
        }),
    }
}

/// Elapsed hours between the two punches, rounded to two decimals.
///
/// Two-stage rounding, kept byte-compatible with the existing archives:
/// milliseconds truncate to whole minutes first, then minutes convert to
/// hours scaled by 100 and round half away from zero. 570 min gives 9.5,
/// 85 min gives 1.42, anything under a minute gives 0.0.
pub fn working_hours(duty_time: i64, off_duty_time: i64) -> f64 {
    let minutes = (off_duty_time - duty_time) / 60_000;
    ((minutes * 100) as f64 / 60.0).round() / 100.0
}
