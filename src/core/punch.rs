//! The punch unit: read the latest record, run the clock engine, apply the
//! action. Executed atomically so a double tap can never race a stale
//! snapshot.

use crate::core::clock::{ClockAction, clock_event};
use crate::db::log::ttlog;
use crate::db::queries;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::WorkRecord;

/// Outcome of one tap, for the command layer to render.
#[derive(Debug, Clone, PartialEq)]
pub enum PunchOutcome {
    ClockedIn(WorkRecord),
    ClockedOut {
        record_id: i64,
        off_duty_time: i64,
        working_hours: f64,
        /// The record already had a clock-out; this tap overwrote it.
        reclosed: bool,
    },
    /// The CloseDay update matched no row. Reported, never escalated.
    MissedUpdate { record_id: i64 },
}

pub struct PunchLogic;

impl PunchLogic {
    pub fn apply(store: &mut RecordStore, now_ms: i64) -> AppResult<PunchOutcome> {
        store.in_transaction(|tx| {
            let latest = queries::most_recent(tx)?;
            let action = clock_event(now_ms, latest.as_ref());

            let outcome = match action {
                ClockAction::OpenNewDay(draft) => {
                    let rec = queries::insert_record(tx, &draft)?;
                    ttlog(
                        tx,
                        "punch_in",
                        &rec.date,
                        &format!("clock-in at {} (record {})", rec.duty_time, rec.id),
                    )?;
                    PunchOutcome::ClockedIn(WorkRecord::Open(rec))
                }
                ClockAction::CloseDay {
                    record_id,
                    off_duty_time,
                    working_hours,
                } => {
                    // The engine emits CloseDay for any same-day tap; only an
                    // open record makes this a first-time close.
                    let (reclosed, closed) = match latest {
                        Some(WorkRecord::Open(open)) => {
                            (false, open.close(off_duty_time, working_hours))
                        }
                        Some(WorkRecord::Closed(prev)) => {
                            let mut again = prev;
                            again.off_duty_time = off_duty_time;
                            again.working_hours = working_hours;
                            (true, again)
                        }
                        // CloseDay presupposes a latest record.
                        None => return Ok(PunchOutcome::MissedUpdate { record_id }),
                    };

                    let matched = queries::update_record(tx, &closed)?;
                    if !matched {
                        ttlog(
                            tx,
                            "missed_update",
                            &closed.date,
                            &format!("no row with id {} to close", record_id),
                        )?;
                        return Ok(PunchOutcome::MissedUpdate { record_id });
                    }

                    let op = if reclosed { "punch_reclose" } else { "punch_out" };
                    ttlog(
                        tx,
                        op,
                        &closed.date,
                        &format!(
                            "clock-out at {} (record {}, {} h)",
                            off_duty_time, record_id, working_hours
                        ),
                    )?;

                    PunchOutcome::ClockedOut {
                        record_id,
                        off_duty_time,
                        working_hours,
                        reclosed,
                    }
                }
            };

            Ok(outcome)
        })
    }
}
