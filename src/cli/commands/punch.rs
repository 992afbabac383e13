use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::{PunchLogic, PunchOutcome};
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::formatting::hours_label;
use crate::utils::time;

/// The clock tap.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { at } = cmd {
        //
        // 1. Resolve "now" (hidden --at override for tests)
        //
        let now_ms = match at {
            Some(raw) => time::parse_millis(raw)
                .ok_or_else(|| AppError::InvalidTimestamp(raw.to_string()))?,
            None => time::now_millis(),
        };

        //
        // 2. Open the store and mirror the archive size after the mutation,
        //    the way the original screen re-renders its list
        //
        let mut store = RecordStore::open(&cfg.database)?;
        store.subscribe(Box::new(|snapshot| {
            println!("📒 {} day(s) on record", snapshot.len());
        }));

        //
        // 3. Execute the punch unit
        //
        let outcome = PunchLogic::apply(&mut store, now_ms)?;

        //
        // 4. Render the outcome
        //
        match outcome {
            PunchOutcome::ClockedIn(rec) => {
                success(format!(
                    "Clocked in at {} ({})",
                    time::clock_key(rec.duty_time()),
                    rec.date()
                ));
            }
            PunchOutcome::ClockedOut {
                off_duty_time,
                working_hours,
                reclosed,
                ..
            } => {
                if reclosed {
                    warning("Today's record was already closed: overwriting the previous clock-out.");
                }
                if working_hours < 0.0 {
                    warning("Clock-out is earlier than clock-in; recording a negative duration.");
                }
                success(format!(
                    "Clocked out at {}, worked {}",
                    time::clock_key(off_duty_time),
                    hours_label(working_hours)
                ));
            }
            PunchOutcome::MissedUpdate { record_id } => {
                warning(format!(
                    "No record with id {} to update; nothing changed.",
                    record_id
                ));
            }
        }
    }

    Ok(())
}
