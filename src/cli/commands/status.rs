use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::WorkRecord;
use crate::ui::messages::info;
use crate::utils::formatting::hours_label;
use crate::utils::time;

/// Show today's clock state from the most recent record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status = cmd {
        let store = RecordStore::open(&cfg.database)?;
        let today = time::day_key(time::now_millis());

        match store.most_recent()? {
            None => info("No records yet. `punchclock punch` clocks you in."),
            Some(rec) if rec.date() != today => {
                info(format!(
                    "Off the clock. Last recorded day: {}.",
                    rec.date()
                ));
            }
            Some(WorkRecord::Open(rec)) => {
                info(format!(
                    "On duty since {} ({})",
                    time::clock_key(rec.duty_time),
                    rec.date
                ));
            }
            Some(WorkRecord::Closed(rec)) => {
                info(format!(
                    "Done for today: {} to {}, {}",
                    time::clock_key(rec.duty_time),
                    time::clock_key(rec.off_duty_time),
                    hours_label(rec.working_hours)
                ));
            }
        }
    }
    Ok(())
}
