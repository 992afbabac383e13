use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::WorkRecord;
use crate::utils::formatting::{hours_label, separator};
use crate::utils::time;

/// List recorded days, newest first, grouped under month headers.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let store = RecordStore::open(&cfg.database)?;

        let records = match month {
            Some(m) => store.by_month(m)?,
            None => store.all()?,
        };

        if records.is_empty() {
            match month {
                Some(m) => println!("No records for {}.", m),
                None => println!("No records yet."),
            }
            return Ok(());
        }

        let mut current_month = "";
        for rec in &records {
            if rec.month_date() != current_month {
                if !current_month.is_empty() {
                    println!("{}", separator(cfg.separator_width));
                }
                println!("📅 {}", rec.month_date());
                current_month = rec.month_date();
            }
            print_record(rec);
        }

        println!("{}", separator(cfg.separator_width));
        println!("{} day(s) on record", records.len());
    }
    Ok(())
}

fn print_record(rec: &WorkRecord) {
    match rec {
        WorkRecord::Open(r) => {
            println!("  {}  in {}  out   -", r.date, time::clock_key(r.duty_time));
        }
        WorkRecord::Closed(r) => {
            println!(
                "  {}  in {}  out {}  {}",
                r.date,
                time::clock_key(r.duty_time),
                time::clock_key(r.off_duty_time),
                hours_label(r.working_hours)
            );
        }
    }
}
