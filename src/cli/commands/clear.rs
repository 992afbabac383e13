use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clear::ClearLogic;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::io::{self, Write};

/// Delete every record, after confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !yes && !confirm()? {
            info("Clear cancelled.");
            return Ok(());
        }

        let mut store = RecordStore::open(&cfg.database)?;
        let removed = ClearLogic::apply(&mut store)?;

        if removed > 0 {
            success(format!("Deleted {} record(s).", removed));
        }
    }
    Ok(())
}

fn confirm() -> AppResult<bool> {
    eprint!("⚠️  This deletes every recorded day. Continue? [y/N]: ");
    io::stderr().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    Ok(ans == "y" || ans == "yes")
}
