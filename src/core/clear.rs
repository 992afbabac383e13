//! Wipe the archive: the "clear all data" button.

use crate::db::log::ttlog;
use crate::db::queries;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub struct ClearLogic;

impl ClearLogic {
    /// Delete every record. Idempotent; the audit row records how many rows
    /// went away.
    pub fn apply(store: &mut RecordStore) -> AppResult<usize> {
        let removed = store.in_transaction(|tx| {
            let removed = queries::delete_all(tx)?;
            ttlog(
                tx,
                "clear",
                "work_records",
                &format!("deleted {} record(s)", removed),
            )?;
            Ok(removed)
        })?;

        if removed == 0 {
            info("Archive was already empty.");
        }
        Ok(removed)
    }
}
