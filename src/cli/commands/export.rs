use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::store::RecordStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = cmd
    {
        let store = RecordStore::open(&cfg.database)?;
        ExportLogic::export(&store, format, file, month, *force)?;
    }
    Ok(())
}
