//! Flat export of the archive to CSV or JSON.

use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::WorkRecord;
use crate::ui::messages::success;
use crate::utils::time;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Flat row shape for export; open days leave the clock-out columns empty.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: i64,
    pub date: String,
    pub month_date: String,
    pub duty_time: String,
    pub off_duty_time: Option<String>,
    pub working_hours: Option<f64>,
}

impl RecordExport {
    fn from_record(rec: &WorkRecord) -> Self {
        Self {
            id: rec.id(),
            date: rec.date().to_string(),
            month_date: rec.month_date().to_string(),
            duty_time: time::minute_key(rec.duty_time()),
            off_duty_time: rec.off_duty_time().map(time::minute_key),
            working_hours: rec.working_hours(),
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export records.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: absolute path of the output file
    /// - `month`: optional `YYYY-MM` filter
    pub fn export(
        store: &RecordStore,
        format: &str,
        file: &str,
        month: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let fmt = format.to_lowercase();
        if !["csv", "json"].contains(&fmt.as_str()) {
            return Err(AppError::InvalidExportFormat(format.to_string()));
        }

        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let records = match month {
            Some(m) => store.by_month(m)?,
            None => store.all()?,
        };

        if records.is_empty() {
            println!("⚠️  No records found for the selected month. Nothing to export.");
            return Ok(());
        }

        let rows: Vec<RecordExport> = records.iter().map(RecordExport::from_record).collect();

        match fmt.as_str() {
            "csv" => export_csv(&rows, path)?,
            "json" => export_json(&rows, path)?,
            _ => unreachable!(),
        }

        Ok(())
    }
}

/// Refuse to clobber an existing file unless `--force` or the user confirms.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    eprint!(
        "⚠️  File '{}' already exists. Overwrite? [y/N]: ",
        path.display()
    );
    io::stderr().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        Ok(())
    } else {
        Err(AppError::Export(
            "Export cancelled: existing file not overwritten".to_string(),
        ))
    }
}

fn export_csv(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    success(format!("Exported data to {}", path.display()));
    Ok(())
}

fn export_json(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    success(format!("Exported data to {}", path.display()));
    Ok(())
}
