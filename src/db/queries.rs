use crate::errors::AppResult;
use crate::models::{ClosedRecord, OpenRecord, WorkRecord, WorkRecordDraft};
use rusqlite::{Connection, Result, Row, params};

/// Map a `work_records` row onto the open/closed union. A row with a NULL
/// `off_duty_time` is an open day; the CHECK constraint guarantees
/// `working_hours` agrees.
pub fn map_row(row: &Row) -> Result<WorkRecord> {
    let id: i64 = row.get("id")?;
    let date: String = row.get("date")?;
    let month_date: String = row.get("month_date")?;
    let duty_time: i64 = row.get("duty_time")?;
    let off_duty_time: Option<i64> = row.get("off_duty_time")?;
    let working_hours: Option<f64> = row.get("working_hours")?;

    Ok(match (off_duty_time, working_hours) {
        (Some(off_duty_time), Some(working_hours)) => WorkRecord::Closed(ClosedRecord {
            id,
            date,
            month_date,
            duty_time,
            off_duty_time,
            working_hours,
        }),
        _ => WorkRecord::Open(OpenRecord {
            id,
            date,
            month_date,
            duty_time,
        }),
    })
}

/// Insert a fresh open record and return it with the store-assigned id.
pub fn insert_record(conn: &Connection, draft: &WorkRecordDraft) -> AppResult<OpenRecord> {
    conn.execute(
        "INSERT INTO work_records (date, month_date, duty_time)
         VALUES (?1, ?2, ?3)",
        params![draft.date, draft.month_date, draft.duty_time],
    )?;

    Ok(OpenRecord {
        id: conn.last_insert_rowid(),
        date: draft.date.clone(),
        month_date: draft.month_date.clone(),
        duty_time: draft.duty_time,
    })
}

/// Full overwrite keyed by id. Returns false when no row matched; callers
/// treat that as a reportable no-op, not an error.
pub fn update_record(conn: &Connection, rec: &ClosedRecord) -> AppResult<bool> {
    let affected = conn.execute(
        "UPDATE work_records
         SET date = ?1, month_date = ?2, duty_time = ?3,
             off_duty_time = ?4, working_hours = ?5
         WHERE id = ?6",
        params![
            rec.date,
            rec.month_date,
            rec.duty_time,
            rec.off_duty_time,
            rec.working_hours,
            rec.id,
        ],
    )?;
    Ok(affected > 0)
}

/// The highest-id record, i.e. the most recently inserted one.
pub fn most_recent(conn: &Connection) -> AppResult<Option<WorkRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, month_date, duty_time, off_duty_time, working_hours
         FROM work_records
         ORDER BY id DESC
         LIMIT 1",
    )?;

    match stmt.query_row([], map_row) {
        Ok(rec) => Ok(Some(rec)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All records, newest calendar day first.
pub fn all_records(conn: &Connection) -> AppResult<Vec<WorkRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, month_date, duty_time, off_duty_time, working_hours
         FROM work_records
         ORDER BY date DESC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Records of a single month (`YYYY-MM`), newest day first. This is the
/// grouping query `month_date` exists for.
pub fn records_by_month(conn: &Connection, month: &str) -> AppResult<Vec<WorkRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, month_date, duty_time, off_duty_time, working_hours
         FROM work_records
         WHERE month_date = ?1
         ORDER BY date DESC",
    )?;

    let rows = stmt.query_map([month], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Empty the archive. Idempotent; returns the number of rows removed.
pub fn delete_all(conn: &Connection) -> AppResult<usize> {
    let removed = conn.execute("DELETE FROM work_records", [])?;
    Ok(removed)
}
