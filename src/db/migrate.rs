use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `work_records` table exists.
fn work_records_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='work_records'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `work_records` table.
///
/// The CHECK constraint encodes the open/closed pairing: a record either has
/// neither clock-out field or both.
fn create_work_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_records (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            date          TEXT NOT NULL,
            month_date    TEXT NOT NULL,
            duty_time     INTEGER NOT NULL,
            off_duty_time INTEGER,
            working_hours REAL,
            CHECK ((off_duty_time IS NULL) = (working_hours IS NULL))
        );

        CREATE INDEX IF NOT EXISTS idx_work_records_date ON work_records(date);
        CREATE INDEX IF NOT EXISTS idx_work_records_month ON work_records(month_date);
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure work_records table and its indexes
    if !work_records_table_exists(conn)? {
        create_work_records_table(conn)?;
        success("Created work_records table.");
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_work_records_date ON work_records(date);
            CREATE INDEX IF NOT EXISTS idx_work_records_month ON work_records(month_date);
            "#,
        )?;
    }

    Ok(())
}
