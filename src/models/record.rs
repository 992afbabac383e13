//! Work-day records.
//!
//! One record per calendar day in the reference timezone. A day is either
//! open (clocked in, waiting for the closing punch) or closed (both
//! timestamps stamped and the duration frozen). The two states are distinct
//! types: closing a day is a value transition, never an in-place mutation.

use serde::Serialize;

/// A day with a clock-in but no clock-out yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenRecord {
    pub id: i64,
    pub date: String,       // ⇔ work_records.date (TEXT "YYYY-MM-DD")
    pub month_date: String, // ⇔ work_records.month_date (TEXT "YYYY-MM")
    pub duty_time: i64,     // ⇔ work_records.duty_time (INT, epoch ms)
}

/// A completed day: both punches stamped, duration frozen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosedRecord {
    pub id: i64,
    pub date: String,
    pub month_date: String,
    pub duty_time: i64,
    pub off_duty_time: i64, // ⇔ work_records.off_duty_time (INT, epoch ms)
    pub working_hours: f64, // ⇔ work_records.working_hours (REAL, 2 decimals)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum WorkRecord {
    Open(OpenRecord),
    Closed(ClosedRecord),
}

/// Insert shape: everything but the store-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkRecordDraft {
    pub date: String,
    pub month_date: String,
    pub duty_time: i64,
}

impl OpenRecord {
    /// Stamp the closing punch. Consumes the open record: once a duration is
    /// frozen the open form no longer exists.
    pub fn close(self, off_duty_time: i64, working_hours: f64) -> ClosedRecord {
        ClosedRecord {
            id: self.id,
            date: self.date,
            month_date: self.month_date,
            duty_time: self.duty_time,
            off_duty_time,
            working_hours,
        }
    }
}

impl WorkRecord {
    pub fn id(&self) -> i64 {
        match self {
            WorkRecord::Open(r) => r.id,
            WorkRecord::Closed(r) => r.id,
        }
    }

    pub fn date(&self) -> &str {
        match self {
            WorkRecord::Open(r) => &r.date,
            WorkRecord::Closed(r) => &r.date,
        }
    }

    pub fn month_date(&self) -> &str {
        match self {
            WorkRecord::Open(r) => &r.month_date,
            WorkRecord::Closed(r) => &r.month_date,
        }
    }

    pub fn duty_time(&self) -> i64 {
        match self {
            WorkRecord::Open(r) => r.duty_time,
            WorkRecord::Closed(r) => r.duty_time,
        }
    }

    pub fn off_duty_time(&self) -> Option<i64> {
        match self {
            WorkRecord::Open(_) => None,
            WorkRecord::Closed(r) => Some(r.off_duty_time),
        }
    }

    pub fn working_hours(&self) -> Option<f64> {
        match self {
            WorkRecord::Open(_) => None,
            WorkRecord::Closed(r) => Some(r.working_hours),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, WorkRecord::Open(_))
    }
}
