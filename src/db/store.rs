//! The record store: a handle over the `work_records` table.
//!
//! Constructed once by the command handler and passed down explicitly; there
//! is no ambient global. Mutations notify subscribed observers with a fresh
//! snapshot of the whole archive, which is how the listing surface stays in
//! step with the data without a reactive-stream dependency.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{ClosedRecord, WorkRecord, WorkRecordDraft};
use rusqlite::{Transaction, TransactionBehavior};

pub type SnapshotObserver = Box<dyn FnMut(&[WorkRecord])>;

pub struct RecordStore {
    pool: DbPool,
    observers: Vec<SnapshotObserver>,
}

impl RecordStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Ok(Self {
            pool,
            observers: Vec::new(),
        })
    }

    /// Register an observer. It receives the full, date-descending snapshot
    /// after every mutation that goes through this handle.
    pub fn subscribe(&mut self, observer: SnapshotObserver) {
        self.observers.push(observer);
    }

    /// Insert a fresh open record; the store assigns the id.
    pub fn insert(&mut self, draft: &WorkRecordDraft) -> AppResult<WorkRecord> {
        let rec = queries::insert_record(&self.pool.conn, draft)?;
        self.notify()?;
        Ok(WorkRecord::Open(rec))
    }

    /// Full overwrite keyed by id. False means no row matched (no-op).
    pub fn update(&mut self, rec: &ClosedRecord) -> AppResult<bool> {
        let matched = queries::update_record(&self.pool.conn, rec)?;
        self.notify()?;
        Ok(matched)
    }

    pub fn most_recent(&self) -> AppResult<Option<WorkRecord>> {
        queries::most_recent(&self.pool.conn)
    }

    pub fn all(&self) -> AppResult<Vec<WorkRecord>> {
        queries::all_records(&self.pool.conn)
    }

    pub fn by_month(&self, month: &str) -> AppResult<Vec<WorkRecord>> {
        queries::records_by_month(&self.pool.conn, month)
    }

    /// Empty the archive. Idempotent.
    pub fn delete_all(&mut self) -> AppResult<usize> {
        let removed = queries::delete_all(&self.pool.conn)?;
        self.notify()?;
        Ok(removed)
    }

    /// Run a closure inside an IMMEDIATE transaction. The punch unit (read
    /// latest, decide, apply) goes through here so that two taps can never
    /// interleave against a stale snapshot. Observers are notified after the
    /// commit.
    pub fn in_transaction<T, F>(&mut self, f: F) -> AppResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> AppResult<T>,
    {
        let tx = self
            .pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let out = f(&tx)?;
        tx.commit()?;
        self.notify()?;
        Ok(out)
    }

    fn notify(&mut self) -> AppResult<()> {
        if self.observers.is_empty() {
            return Ok(());
        }
        let snapshot = queries::all_records(&self.pool.conn)?;
        for obs in &mut self.observers {
            obs(&snapshot);
        }
        Ok(())
    }
}
