pub mod record;

pub use record::{ClosedRecord, OpenRecord, WorkRecord, WorkRecordDraft};
