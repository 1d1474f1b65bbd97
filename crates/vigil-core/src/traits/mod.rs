//! Seams between the engines and their collaborators.

mod record;
mod sink;
mod storage;

pub use record::Record;
pub use sink::{IEventSink, NullSink};
pub use storage::{IRecordLog, ISnapshotStore, LoadReport};
