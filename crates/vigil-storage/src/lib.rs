//! # vigil-storage
//!
//! Durable stores behind the [`IRecordLog`](vigil_core::traits::IRecordLog) and
//! [`ISnapshotStore`](vigil_core::traits::ISnapshotStore) traits: line-delimited
//! JSON logs, whole-file snapshots, and in-memory equivalents for tests.

pub mod envelope;
pub mod jsonl;
pub mod memory;
mod scan;
pub mod snapshot;

pub use jsonl::JsonlLog;
pub use memory::{MemoryLog, MemorySnapshot};
pub use snapshot::JsonSnapshot;
