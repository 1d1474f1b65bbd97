use std::sync::Arc;

use crate::errors::{StorageError, VigilResult};

use super::Record;

/// Outcome of a full scan that keeps going past bad lines.
#[derive(Debug, Clone)]
pub struct LoadReport<T> {
    /// Valid records, in append order.
    pub records: Vec<T>,
    /// One entry per rejected line, in file order.
    pub failures: Vec<StorageError>,
}

impl<T> LoadReport<T> {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl<T> Default for LoadReport<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            failures: Vec::new(),
        }
    }
}

/// Durable, ordered, append-only sequence of records.
///
/// Implementations provide no locking: concurrent appends to one log must be
/// serialized by the caller.
pub trait IRecordLog<T: Record>: Send + Sync {
    /// Append one record. Either the whole record becomes visible or none of it.
    fn append(&self, record: &T) -> VigilResult<()>;

    /// Every record ever appended, in append order, honoring the log's decode mode.
    fn load_all(&self) -> VigilResult<Vec<T>>;

    /// Full scan that never aborts on a bad line; only I/O failures are errors.
    fn load_report(&self) -> VigilResult<LoadReport<T>>;

    /// Remove every record.
    fn clear(&self) -> VigilResult<()>;

    fn count(&self) -> VigilResult<usize> {
        Ok(self.load_all()?.len())
    }
}

/// Single-value store with whole-value overwrite semantics.
pub trait ISnapshotStore<T: Record>: Send + Sync {
    /// The current value, or `None` when nothing has been written.
    fn read(&self) -> VigilResult<Option<T>>;

    /// Replace the current value.
    fn write(&self, value: &T) -> VigilResult<()>;

    /// Remove the current value.
    fn clear(&self) -> VigilResult<()>;
}

impl<T: Record, S: IRecordLog<T> + ?Sized> IRecordLog<T> for Arc<S> {
    fn append(&self, record: &T) -> VigilResult<()> {
        (**self).append(record)
    }

    fn load_all(&self) -> VigilResult<Vec<T>> {
        (**self).load_all()
    }

    fn load_report(&self) -> VigilResult<LoadReport<T>> {
        (**self).load_report()
    }

    fn clear(&self) -> VigilResult<()> {
        (**self).clear()
    }

    fn count(&self) -> VigilResult<usize> {
        (**self).count()
    }
}

impl<T: Record, S: ISnapshotStore<T> + ?Sized> ISnapshotStore<T> for Arc<S> {
    fn read(&self) -> VigilResult<Option<T>> {
        (**self).read()
    }

    fn write(&self, value: &T) -> VigilResult<()> {
        (**self).write(value)
    }

    fn clear(&self) -> VigilResult<()> {
        (**self).clear()
    }
}
