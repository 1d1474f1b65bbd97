//! In-memory stores with the same encode/decode path as the file stores.
//!
//! Used by tests and by embedders that do not need durability. Availability
//! can be switched off to exercise storage-failure handling.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use vigil_core::config::DecodeMode;
use vigil_core::errors::{StorageError, VigilResult};
use vigil_core::traits::{IEventSink, IRecordLog, ISnapshotStore, LoadReport, NullSink, Record};
use vigil_core::MonitorEvent;

use crate::envelope;
use crate::scan::LineScanner;

struct Medium {
    name: String,
    available: AtomicBool,
}

impl Medium {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            available: AtomicBool::new(true),
        }
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StorageError::Unavailable {
                path: self.name.clone(),
                reason: "medium offline".into(),
            })
        }
    }

    fn lock<'a, V>(&self, m: &'a Mutex<V>) -> Result<MutexGuard<'a, V>, StorageError> {
        self.check()?;
        m.lock().map_err(|_| StorageError::Unavailable {
            path: self.name.clone(),
            reason: "lock poisoned".into(),
        })
    }
}

/// Append-only log holding encoded lines in memory.
pub struct MemoryLog<T> {
    medium: Medium,
    lines: Mutex<Vec<String>>,
    mode: DecodeMode,
    sink: Arc<dyn IEventSink>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> MemoryLog<T> {
    pub fn new(name: &str) -> Self {
        Self {
            medium: Medium::new(name),
            lines: Mutex::new(Vec::new()),
            mode: DecodeMode::Strict,
            sink: Arc::new(NullSink),
            _record: PhantomData,
        }
    }

    pub fn with_mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn IEventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Toggle availability; while offline every operation fails.
    pub fn set_available(&self, available: bool) {
        self.medium.available.store(available, Ordering::SeqCst);
    }

    /// Append a raw line verbatim, bypassing encoding.
    pub fn push_raw(&self, line: &str) -> VigilResult<()> {
        self.medium.lock(&self.lines)?.push(line.to_string());
        Ok(())
    }

    /// Number of physical lines, including blank and corrupt ones.
    pub fn raw_len(&self) -> VigilResult<usize> {
        Ok(self.medium.lock(&self.lines)?.len())
    }

    fn scan(&self, mut scanner: LineScanner<'_, T>) -> VigilResult<LoadReport<T>> {
        let lines = self.medium.lock(&self.lines)?;
        for (idx, line) in lines.iter().enumerate() {
            scanner.push(idx + 1, line.as_bytes())?;
        }
        Ok(scanner.finish())
    }
}

impl<T: Record> IRecordLog<T> for MemoryLog<T> {
    fn append(&self, record: &T) -> VigilResult<()> {
        let line = envelope::encode(record)?;
        self.medium.lock(&self.lines)?.push(line);
        self.sink.emit(&MonitorEvent::RecordAppended {
            store: self.medium.name.clone(),
        });
        Ok(())
    }

    fn load_all(&self) -> VigilResult<Vec<T>> {
        let scanner = LineScanner::for_mode(&self.medium.name, self.mode, self.sink.as_ref());
        Ok(self.scan(scanner)?.records)
    }

    fn load_report(&self) -> VigilResult<LoadReport<T>> {
        self.scan(LineScanner::tolerant(&self.medium.name, self.sink.as_ref()))
    }

    fn clear(&self) -> VigilResult<()> {
        self.medium.lock(&self.lines)?.clear();
        self.sink.emit(&MonitorEvent::StoreCleared {
            store: self.medium.name.clone(),
        });
        Ok(())
    }
}

/// Single-value store held in memory, stored encoded.
pub struct MemorySnapshot<T> {
    medium: Medium,
    body: Mutex<Option<String>>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> MemorySnapshot<T> {
    pub fn new(name: &str) -> Self {
        Self {
            medium: Medium::new(name),
            body: Mutex::new(None),
            _record: PhantomData,
        }
    }

    pub fn set_available(&self, available: bool) {
        self.medium.available.store(available, Ordering::SeqCst);
    }

    /// Replace the stored body verbatim, bypassing encoding.
    pub fn put_raw(&self, body: &str) -> VigilResult<()> {
        *self.medium.lock(&self.body)? = Some(body.to_string());
        Ok(())
    }
}

impl<T: Record> ISnapshotStore<T> for MemorySnapshot<T> {
    fn read(&self) -> VigilResult<Option<T>> {
        let body = self.medium.lock(&self.body)?;
        match body.as_deref() {
            None => Ok(None),
            Some(text) => Ok(Some(envelope::decode::<T>(text, &self.medium.name, 1)?)),
        }
    }

    fn write(&self, value: &T) -> VigilResult<()> {
        let encoded = envelope::encode_pretty(value)?;
        *self.medium.lock(&self.body)? = Some(encoded);
        Ok(())
    }

    fn clear(&self) -> VigilResult<()> {
        *self.medium.lock(&self.body)? = None;
        Ok(())
    }
}
