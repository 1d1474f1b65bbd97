//! Line-by-line decoding shared by the file and in-memory logs.

use vigil_core::config::DecodeMode;
use vigil_core::errors::StorageError;
use vigil_core::traits::{IEventSink, LoadReport, Record};
use vigil_core::MonitorEvent;

use crate::envelope;

pub(crate) struct LineScanner<'a, T> {
    store: &'a str,
    abort_on_failure: bool,
    sink: &'a dyn IEventSink,
    report: LoadReport<T>,
}

impl<'a, T: Record> LineScanner<'a, T> {
    /// Scanner for `load_all`: strict mode aborts at the first bad line.
    pub(crate) fn for_mode(store: &'a str, mode: DecodeMode, sink: &'a dyn IEventSink) -> Self {
        Self::new(store, mode == DecodeMode::Strict, sink)
    }

    /// Scanner for `load_report`: never aborts.
    pub(crate) fn tolerant(store: &'a str, sink: &'a dyn IEventSink) -> Self {
        Self::new(store, false, sink)
    }

    fn new(store: &'a str, abort_on_failure: bool, sink: &'a dyn IEventSink) -> Self {
        Self {
            store,
            abort_on_failure,
            sink,
            report: LoadReport::default(),
        }
    }

    /// Feed one physical line (1-based `line`). Blank lines are skipped.
    pub(crate) fn push(&mut self, line: usize, bytes: &[u8]) -> Result<(), StorageError> {
        let decoded = match std::str::from_utf8(bytes) {
            Ok(text) if text.trim().is_empty() => return Ok(()),
            Ok(text) => envelope::decode::<T>(text.trim(), self.store, line),
            Err(e) => Err(StorageError::Decode {
                path: self.store.to_string(),
                line,
                reason: e.to_string(),
            }),
        };

        match decoded {
            Ok(record) => {
                self.report.records.push(record);
                Ok(())
            }
            Err(err) if self.abort_on_failure => Err(err),
            Err(err) => {
                self.sink.emit(&MonitorEvent::DecodeRejected {
                    store: self.store.to_string(),
                    line,
                    reason: err.to_string(),
                });
                self.report.failures.push(err);
                Ok(())
            }
        }
    }

    pub(crate) fn finish(self) -> LoadReport<T> {
        self.report
    }
}
