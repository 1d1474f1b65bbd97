//! Append-only log backed by a line-delimited JSON file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, ErrorKind, Read, Seek, SeekFrom, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use vigil_core::config::DecodeMode;
use vigil_core::errors::{StorageError, VigilResult};
use vigil_core::traits::{IEventSink, IRecordLog, LoadReport, NullSink, Record};
use vigil_core::MonitorEvent;

use crate::envelope;
use crate::scan::LineScanner;

/// State of the last physical line before an append.
enum Tail {
    /// Empty file, or ends with `\n`.
    Clean,
    /// Ends with a complete record missing its newline.
    Unterminated,
    /// Ends with the fragment of an interrupted write, starting at this offset.
    Torn(u64),
}

/// One record per line, appended with a single write and synced to disk.
pub struct JsonlLog<T> {
    path: PathBuf,
    label: String,
    mode: DecodeMode,
    sink: Arc<dyn IEventSink>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> JsonlLog<T> {
    /// Open a log at `path`, creating its parent directory. The file itself
    /// is created lazily on first append.
    pub fn open(path: impl Into<PathBuf>) -> VigilResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::unavailable(parent, &e))?;
        }
        Ok(Self {
            label: path.display().to_string(),
            path,
            mode: DecodeMode::Strict,
            sink: Arc::new(NullSink),
            _record: PhantomData,
        })
    }

    pub fn with_mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn IEventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    fn scan(&self, mut scanner: LineScanner<'_, T>) -> VigilResult<LoadReport<T>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(scanner.finish()),
            Err(e) => return Err(StorageError::unavailable(&self.path, &e).into()),
        };

        for (idx, chunk) in BufReader::new(file).split(b'\n').enumerate() {
            let bytes = chunk.map_err(|e| StorageError::unavailable(&self.path, &e))?;
            scanner.push(idx + 1, &bytes)?;
        }
        Ok(scanner.finish())
    }

    fn inspect_tail(&self, file: &mut File, len: u64) -> io::Result<Tail> {
        if len == 0 {
            return Ok(Tail::Clean);
        }
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        if last[0] == b'\n' {
            return Ok(Tail::Clean);
        }

        // Walk back block by block to the start of the unterminated line.
        let mut block = [0u8; 4096];
        let mut start = len;
        while start > 0 {
            let step = start.min(block.len() as u64);
            let buf = &mut block[..step as usize];
            file.seek(SeekFrom::Start(start - step))?;
            file.read_exact(buf)?;
            if let Some(pos) = buf.iter().rposition(|&b| b == b'\n') {
                start = start - step + pos as u64 + 1;
                break;
            }
            start -= step;
        }

        let mut fragment = Vec::new();
        file.seek(SeekFrom::Start(start))?;
        std::io::Read::by_ref(file).take(len - start).read_to_end(&mut fragment)?;
        let complete = std::str::from_utf8(&fragment)
            .ok()
            .is_some_and(|text| envelope::decode::<T>(text.trim(), &self.label, 0).is_ok());
        Ok(if complete {
            Tail::Unterminated
        } else {
            Tail::Torn(start)
        })
    }
}

impl<T: Record> IRecordLog<T> for JsonlLog<T> {
    fn append(&self, record: &T) -> VigilResult<()> {
        // Serialize and validate before touching the file so a bad record writes nothing.
        let mut line = envelope::encode(record)?;
        line.push('\n');

        let unavailable = |e: io::Error| StorageError::unavailable(&self.path, &e);
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(unavailable)?;
        let len = file.metadata().map_err(unavailable)?.len();

        // A fragment left by an earlier interrupted write was never acknowledged;
        // cut it off so it cannot swallow this record.
        let mut rollback_to = len;
        match self.inspect_tail(&mut file, len).map_err(unavailable)? {
            Tail::Clean => {}
            Tail::Unterminated => line.insert(0, '\n'),
            Tail::Torn(start) => {
                file.set_len(start).map_err(unavailable)?;
                rollback_to = start;
            }
        }

        if let Err(e) = file.write_all(line.as_bytes()).and_then(|()| file.sync_data()) {
            // Best effort: the write error is the one reported.
            let _ = file.set_len(rollback_to).and_then(|()| file.sync_data());
            return Err(unavailable(e).into());
        }

        self.sink.emit(&MonitorEvent::RecordAppended {
            store: self.label.clone(),
        });
        Ok(())
    }

    fn load_all(&self) -> VigilResult<Vec<T>> {
        let scanner = LineScanner::for_mode(&self.label, self.mode, self.sink.as_ref());
        Ok(self.scan(scanner)?.records)
    }

    fn load_report(&self) -> VigilResult<LoadReport<T>> {
        self.scan(LineScanner::tolerant(&self.label, self.sink.as_ref()))
    }

    fn clear(&self) -> VigilResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(StorageError::unavailable(&self.path, &e).into()),
        }
        self.sink.emit(&MonitorEvent::StoreCleared {
            store: self.label.clone(),
        });
        Ok(())
    }
}
