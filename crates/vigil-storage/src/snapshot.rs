//! Single-value store backed by one JSON file, replaced atomically on write.

use std::fs;
use std::io::{ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use vigil_core::errors::{StorageError, VigilResult};
use vigil_core::traits::{ISnapshotStore, Record};

use crate::envelope;

/// Whole-file snapshot. Writes go to a sibling temp file that is renamed
/// over the target, so readers see either the old or the new value.
pub struct JsonSnapshot<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> JsonSnapshot<T> {
    /// Open a snapshot at `path`, creating its parent directory.
    pub fn open(path: impl Into<PathBuf>) -> VigilResult<Self> {
        let path = path.into();
        fs::create_dir_all(parent_of(&path)).map_err(|e| StorageError::unavailable(&path, &e))?;
        Ok(Self {
            path,
            _record: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn parent_of(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

impl<T: Record> ISnapshotStore<T> for JsonSnapshot<T> {
    fn read(&self) -> VigilResult<Option<T>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::unavailable(&self.path, &e).into()),
        };
        let label = self.path.display().to_string();
        Ok(Some(envelope::decode::<T>(&text, &label, 1)?))
    }

    fn write(&self, value: &T) -> VigilResult<()> {
        let body = envelope::encode_pretty(value)?;
        let unavailable = |e: std::io::Error| StorageError::unavailable(&self.path, &e);

        let mut tmp = NamedTempFile::new_in(parent_of(&self.path)).map_err(unavailable)?;
        tmp.write_all(body.as_bytes()).map_err(unavailable)?;
        tmp.as_file().sync_all().map_err(unavailable)?;
        tmp.persist(&self.path).map_err(|e| unavailable(e.error))?;
        Ok(())
    }

    fn clear(&self) -> VigilResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::unavailable(&self.path, &e).into()),
        }
    }
}
