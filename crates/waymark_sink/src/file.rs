//! File-based sink for writing data files.

use crate::error::{SinkError, SinkResult};
use crate::sink::SegmentSink;
use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// A file-based segment sink.
///
/// This sink writes segments to a file using OS file APIs. It tracks the
/// append position itself so `position()` never touches the file.
///
/// # Durability
///
/// - `flush()` calls `File::flush()` to push data to the OS
/// - [`FileSink::sync`] calls `File::sync_all()` to ensure data is on disk
///
/// # Example
///
/// ```no_run
/// use waymark_sink::{FileSink, SegmentSink};
/// use std::path::Path;
///
/// let mut sink = FileSink::create(Path::new("graph.bin")).unwrap();
/// sink.append(b"segment bytes").unwrap();
/// sink.sync().unwrap();  // Ensure data is durable
/// ```
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
    size: u64,
}

impl FileSink {
    /// Creates a new data file at the given path, truncating any existing one.
    ///
    /// Segment output always starts from an empty file; a half-written data
    /// file is useless to readers.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create(path: &Path) -> SinkResult<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        tracing::debug!(path = %path.display(), "created data file sink");

        Ok(Self {
            path: path.to_path_buf(),
            file,
            size: 0,
        })
    }

    /// Creates a new data file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created or the file cannot
    /// be created.
    pub fn create_with_dirs(path: &Path) -> SinkResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::create(path)
    }

    /// Returns the path to the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Syncs all data and metadata to durable storage.
    ///
    /// This is a stronger guarantee than `flush` - it ensures that file
    /// metadata is also durable.
    ///
    /// # Errors
    ///
    /// Returns an error if the sync operation fails.
    pub fn sync(&mut self) -> SinkResult<()> {
        self.file.sync_all()?;
        Ok(())
    }
}

impl SegmentSink for FileSink {
    fn position(&self) -> u64 {
        self.size
    }

    fn append(&mut self, data: &[u8]) -> SinkResult<u64> {
        let offset = self.size;
        if data.is_empty() {
            return Ok(offset);
        }

        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write_all(data)?;
        self.size += data.len() as u64;

        Ok(offset)
    }

    fn patch_at(&mut self, offset: u64, data: &[u8]) -> SinkResult<()> {
        let end = offset.saturating_add(data.len() as u64);

        if offset > self.size || end > self.size {
            return Err(SinkError::PatchOutOfBounds {
                offset,
                len: data.len(),
                size: self.size,
            });
        }

        if data.is_empty() {
            return Ok(());
        }

        // Seek back, overwrite, and leave the append position untouched.
        // The next append seeks to `self.size` itself, so no restoring seek
        // is needed here.
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write_all(data)?;

        Ok(())
    }

    fn flush(&mut self) -> SinkResult<()> {
        self.file.flush()?;
        Ok(())
    }
}
