//! JSON file collection
//!
//! Reads and rewrites a single JSON array document.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{BookingError, Result};

use super::Collection;

const INDENT: &[u8] = b"    ";

/// File-backed collection of `T`
pub struct JsonFileCollection<T> {
    /// Backing JSON document
    path: PathBuf,

    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Attach to an existing document
    ///
    /// A missing file is `StorageUnavailable`, never an empty collection.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(BookingError::StorageUnavailable { path });
        }

        tracing::debug!(path = %path.display(), "Opened collection");
        Ok(Self::attach(path))
    }

    /// Attach without checking the file
    ///
    /// Every operation reports `StorageUnavailable` until the file exists.
    pub fn attach(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }

    /// Create an empty document if none exists, then attach to it
    ///
    /// Existing documents are left untouched.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let collection = Self::attach(path);
        if !collection.path.exists() {
            collection.save_all(&[])?;
            tracing::info!(path = %collection.path.display(), "Initialized empty collection");
        }
        Ok(collection)
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file written before the rename over `path`
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Write the pretty-printed document to `staging` and sync it
    fn write_staging(staging: &Path, records: &[T]) -> Result<()> {
        let file = File::create(staging)?;
        let mut writer = BufWriter::new(file);
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
        records.serialize(&mut serializer)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(())
    }
}

impl<T> Collection<T> for JsonFileCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load_all(&self) -> Result<Vec<T>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(BookingError::StorageUnavailable {
                    path: self.path.clone(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let records: Vec<T> = serde_json::from_reader(BufReader::new(file))?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "Loaded collection");
        Ok(records)
    }

    fn save_all(&self, records: &[T]) -> Result<()> {
        let staging = self.staging_path();

        // Rename is atomic on the same filesystem: readers see old or new, never half
        let written = Self::write_staging(&staging, records)
            .and_then(|()| fs::rename(&staging, &self.path).map_err(BookingError::from));
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&staging) {
                tracing::debug!(path = %staging.display(), error = %cleanup, "Staging file not removed");
            }
            return Err(e);
        }

        tracing::debug!(path = %self.path.display(), count = records.len(), "Saved collection");
        Ok(())
    }
}
