//! Input cache for storing puzzle inputs locally

use crate::buffer::{self, BufferError};
use crate::error::{CacheWriteError, InputError};
use crate::key::PuzzleKey;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File-based cache for puzzle inputs
///
/// Directory structure: `{dir}/{year}-{day:02}.txt`
#[derive(Debug, Clone)]
pub struct InputCache {
    dir: PathBuf,
}

impl InputCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the cache path for a puzzle
    pub fn cache_path(&self, key: PuzzleKey) -> PathBuf {
        self.dir.join(key.file_name())
    }

    /// Check if input is cached
    pub fn contains(&self, key: PuzzleKey) -> bool {
        self.cache_path(key).is_file()
    }

    /// Read cached input, or `None` if there is no cache file
    ///
    /// An existing file is authoritative, even when empty. Any failure other
    /// than "not found" is an error rather than a miss.
    pub fn get(&self, key: PuzzleKey) -> Result<Option<Vec<u8>>, InputError> {
        let path = self.cache_path(key);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(InputError::ReadFailure { path, source }),
        };

        match buffer::read_to_end(file) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(BufferError::Io(source)) => Err(InputError::ReadFailure { path, source }),
            Err(BufferError::Allocation(e)) => Err(InputError::AllocationFailure(e)),
        }
    }

    /// Store input in cache, replacing any existing file atomically
    ///
    /// The bytes land in a temporary file next to the target and are renamed
    /// over it, so an interrupted write never leaves a truncated cache file.
    pub fn put(&self, key: PuzzleKey, input: &[u8]) -> Result<PathBuf, CacheWriteError> {
        let path = self.cache_path(key);

        fs::create_dir_all(&self.dir).map_err(|source| CacheWriteError::DirCreation {
            path: self.dir.clone(),
            source,
        })?;

        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(input)?;
        temp.as_file().sync_all()?;
        temp.persist(&path)
            .map_err(|e| CacheWriteError::Persist {
                path: path.clone(),
                source: e.error,
            })?;

        Ok(path)
    }
}
