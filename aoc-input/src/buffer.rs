//! Grow-by-doubling reader shared by the cache and network paths

use std::collections::TryReserveError;
use std::io::{ErrorKind, Read};
use thiserror::Error;

/// Starting capacity of the input buffer in bytes
pub const INITIAL_CAPACITY: usize = 1024;

/// Errors while draining a reader into a [`GrowableBuffer`]
#[derive(Error, Debug)]
pub enum BufferError {
    /// The underlying reader failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Doubling the buffer failed
    #[error("Allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Byte buffer that doubles its capacity each time it fills up
///
/// Tracks the exact number of bytes written so zero bytes in the content are
/// kept as data.
#[derive(Debug)]
pub struct GrowableBuffer {
    data: Vec<u8>,
    filled: usize,
}

impl GrowableBuffer {
    /// Create a buffer with [`INITIAL_CAPACITY`]
    pub fn new() -> Result<Self, TryReserveError> {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Create a buffer with a custom starting capacity (at least one byte)
    pub fn with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let capacity = capacity.max(1);
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)?;
        data.resize(capacity, 0);
        Ok(Self { data, filled: 0 })
    }

    /// Number of bytes read so far
    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Current capacity; only ever changes by doubling
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Read from `reader` until end-of-stream
    ///
    /// Short reads are fine; the loop only ends on a zero-length read.
    /// `Interrupted` reads are retried.
    pub fn fill_from<R: Read>(&mut self, reader: &mut R) -> Result<(), BufferError> {
        loop {
            if self.filled == self.data.len() {
                self.grow()?;
            }

            match reader.read(&mut self.data[self.filled..]) {
                Ok(0) => return Ok(()),
                Ok(n) => self.filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn grow(&mut self) -> Result<(), TryReserveError> {
        let additional = self.data.len();
        self.data.try_reserve_exact(additional)?;
        self.data.resize(self.data.len() + additional, 0);
        Ok(())
    }

    /// Exactly the bytes read, without the unused tail
    pub fn into_vec(mut self) -> Vec<u8> {
        self.data.truncate(self.filled);
        self.data
    }
}

/// Drain `reader` into a fresh buffer starting at [`INITIAL_CAPACITY`]
pub fn read_to_end<R: Read>(reader: R) -> Result<Vec<u8>, BufferError> {
    read_to_end_with_capacity(reader, INITIAL_CAPACITY)
}

/// Drain `reader` into a fresh buffer starting at `capacity`
pub fn read_to_end_with_capacity<R: Read>(
    mut reader: R,
    capacity: usize,
) -> Result<Vec<u8>, BufferError> {
    let mut buffer = GrowableBuffer::with_capacity(capacity)?;
    buffer.fill_from(&mut reader)?;
    Ok(buffer.into_vec())
}
