//! Whole-stream loading into a single terminated buffer
//!
//! Reads a byte stream of unknown size into one contiguous allocation, then
//! seals it with a NUL sentinel so downstream scans never run past
//! materialized data. Growth is geometric (doubling); the final buffer is
//! trimmed to contents plus the sentinel, so callers observe the same result
//! regardless of how many growth steps the load took.

use crate::error::{Error, Result};
use std::fmt;
use std::io::{ErrorKind, Read};

/// Terminator byte written after the logical contents and over every newline
/// separator the splitter consumes.
pub const SENTINEL: u8 = 0;

/// Buffer capacity before the first growth step.
const INITIAL_CAPACITY: usize = 4096;

/// A complete input held in one contiguous allocation.
///
/// Storage is always the logical contents followed by a single [`SENTINEL`]
/// byte at offset [`len`](Self::len). The contents may hold any byte values,
/// embedded NULs included; the logical length is authoritative, never the
/// sentinel. The splitter rewrites separator bytes inside the contents in
/// place but never resizes the buffer.
pub struct LoadedBuffer {
    bytes: Vec<u8>,
}

impl fmt::Debug for LoadedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedBuffer")
            .field("len", &self.len())
            .finish()
    }
}

impl LoadedBuffer {
    /// Read a stream to its end and seal the result.
    ///
    /// Reads into the buffer at the current fill offset, doubling the buffer
    /// whenever it fills, until the reader reports end-of-stream. Interrupted
    /// reads are retried; any other read failure is terminal and reports how
    /// many bytes had been read. An empty stream is valid and yields a
    /// zero-length buffer holding only the sentinel.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = vec![0u8; INITIAL_CAPACITY];
        let mut filled = 0;

        loop {
            if filled == bytes.len() {
                let grown = bytes.len().saturating_mul(2);
                bytes.resize(grown, 0);
            }
            match reader.read(&mut bytes[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(Error::Read {
                        bytes: filled,
                        source,
                    })
                }
            }
        }

        bytes.truncate(filled);
        Ok(Self::seal(bytes))
    }

    /// Wrap bytes that are already in memory.
    ///
    /// Skips the read loop and goes straight to sealing; the observable
    /// result is identical to streaming the same bytes through
    /// [`from_reader`](Self::from_reader).
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::seal(bytes)
    }

    /// Append the sentinel and trim storage to contents + 1.
    fn seal(mut bytes: Vec<u8>) -> Self {
        bytes.push(SENTINEL);
        bytes.shrink_to_fit();
        Self { bytes }
    }

    /// Logical length: the number of content bytes, sentinel excluded.
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Whether the buffer holds no content bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The content bytes, sentinel excluded.
    ///
    /// After a split, separator positions inside this region read back as
    /// [`SENTINEL`] instead of `\n`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// The content bytes plus the trailing sentinel.
    pub fn as_bytes_with_sentinel(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable view of the content region for the splitter.
    pub(crate) fn contents_mut(&mut self) -> &mut [u8] {
        let len = self.len();
        &mut self.bytes[..len]
    }
}
