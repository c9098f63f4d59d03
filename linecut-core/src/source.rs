//! Source identifiers for stream loading
//!
//! A [`Source`] names where the bytes come from: standard input, a file path,
//! bytes already in memory, or an arbitrary reader. Opening and reading happen
//! only when [`load`](Source::load) is called.

use crate::error::{Error, Result};
use crate::loader::LoadedBuffer;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Where to load bytes from.
///
/// `File` paths are opened in binary mode when loaded; open failures surface
/// as [`Error::Open`] with the offending path. `Bytes` input skips the read
/// loop entirely. Any byte content is acceptable from any variant.
pub enum Source {
    /// The process's standard input
    Stdin,
    /// A file path, opened for binary reading at load time
    File(PathBuf),
    /// Bytes already in memory
    Bytes(Vec<u8>),
    /// An arbitrary byte stream
    Reader(Box<dyn Read>),
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.debug_tuple("Stdin").finish(),
            Source::File(path) => f.debug_tuple("File").field(path).finish(),
            Source::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Source::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Source {
    /// Standard input.
    pub fn stdin() -> Self {
        Source::Stdin
    }

    /// A file path.
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Source::File(path.into())
    }

    /// Bytes already in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Source::Bytes(bytes)
    }

    /// A string's bytes.
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Source::Bytes(text.into().into_bytes())
    }

    /// An arbitrary reader.
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Source::Reader(Box::new(reader))
    }

    /// Load the source to exhaustion into a sealed buffer.
    ///
    /// Consumes the source: a reader is read to its end, a file is opened and
    /// read, in-memory bytes are sealed as-is. An empty source is valid and
    /// yields an empty buffer.
    pub fn load(self) -> Result<LoadedBuffer> {
        match self {
            Source::Stdin => LoadedBuffer::from_reader(io::stdin().lock()),
            Source::File(path) => {
                let file = File::open(&path).map_err(|source| Error::Open { path, source })?;
                LoadedBuffer::from_reader(file)
            }
            Source::Bytes(bytes) => Ok(LoadedBuffer::from_bytes(bytes)),
            Source::Reader(reader) => LoadedBuffer::from_reader(reader),
        }
    }
}

impl From<Vec<u8>> for Source {
    fn from(bytes: Vec<u8>) -> Self {
        Source::Bytes(bytes)
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Bytes(text.into_bytes())
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::File(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn bytes_source_loads_verbatim() {
        let buffer = Source::from_bytes(b"alpha\nbeta".to_vec()).load().unwrap();
        assert_eq!(buffer.as_bytes(), b"alpha\nbeta");
    }

    #[test]
    fn text_source_loads_utf8_bytes() {
        let buffer = Source::from_text("héllo").load().unwrap();
        assert_eq!(buffer.as_bytes(), "héllo".as_bytes());
    }

    #[test]
    fn reader_source_loads_to_exhaustion() {
        let buffer = Source::from_reader(Cursor::new(b"streamed".to_vec()))
            .load()
            .unwrap();
        assert_eq!(buffer.as_bytes(), b"streamed");
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = Source::from_file("definitely/not/here.txt")
            .load()
            .unwrap_err();
        match err {
            Error::Open { path, .. } => {
                assert_eq!(path, PathBuf::from("definitely/not/here.txt"));
            }
            other => panic!("expected Open error, got {other:?}"),
        }
    }

    #[test]
    fn debug_hides_reader_and_byte_contents() {
        let reader = Source::from_reader(Cursor::new(Vec::new()));
        assert_eq!(format!("{reader:?}"), "Reader(\"<Reader>\")");

        let bytes = Source::from_bytes(vec![1, 2, 3]);
        assert_eq!(format!("{bytes:?}"), "Bytes(\"<3 bytes>\")");
    }
}
