//! One-call load-and-split composition
//!
//! [`load_lines`] runs the loader and the splitter back to back and returns an
//! owning [`LoadedLines`]: the sealed buffer and the recorded spans in a
//! single movable value. Use it when the borrowed [`Lines`](crate::Lines)
//! result would tie the caller to a local buffer.

use crate::error::Result;
use crate::loader::LoadedBuffer;
use crate::source::Source;
use crate::splitter::{split_spans, LineIter, LineSpan};
use std::fmt;

/// Load a source and split it into lines in one call.
///
/// Fails with [`Error::Open`](crate::Error::Open) or
/// [`Error::Read`](crate::Error::Read) if loading does, and with
/// [`Error::NoContent`](crate::Error::NoContent) if the loaded bytes hold no
/// lines.
pub fn load_lines(source: Source) -> Result<LoadedLines> {
    let mut buffer = source.load()?;
    let spans = split_spans(&mut buffer)?;
    Ok(LoadedLines { buffer, spans })
}

/// An owned buffer together with the line spans recorded over it.
///
/// The arena-and-index counterpart of [`Lines`](crate::Lines): because the
/// value owns the buffer, it can be returned, stored, and moved freely, and
/// the views it hands out borrow from `self` instead of a caller-held buffer.
pub struct LoadedLines {
    buffer: LoadedBuffer,
    spans: Vec<LineSpan>,
}

impl fmt::Debug for LoadedLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedLines")
            .field("len", &self.spans.len())
            .field("buffer", &self.buffer)
            .finish()
    }
}

impl LoadedLines {
    /// Number of lines.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether the value holds no lines.
    ///
    /// Always false for a value returned by [`load_lines`]; zero lines is
    /// reported as an error instead.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The line at `index`, as a slice of the owned buffer.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        let span = self.spans.get(index)?;
        Some(&self.buffer.as_bytes()[span.start..span.end()])
    }

    /// Iterate over the lines in source order.
    pub fn iter(&self) -> LineIter<'_> {
        LineIter::new(self.buffer.as_bytes(), &self.spans)
    }

    /// The recorded positions, in source order.
    pub fn spans(&self) -> &[LineSpan] {
        &self.spans
    }

    /// The split buffer the spans index into.
    pub fn buffer(&self) -> &LoadedBuffer {
        &self.buffer
    }
}

impl<'s> IntoIterator for &'s LoadedLines {
    type Item = &'s [u8];
    type IntoIter = LineIter<'s>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn load_lines_from_bytes() {
        let lines = load_lines(Source::from_bytes(b"\nfoo\n\nbar\nbaz".to_vec())).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.get(0), Some(b"foo".as_slice()));
        assert_eq!(lines.get(1), Some(b"bar".as_slice()));
        assert_eq!(lines.get(2), Some(b"baz".as_slice()));
        assert_eq!(lines.get(3), None);
    }

    #[test]
    fn result_moves_as_one_value() {
        fn produce() -> LoadedLines {
            load_lines(Source::from_text("moved\nout")).unwrap()
        }
        let lines = produce();
        let collected: Vec<&[u8]> = lines.iter().collect();
        assert_eq!(collected, [b"moved".as_slice(), b"out".as_slice()]);
    }

    #[test]
    fn empty_source_is_no_content() {
        let err = load_lines(Source::from_bytes(Vec::new())).unwrap_err();
        assert!(matches!(err, Error::NoContent));
    }

    #[test]
    fn buffer_shows_consumed_separators() {
        let lines = load_lines(Source::from_text("a\n\nb")).unwrap();
        assert_eq!(lines.buffer().as_bytes(), b"a\0\0b");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn open_failures_pass_through() {
        let err = load_lines(Source::from_file("no/such/file")).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
    }
}
