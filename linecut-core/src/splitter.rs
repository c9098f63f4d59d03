//! In-place line splitting over a loaded buffer
//!
//! Splits the contents of a [`LoadedBuffer`] into ordered line views without
//! copying a single line: each consumed newline separator is overwritten with
//! the sentinel and the line's position is recorded as an offset + length
//! pair into the buffer. Leading blank lines are discarded and interior runs
//! of blank lines collapse to one boundary, so no view is ever empty.

use crate::error::{Error, Result};
use crate::loader::{LoadedBuffer, SENTINEL};
use memchr::memchr;
use std::fmt;
use std::slice;

/// One line's position inside a loaded buffer.
///
/// `start + len` never exceeds the buffer's logical length, and the bytes in
/// between never include a separator. Lengths are explicit, so embedded NUL
/// bytes in line content are preserved rather than truncating the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSpan {
    /// Byte offset of the line's first byte
    pub start: usize,
    /// Byte length of the line, separator excluded
    pub len: usize,
}

impl LineSpan {
    /// Offset one past the line's last byte.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Ordered line views borrowed from a split buffer.
///
/// Holding a `Lines` keeps the buffer borrowed, so the views cannot outlive
/// or race the storage they point into. Views are listed in source order and
/// never overlap.
pub struct Lines<'a> {
    text: &'a [u8],
    spans: Vec<LineSpan>,
}

impl fmt::Debug for Lines<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lines")
            .field("len", &self.spans.len())
            .finish()
    }
}

impl<'a> Lines<'a> {
    /// Number of lines.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether the sequence holds no lines.
    ///
    /// Always false for a sequence returned by [`split_lines`]; zero lines is
    /// reported as [`Error::NoContent`] instead.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The line at `index`, as a slice of the underlying buffer.
    pub fn get(&self, index: usize) -> Option<&'a [u8]> {
        let span = self.spans.get(index)?;
        Some(&self.text[span.start..span.end()])
    }

    /// Iterate over the lines in source order.
    pub fn iter(&self) -> LineIter<'_> {
        LineIter::new(self.text, &self.spans)
    }

    /// The recorded positions, in source order.
    pub fn spans(&self) -> &[LineSpan] {
        &self.spans
    }
}

impl<'a, 's> IntoIterator for &'s Lines<'a> {
    type Item = &'s [u8];
    type IntoIter = LineIter<'s>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over line views.
#[derive(Debug, Clone)]
pub struct LineIter<'a> {
    text: &'a [u8],
    spans: slice::Iter<'a, LineSpan>,
}

impl<'a> LineIter<'a> {
    pub(crate) fn new(text: &'a [u8], spans: &'a [LineSpan]) -> Self {
        Self {
            text,
            spans: spans.iter(),
        }
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let span = self.spans.next()?;
        Some(&self.text[span.start..span.end()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.spans.size_hint()
    }
}

impl ExactSizeIterator for LineIter<'_> {}

/// Split a loaded buffer into lines, in place.
///
/// Destructive: every consumed newline separator in the buffer is overwritten
/// with the sentinel, which is why the buffer stays mutably borrowed for as
/// long as the returned views live. The contents are never resized and no
/// line is copied.
///
/// Policy, in scan order: leading newlines are skipped outright; each line
/// runs up to (excluding) the next newline; a run of newlines after a line's
/// separator collapses into that one boundary; a non-empty remainder with no
/// final newline is the last line. Input that yields zero lines — empty or
/// all newlines — is [`Error::NoContent`].
pub fn split_lines(buffer: &mut LoadedBuffer) -> Result<Lines<'_>> {
    let spans = split_spans(buffer)?;
    Ok(Lines {
        text: buffer.as_bytes(),
        spans,
    })
}

/// The in-place scan shared by [`split_lines`] and the owning composition.
pub(crate) fn split_spans(buffer: &mut LoadedBuffer) -> Result<Vec<LineSpan>> {
    let bytes = buffer.contents_mut();
    let mut spans = Vec::new();
    let mut pos = 0;

    // Leading blank lines are discarded, never recorded.
    while pos < bytes.len() && bytes[pos] == b'\n' {
        pos += 1;
    }

    while pos < bytes.len() {
        match memchr(b'\n', &bytes[pos..]) {
            Some(found) => {
                let nl = pos + found;
                spans.push(LineSpan {
                    start: pos,
                    len: nl - pos,
                });
                bytes[nl] = SENTINEL;
                pos = nl + 1;
                // Collapse the rest of the separator run into this boundary.
                while pos < bytes.len() && bytes[pos] == b'\n' {
                    bytes[pos] = SENTINEL;
                    pos += 1;
                }
            }
            None => {
                // No separator left: the remainder is the final line.
                spans.push(LineSpan {
                    start: pos,
                    len: bytes.len() - pos,
                });
                break;
            }
        }
    }

    if spans.is_empty() {
        return Err(Error::NoContent);
    }
    Ok(spans)
}
