//! Whole-stream text ingestion with in-place line splitting
//!
//! This crate loads a complete byte stream — a file, standard input, or any
//! reader — into one contiguous sealed buffer, then splits that buffer into
//! line views in place: newline separators are overwritten with a sentinel
//! byte and each line is recorded as an offset + length pair into the buffer,
//! so no line is ever copied or allocated individually.
//!
//! Splitting policy: blank lines before the first content are discarded, runs
//! of blank lines between content collapse into a single boundary, and a final
//! line without a trailing newline is still a line. Input with no lines at all
//! is the distinct [`Error::NoContent`] rather than an empty success.
//!
//! # Example
//!
//! ```rust
//! use linecut_core::{split_lines, Source};
//!
//! let mut buffer = Source::from_text("\nfoo\n\nbar\nbaz").load()?;
//! let lines = split_lines(&mut buffer)?;
//!
//! assert_eq!(lines.len(), 3);
//! let collected: Vec<&[u8]> = lines.iter().collect();
//! assert_eq!(collected, [b"foo".as_slice(), b"bar", b"baz"]);
//! # Ok::<(), linecut_core::Error>(())
//! ```
//!
//! For callers that need to move the result around, [`load_lines`] returns an
//! owning [`LoadedLines`] holding the buffer and its spans together.

#![warn(missing_docs)]

pub mod error;
pub mod lines;
pub mod loader;
pub mod source;
pub mod splitter;

pub use error::{Error, Result};
pub use lines::{load_lines, LoadedLines};
pub use loader::{LoadedBuffer, SENTINEL};
pub use source::Source;
pub use splitter::{split_lines, LineIter, LineSpan, Lines};
