//! Error types for loading and splitting

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for load and split operations
///
/// Every failure keeps its kind: open failures stay distinguishable from
/// mid-stream read failures, and the no-content case has its own variant
/// rather than masquerading as an I/O problem. Allocation failure is not
/// represented here; growing the buffer aborts the process on out-of-memory,
/// which is the global allocator's policy.
#[derive(Debug, Error)]
pub enum Error {
    /// The named source could not be opened.
    #[error("failed to open {}", path.display())]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The stream failed mid-read, distinct from end-of-stream.
    #[error("stream read failed after {bytes} bytes")]
    Read {
        /// Bytes successfully read before the failure
        bytes: usize,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Splitting produced zero lines: the input was empty or all newlines.
    #[error("no content: input is empty or contains only newlines")]
    NoContent,
}

/// Result type for load and split operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_names_the_path() {
        let err = Error::Open {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to open missing.txt");
    }

    #[test]
    fn read_error_reports_progress() {
        let err = Error::Read {
            bytes: 4096,
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        };
        assert_eq!(err.to_string(), "stream read failed after 4096 bytes");
    }

    #[test]
    fn io_cause_stays_reachable() {
        use std::error::Error as _;

        let err = Error::Open {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let cause = err.source().expect("open carries its I/O cause");
        assert!(cause.to_string().contains("not found"));
    }

    #[test]
    fn no_content_is_its_own_kind() {
        let err = Error::NoContent;
        assert!(err.to_string().starts_with("no content"));
        assert!(matches!(err, Error::NoContent));
    }
}
