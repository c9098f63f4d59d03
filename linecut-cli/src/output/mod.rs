//! Output formatting module

use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single line
    ///
    /// `number` is the line's 1-based position in the split input and
    /// `offset` its byte offset in the loaded buffer.
    fn format_line(&mut self, line: &[u8], number: usize, offset: usize) -> Result<()>;

    /// Finalize output (e.g., close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod numbered;
pub mod text;

pub use json::JsonFormatter;
pub use numbered::NumberedFormatter;
pub use text::TextFormatter;
