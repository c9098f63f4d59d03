//! Numbered text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Numbered formatter - line number, a tab, then the content
pub struct NumberedFormatter<W: Write> {
    writer: W,
}

impl<W: Write> NumberedFormatter<W> {
    /// Create a new numbered formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for NumberedFormatter<W> {
    fn format_line(&mut self, line: &[u8], number: usize, _offset: usize) -> Result<()> {
        write!(self.writer, "{number}\t")?;
        self.writer.write_all(line)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_each_line() {
        let mut out = Vec::new();
        {
            let mut formatter = NumberedFormatter::new(&mut out);
            formatter.format_line(b"foo", 1, 0).unwrap();
            formatter.format_line(b"bar", 3, 8).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(out, b"1\tfoo\n3\tbar\n");
    }
}
