//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one line of content per output line
///
/// Writes the line bytes verbatim, so binary content passes through
/// unmodified.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, line: &[u8], _number: usize, _offset: usize) -> Result<()> {
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
    fn writes_lines_verbatim() {
        let mut out = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut out);
            formatter.format_line(b"foo", 1, 0).unwrap();
            formatter.format_line(b"bar", 2, 4).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(out, b"foo\nbar\n");
    }

    #[test]
    fn binary_content_passes_through() {
        let mut out = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut out);
            formatter.format_line(b"a\0b\xff", 1, 0).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(out, b"a\0b\xff\n");
    }
}
