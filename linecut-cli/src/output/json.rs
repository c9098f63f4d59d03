//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs lines as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    lines: Vec<LineData>,
}

/// Data structure for JSON output
///
/// `length` is the line's byte length in the buffer; `text` replaces any
/// invalid UTF-8 with the replacement character, so the two can disagree for
/// binary input.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineData {
    /// Line number in the split input (1-based)
    pub number: usize,
    /// The line content
    pub text: String,
    /// Starting byte offset in the loaded buffer
    pub offset: usize,
    /// Byte length of the line
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, line: &[u8], number: usize, offset: usize) -> Result<()> {
        self.lines.push(LineData {
            number,
            text: String::from_utf8_lossy(line).into_owned(),
            offset,
            length: line.len(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.lines)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_a_json_array_with_metadata() {
        let mut out = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut out);
            formatter.format_line(b"foo", 1, 1).unwrap();
            formatter.format_line(b"bar", 2, 6).unwrap();
            formatter.finish().unwrap();
        }

        let parsed: Vec<LineData> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].text, "foo");
        assert_eq!(parsed[0].number, 1);
        assert_eq!(parsed[0].offset, 1);
        assert_eq!(parsed[1].offset, 6);
        assert_eq!(parsed[1].length, 3);
    }

    #[test]
    fn empty_run_still_emits_an_array() {
        let mut out = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut out);
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");
    }
}
