//! Argument parsing and command execution

use crate::output::{JsonFormatter, NumberedFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Parser;
use linecut_core::{load_lines, LoadedLines, Source};
use regex::bytes::Regex;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Split a file or standard input into lines, collapsing blank lines.
#[derive(Debug, Parser)]
#[command(name = "linecut", version, about)]
pub struct CliArgs {
    /// Input file (default: stdin; "-" also selects stdin)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print only lines matching this regular expression
    #[arg(short, long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Print only the number of lines
    #[arg(short, long)]
    pub count: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line of content per output line
    Text,
    /// Line number, a tab, then the content
    Numbered,
    /// JSON array of lines with offsets and lengths
    Json,
}

impl CliArgs {
    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting line splitting");
        log::debug!("Arguments: {self:?}");

        let pattern = self
            .pattern
            .as_deref()
            .map(Regex::new)
            .transpose()
            .with_context(|| {
                format!(
                    "Invalid pattern: {}",
                    self.pattern.as_deref().unwrap_or_default()
                )
            })?;

        let lines = load_lines(self.source()).context("Failed to load input")?;
        log::info!("Split input into {} lines", lines.len());

        if self.count {
            return self.write_count(&lines, pattern.as_ref());
        }
        self.write_lines(&lines, pattern.as_ref())
    }

    /// The source named by the positional argument: a path, or stdin when
    /// absent or "-".
    fn source(&self) -> Source {
        match &self.path {
            Some(path) if path.as_os_str() != "-" => Source::from_file(path.clone()),
            _ => Source::stdin(),
        }
    }

    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }

    /// Lazily opened output target.
    fn writer(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout().lock())),
        }
    }

    fn write_count(&self, lines: &LoadedLines, pattern: Option<&Regex>) -> Result<()> {
        let count = match pattern {
            Some(re) => lines.iter().filter(|line| re.is_match(line)).count(),
            None => lines.len(),
        };
        let mut writer = self.writer()?;
        writeln!(writer, "{count}")?;
        writer.flush()?;
        Ok(())
    }

    fn write_lines(&self, lines: &LoadedLines, pattern: Option<&Regex>) -> Result<()> {
        let writer = self.writer()?;
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Numbered => Box::new(NumberedFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        let mut emitted = 0usize;
        for (index, (span, line)) in lines.spans().iter().zip(lines.iter()).enumerate() {
            if let Some(re) = pattern {
                if !re.is_match(line) {
                    continue;
                }
            }
            emitted += 1;
            // Numbers refer to positions in the split input, filter or not.
            formatter.format_line(line, index + 1, span.start)?;
        }
        formatter.finish()?;

        log::debug!("Emitted {emitted} of {} lines", lines.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn stdin_when_no_path() {
        let args = CliArgs::parse_from(["linecut"]);
        assert!(matches!(args.source(), Source::Stdin));
    }

    #[test]
    fn dash_selects_stdin() {
        let args = CliArgs::parse_from(["linecut", "-"]);
        assert!(matches!(args.source(), Source::Stdin));
    }

    #[test]
    fn path_selects_file() {
        let args = CliArgs::parse_from(["linecut", "input.txt"]);
        match args.source() {
            Source::File(path) => assert_eq!(path, PathBuf::from("input.txt")),
            other => panic!("expected File source, got {other:?}"),
        }
    }

    #[test]
    fn format_defaults_to_text() {
        let args = CliArgs::parse_from(["linecut"]);
        assert!(matches!(args.format, OutputFormat::Text));
    }
}
