//! Linecut CLI library
//!
//! This library provides the command-line interface for the linecut
//! whole-stream line splitter: argument parsing, source selection, optional
//! pattern filtering, and output rendering.

pub mod cli;
pub mod output;

pub use cli::CliArgs;
