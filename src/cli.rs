//! CLI definition for the go-outline command-line interface.

use clap::Parser;

use crate::extractors::{ParseOptions, SourceRequest};

/// go-outline - structural outline of a Go source file
///
/// Prints the package and its top-level declarations as JSON on stdout.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "go-outline")]
#[command(version)]
#[command(about = "Print the top-level declarations of a Go file as JSON")]
pub struct Cli {
    /// Path to the Go file to outline (also used as the name in diagnostics)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Go source to outline instead of reading --file
    #[arg(long, value_name = "TEXT")]
    pub src: Option<String>,

    /// Only report the import declarations
    #[arg(long)]
    pub imports_only: bool,

    /// Enable debug output to stderr
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::from_flags(self.imports_only)
    }

    pub fn source_request(&self) -> SourceRequest {
        SourceRequest {
            source_text: self.src.clone(),
            file_path: self.file.clone().unwrap_or_default(),
            options: self.parse_options(),
        }
    }
}
