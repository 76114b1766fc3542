//! OutlineManager - Public API for outline extraction
//!
//! Handles ingestion (reading and parsing the source) and delegates the
//! declaration walk to the Go extractor. This module is the main entry point
//! for clients that want an outline for a file or an inline snippet.

use crate::error::{OutlineError, OutlineWarning, Result};
use crate::extractors::base::FileOutline;
use crate::extractors::go::GoExtractor;
use crate::extractors::syntax_tree::{ParseOptions, SyntaxTree};
use crate::language::{go_language, is_go_path};
use std::path::Path;
use tree_sitter::Parser;

/// What to outline and how.
///
/// Inline text wins over the file path; the path then only names the source
/// in diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRequest {
    pub source_text: Option<String>,
    pub file_path: String,
    pub options: ParseOptions,
}

/// Where the text of a request comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOrigin<'a> {
    Inline(&'a str),
    File(&'a str),
}

impl SourceRequest {
    pub fn from_text(source_text: impl Into<String>) -> Self {
        Self {
            source_text: Some(source_text.into()),
            ..Self::default()
        }
    }

    pub fn from_file(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Self::default()
        }
    }

    pub fn with_file_name(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = file_path.into();
        self
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolve the input, failing with `OutlineError::Usage` when there is none
    pub fn origin(&self) -> Result<SourceOrigin<'_>> {
        match self.source_text.as_deref() {
            Some(text) if !text.is_empty() => Ok(SourceOrigin::Inline(text)),
            _ if !self.file_path.is_empty() => Ok(SourceOrigin::File(&self.file_path)),
            _ => Err(OutlineError::Usage),
        }
    }
}

/// Manager for Go outline extraction
pub struct OutlineManager {
    // Stateless: every call builds its own parser and extractor
}

impl Default for OutlineManager {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineManager {
    pub fn new() -> Self {
        Self {}
    }

    /// Read (if needed) and parse the requested source into a validated tree
    pub fn ingest(&self, request: &SourceRequest) -> Result<SyntaxTree> {
        let source = match request.origin()? {
            SourceOrigin::Inline(text) => text.to_string(),
            SourceOrigin::File(path) => {
                if !is_go_path(Path::new(path)) {
                    tracing::debug!("{} has no .go extension, parsing as Go anyway", path);
                }
                std::fs::read_to_string(path).map_err(|source| OutlineError::Io {
                    path: path.into(),
                    source,
                })?
            }
        };

        self.parse_source(&request.file_path, source, request.options)
    }

    /// Parse `source` with the Go grammar and apply the toolchain checks
    pub fn parse_source(
        &self,
        file_name: &str,
        source: String,
        options: ParseOptions,
    ) -> Result<SyntaxTree> {
        let mut parser = Parser::new();
        parser.set_language(&go_language())?;

        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| OutlineError::NoTree(file_name.to_string()))?;

        let tree = SyntaxTree::new(file_name.to_string(), source, tree, options)?;
        tracing::debug!(
            "Parsed {} bytes as package {} ({})",
            tree.source().len(),
            tree.package_name(),
            if file_name.is_empty() { "<source>" } else { file_name }
        );
        Ok(tree)
    }

    /// Ingest and build the outline in one go
    pub fn outline(&self, request: &SourceRequest) -> Result<(FileOutline, Vec<OutlineWarning>)> {
        let tree = self.ingest(request)?;
        let mut extractor = GoExtractor::new(tree.file_name());
        let outline = extractor.extract_outline(&tree);
        Ok((outline, extractor.into_warnings()))
    }
}
