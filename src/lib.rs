// go-outline - structural outline of Go source files
//
// Parses one Go file with tree-sitter and reports its package plus a flat list
// of top-level declarations with byte spans, rendered as JSON.

pub mod cli;
pub mod error;
pub mod extractors;
pub mod language;

pub use error::{OutlineError, OutlineWarning, Result};
pub use extractors::{
    to_json, Declaration, DeclarationKind, FileOutline, GoExtractor, OutlineManager,
    ParseOptions, SourcePos, SourceRequest, Span, SyntaxTree,
};

/// Outline the requested source.
///
/// Returns the outline together with the non-fatal warnings raised while
/// walking the file; warnings are also logged through `tracing`.
pub fn outline(request: &SourceRequest) -> Result<(FileOutline, Vec<OutlineWarning>)> {
    OutlineManager::new().outline(request)
}
