//! Error types for go-outline
//!
//! Fatal errors (`OutlineError`) abort the run before any output is written.
//! Non-fatal diagnostics (`OutlineWarning`) drop a single construct from the
//! outline and are reported on the log channel only.

use crate::extractors::base::SourcePos;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Result type alias for outline operations
pub type Result<T> = std::result::Result<T, OutlineError>;

#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum OutlineError {
    /// Neither inline source nor a file path was supplied
    #[error("invalid usage: no source or file provided")]
    Usage,

    /// The grammar rejected the input
    #[error("{}", format_location(.file, .line, .column, .message))]
    Parse {
        /// Diagnostic file name (may be empty for anonymous inline source)
        file: String,
        /// 1-based line
        line: usize,
        /// 1-based byte column
        column: usize,
        message: String,
    },

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The Go grammar could not be loaded into the parser
    #[error("failed to load Go grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// tree-sitter gave up without producing a tree
    #[error("parser produced no syntax tree for {0}")]
    NoTree(String),

    #[error("failed to serialize outline: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn format_location(file: &str, line: &usize, column: &usize, message: &str) -> String {
    if file.is_empty() {
        format!("{}:{}: {}", line, column, message)
    } else {
        format!("{}:{}:{}: {}", file, line, column, message)
    }
}

/// A construct that was left out of the outline
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum OutlineWarning {
    #[error("unknown declaration @{pos} ({kind})")]
    UnrecognizedDeclaration { kind: String, pos: SourcePos },

    #[error("unknown token type: {keyword} (spec kind {kind} @{pos})")]
    UnrecognizedSpec {
        keyword: String,
        kind: String,
        pos: SourcePos,
    },

    #[error("failed to parse receiver type of {method}: {reason}")]
    ReceiverRender { method: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_includes_file_name() {
        let err = OutlineError::Parse {
            file: "main.go".to_string(),
            line: 3,
            column: 7,
            message: "expected '}', found 'EOF'".to_string(),
        };
        assert_eq!(err.to_string(), "main.go:3:7: expected '}', found 'EOF'");
    }

    #[test]
    fn test_parse_error_without_file_name() {
        let err = OutlineError::Parse {
            file: String::new(),
            line: 1,
            column: 1,
            message: "expected 'package', found 'func'".to_string(),
        };
        assert_eq!(err.to_string(), "1:1: expected 'package', found 'func'");
    }

    #[test]
    fn test_usage_error_message() {
        assert_eq!(
            OutlineError::Usage.to_string(),
            "invalid usage: no source or file provided"
        );
    }
}
