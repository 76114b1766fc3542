//! Language Support - tree-sitter Go grammar configuration
//!
//! ALL grammar configuration goes through here so the parser version pinned in
//! Cargo.toml is the only place the node vocabulary comes from.

use std::path::Path;

/// Get the tree-sitter Go grammar
pub fn go_language() -> tree_sitter::Language {
    tree_sitter_go::LANGUAGE.into()
}

/// Detect language from file extension
///
/// Only Go is outlined; anything else is reported as unknown.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "go" => Some("go"),
        _ => None,
    }
}

/// Whether `path` carries a Go source extension
pub fn is_go_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(detect_language_from_extension)
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_language_loads_into_parser() {
        let mut parser = tree_sitter::Parser::new();
        assert!(parser.set_language(&go_language()).is_ok());
    }

    #[test]
    fn test_detect_language_from_extension() {
        assert_eq!(detect_language_from_extension("go"), Some("go"));
        assert_eq!(detect_language_from_extension("rs"), None);
    }

    #[test]
    fn test_is_go_path() {
        assert!(is_go_path(Path::new("cmd/main.go")));
        assert!(!is_go_path(Path::new("README.md")));
        assert!(!is_go_path(Path::new("Makefile")));
    }
}
