//! Immutable syntax tree handle produced by ingestion.
//!
//! Wraps the tree-sitter tree together with its source text and enforces the
//! checks the Go toolchain applies on top of the raw grammar: the file must
//! open with a package clause, only declarations may follow it, imports must
//! precede other declarations, and any `ERROR`/`MISSING` node in the checked
//! region rejects the whole file.

use crate::error::{OutlineError, Result};
use crate::extractors::base::tree_methods::{
    find_first_error, first_leaf, named_children_without_comments, truncate_string, COMMENT_KIND,
};
use crate::extractors::base::Span;
use tree_sitter::{Node, Point, Tree};

const PACKAGE_CLAUSE: &str = "package_clause";
const IMPORT_DECLARATION: &str = "import_declaration";
/// Top-level node kinds Go accepts after the package clause
const DECLARATION_KINDS: [&str; 6] = [
    "import_declaration",
    "function_declaration",
    "method_declaration",
    "type_declaration",
    "const_declaration",
    "var_declaration",
];

/// How much of the file the grammar pass should honour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Stop after the import declarations; bodies are neither validated nor outlined
    pub imports_only: bool,
}

impl ParseOptions {
    pub fn imports_only() -> Self {
        Self { imports_only: true }
    }

    pub fn from_flags(imports_only: bool) -> Self {
        if imports_only {
            Self::imports_only()
        } else {
            Self::default()
        }
    }
}

pub struct SyntaxTree {
    file_name: String,
    source: String,
    tree: Tree,
    options: ParseOptions,
    /// Byte offset where the honoured region ends
    region_end: usize,
    /// Byte range of the `package` keyword up to the end of the package name
    package_start: usize,
    package_name_range: (usize, usize),
}

impl std::fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("file_name", &self.file_name)
            .field("package", &self.package_name())
            .field("options", &self.options)
            .field("region_end", &self.region_end)
            .finish()
    }
}

impl SyntaxTree {
    /// Validate a freshly parsed tree and wrap it.
    ///
    /// Fails with `OutlineError::Parse` when the tree is rejected.
    pub fn new(
        file_name: String,
        source: String,
        tree: Tree,
        options: ParseOptions,
    ) -> Result<Self> {
        let layout = validate(&tree, &source, &file_name, options)?;

        Ok(Self {
            file_name,
            source,
            tree,
            options,
            region_end: layout.region_end,
            package_start: layout.package_start,
            package_name_range: layout.package_name_range,
        })
    }

    /// Name used in diagnostics (the file path, or the name given for inline source)
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn package_name(&self) -> &str {
        let (start, end) = self.package_name_range;
        self.source.get(start..end).unwrap_or("")
    }

    /// Top-level declarations in source order, package clause and comments excluded.
    ///
    /// In imports-only mode only the leading import declarations are returned.
    pub fn declarations(&self) -> Vec<Node<'_>> {
        named_children_without_comments(self.root_node())
            .into_iter()
            .filter(|node| node.kind() != PACKAGE_CLAUSE && node.start_byte() < self.region_end)
            .collect()
    }

    /// From the `package` keyword to the end of the last declaration
    /// (or of the package name when there are none)
    pub fn span(&self) -> Span {
        let end = self
            .declarations()
            .last()
            .map(|node| node.end_byte())
            .unwrap_or(self.package_name_range.1);
        Span::from_bytes(self.package_start, end)
    }

    /// Literal source text covered by `node`
    pub fn node_text(&self, node: &Node<'_>) -> &str {
        self.source
            .get(node.start_byte()..node.end_byte())
            .unwrap_or("")
    }
}

/// Byte offsets recorded once the tree has been accepted
struct Layout {
    region_end: usize,
    package_start: usize,
    package_name_range: (usize, usize),
}

fn validate(tree: &Tree, source: &str, file_name: &str, options: ParseOptions) -> Result<Layout> {
    let root = tree.root_node();
    let reject = |at: Point, message: String| OutlineError::Parse {
        file: file_name.to_string(),
        line: at.row + 1,
        column: at.column + 1,
        message,
    };
    if root.is_error() {
        let (at, message) = describe_error(root, source);
        return Err(reject(at, message));
    }

    let mut cursor = root.walk();
    let significant: Vec<Node<'_>> = root
        .children(&mut cursor)
        .filter(|node| {
            (node.is_named() || node.is_error() || node.is_missing())
                && node.kind() != COMMENT_KIND
        })
        .collect();

    let region_end = if options.imports_only {
        significant
            .iter()
            .find(|node| !matches!(node.kind(), PACKAGE_CLAUSE | IMPORT_DECLARATION))
            .map(|node| node.start_byte())
            .unwrap_or(usize::MAX)
    } else {
        usize::MAX
    };

    let in_region = significant
        .iter()
        .copied()
        .filter(|node| node.start_byte() < region_end);
    if let Some(error) = in_region.filter_map(find_first_error).next() {
        let (at, message) = describe_error(error, source);
        return Err(reject(at, message));
    }

    let package = match significant.first() {
        Some(node) if node.kind() == PACKAGE_CLAUSE => *node,
        Some(node) => {
            let found = token_text(first_leaf(*node), source);
            return Err(reject(
                node.start_position(),
                format!("expected 'package', found '{}'", found),
            ));
        }
        None => {
            return Err(reject(
                eof_point(source),
                "expected 'package', found 'EOF'".to_string(),
            ))
        }
    };

    // Statements the grammar tolerates at file level are not declarations
    let mut seen_other = false;
    for node in significant
        .iter()
        .skip(1)
        .filter(|node| node.start_byte() < region_end)
    {
        if !DECLARATION_KINDS.contains(&node.kind()) {
            let found = token_text(first_leaf(*node), source);
            return Err(reject(
                node.start_position(),
                format!("expected declaration, found '{}'", found),
            ));
        }
        if node.kind() != IMPORT_DECLARATION {
            seen_other = true;
        } else if seen_other {
            return Err(reject(
                node.start_position(),
                "imports must appear before other declarations".to_string(),
            ));
        }
    }

    let name = named_children_without_comments(package)
        .into_iter()
        .find(|child| child.kind() == "package_identifier")
        .ok_or_else(|| {
            reject(
                package.start_position(),
                "expected package name".to_string(),
            )
        })?;

    Ok(Layout {
        region_end,
        package_start: package.start_byte(),
        package_name_range: (name.start_byte(), name.end_byte()),
    })
}

fn token_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    source.get(node.start_byte()..node.end_byte()).unwrap_or("")
}

/// Position and message for the first `ERROR`/`MISSING` node.
///
/// Anything cut off by the end of input is reported at EOF, naming the
/// innermost delimiter left open.
fn describe_error(node: Node<'_>, source: &str) -> (Point, String) {
    let content_end = source.trim_end().len();
    if node.is_missing() {
        return if node.start_byte() >= content_end {
            (
                eof_point(source),
                format!("expected '{}', found 'EOF'", node.kind()),
            )
        } else {
            (node.start_position(), format!("expected '{}'", node.kind()))
        };
    }

    if node.end_byte() >= content_end {
        if let Some(closer) = unclosed_delimiter(node, source) {
            return (
                eof_point(source),
                format!("expected '{}', found 'EOF'", closer),
            );
        }
    }

    let text = token_text(first_leaf(node), source);
    let message = if text.is_empty() {
        "syntax error: unexpected EOF".to_string()
    } else {
        format!("syntax error: unexpected {}", truncate_string(text, 20))
    };
    (node.start_position(), message)
}

/// Closing token for the innermost bracket opened but not closed under `node`
fn unclosed_delimiter(node: Node<'_>, source: &str) -> Option<&'static str> {
    let mut open = Vec::new();
    push_delimiters(node, source, &mut open);
    open.pop()
}

fn push_delimiters(node: Node<'_>, source: &str, open: &mut Vec<&'static str>) {
    if node.child_count() == 0 {
        if node.is_missing() {
            return;
        }
        // An ERROR leaf has no token kind of its own
        let token = if node.is_error() {
            token_text(node, source).trim()
        } else {
            node.kind()
        };
        match token {
            "{" => open.push("}"),
            "(" => open.push(")"),
            "[" => open.push("]"),
            "}" | ")" | "]" => {
                open.pop();
            }
            _ => {}
        }
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        push_delimiters(child, source, open);
    }
}

/// Line/column just past the last byte of `source`
fn eof_point(source: &str) -> Point {
    match source.rfind('\n') {
        Some(newline) => Point::new(source.matches('\n').count(), source.len() - newline - 1),
        None => Point::new(0, source.len()),
    }
}
