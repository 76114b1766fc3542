// Tree navigation helpers shared by ingestion and the outline pass

use tree_sitter::Node;

/// Node kind tree-sitter uses for comments in the Go grammar
pub const COMMENT_KIND: &str = "comment";

/// Find the first `ERROR` or `MISSING` node in document order
pub fn find_first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(find_first_error)
}

/// Leftmost leaf below `node` (the node itself when it has no children)
pub fn first_leaf(node: Node<'_>) -> Node<'_> {
    let mut current = node;
    while let Some(child) = current.child(0) {
        current = child;
    }
    current
}

/// Named children of `node`, comments excluded
pub fn named_children_without_comments(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != COMMENT_KIND)
        .collect();
    children
}

/// Safely truncate a string to a maximum number of characters (not bytes)
pub fn truncate_string(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect::<String>() + "..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse(source: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&crate::language::go_language())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    #[test]
    fn test_no_error_in_valid_source() {
        let tree = parse("package p\n\nfunc F() {}\n");
        assert!(find_first_error(tree.root_node()).is_none());
    }

    #[test]
    fn test_error_found_for_unterminated_brace() {
        let tree = parse("package p\n\nfunc F() {\n");
        assert!(find_first_error(tree.root_node()).is_some());
    }

    #[test]
    fn test_first_leaf_is_package_keyword() {
        let tree = parse("package p\n");
        let leaf = first_leaf(tree.root_node());
        assert_eq!(leaf.kind(), "package");
    }

    #[test]
    fn test_truncate_string_respects_char_boundaries() {
        assert_eq!(truncate_string("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_string("short", 10), "short");
    }
}
