use crate::extractors::base::{Declaration, DeclarationKind};
use crate::extractors::syntax_tree::SyntaxTree;
use tree_sitter::Node;

/// Type declaration extraction for Go (definitions and aliases)
impl super::GoExtractor {
    /// Handles both `type_spec` and `type_alias`; the span covers the whole
    /// spec so `T[K comparable] struct{...}` and `A = B` are included.
    pub(super) fn extract_type_spec(&self, tree: &SyntaxTree, node: Node) -> Option<Declaration> {
        let name = node.child_by_field_name("name").or_else(|| {
            let mut cursor = node.walk();
            let identifier = node
                .named_children(&mut cursor)
                .find(|child| child.kind() == "type_identifier");
            identifier
        })?;

        Some(
            self.base
                .create_declaration(tree, &name, &node, DeclarationKind::Type),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::extractors::base::DeclarationKind;
    use crate::extractors::go::GoExtractor;
    use crate::extractors::manager::OutlineManager;
    use crate::extractors::syntax_tree::ParseOptions;

    fn types_of(source: &str) -> Vec<(String, String)> {
        let tree = OutlineManager::new()
            .parse_source("test.go", source.to_string(), ParseOptions::default())
            .unwrap();
        GoExtractor::new("test.go")
            .extract_outline(&tree)
            .children
            .into_iter()
            .filter(|d| d.kind == DeclarationKind::Type)
            .map(|d| {
                let text = source[d.start.value() as usize - 1..d.end.value() as usize - 1].to_string();
                (d.label, text)
            })
            .collect()
    }

    #[test]
    fn test_generic_type_span_includes_parameters() {
        let source = "package p\n\ntype Set[K comparable] map[K]struct{}\n";
        assert_eq!(
            types_of(source),
            vec![(
                "Set".to_string(),
                "Set[K comparable] map[K]struct{}".to_string()
            )]
        );
    }

    #[test]
    fn test_alias_and_grouped_types() {
        let source = "package p\n\ntype (\n\tID int64\n\tAlias = ID\n)\n";
        assert_eq!(
            types_of(source),
            vec![
                ("ID".to_string(), "ID int64".to_string()),
                ("Alias".to_string(), "Alias = ID".to_string()),
            ]
        );
    }

    #[test]
    fn test_struct_type_spans_body() {
        let source = "package p\n\ntype Server struct {\n\taddr string\n}\n";
        let types = types_of(source);
        assert_eq!(types[0].0, "Server");
        assert!(types[0].1.starts_with("Server struct {"));
        assert!(types[0].1.ends_with('}'));
    }
}
