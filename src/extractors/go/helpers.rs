use crate::extractors::base::tree_methods::named_children_without_comments;
use tree_sitter::Node;

/// Helper methods for Go-specific node navigation
impl super::GoExtractor {
    /// Parameter declarations of a `parameter_list`, in order
    pub(super) fn parameter_declarations<'t>(&self, list: Node<'t>) -> Vec<Node<'t>> {
        named_children_without_comments(list)
            .into_iter()
            .filter(|child| {
                matches!(
                    child.kind(),
                    "parameter_declaration" | "variadic_parameter_declaration"
                )
            })
            .collect()
    }

    /// Type expression of a parameter declaration (handles `r *T` and bare `T`)
    pub(super) fn parameter_type<'t>(&self, parameter: Node<'t>) -> Option<Node<'t>> {
        parameter.child_by_field_name("type").or_else(|| {
            named_children_without_comments(parameter)
                .into_iter()
                .rfind(|child| child.kind() != "identifier")
        })
    }

    /// Names bound by a var/const spec, left to right
    pub(super) fn value_spec_names<'t>(&self, spec: Node<'t>) -> Vec<Node<'t>> {
        named_children_without_comments(spec)
            .into_iter()
            .filter(|child| matches!(child.kind(), "identifier" | "blank_identifier"))
            .collect()
    }

    /// Specs of a declaration group, flattening a parenthesised `*_spec_list`
    pub(super) fn group_specs<'t>(&self, group: Node<'t>) -> Vec<Node<'t>> {
        let mut specs = Vec::new();
        for child in named_children_without_comments(group) {
            if child.kind().ends_with("_spec_list") {
                specs.extend(named_children_without_comments(child));
            } else {
                specs.push(child);
            }
        }
        specs
    }
}
