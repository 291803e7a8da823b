//! Source-unit assembly: usings, namespace, and nested-type wrappers
//! around a generated fragment.

use crate::model::ContainingType;

/// One generated source unit handed back to the host compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Stable identification name, e.g. `App.Page_Sizer.g.cs`.
    pub hint_name: String,
    pub text: String,
}

/// Wrap a partial-class fragment in its usings, namespace, and the
/// regenerated nesting declarations.
///
/// Usings are deduplicated and sorted so identical inputs produce
/// byte-identical units.
pub fn wrap_fragment(
    usings: &[String],
    namespace: &str,
    containing_types: &[ContainingType],
    fragment: &str,
) -> String {
    let mut out = String::from("// <auto-generated />\n");

    let mut sorted: Vec<&str> = usings.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.dedup();
    for using in &sorted {
        out.push_str("using ");
        out.push_str(using);
        out.push_str(";\n");
    }
    if !sorted.is_empty() {
        out.push('\n');
    }

    if !namespace.is_empty() {
        out.push_str("namespace ");
        out.push_str(namespace);
        out.push_str(" {\n");
    }
    for containing in containing_types {
        out.push_str(&containing.accessibility);
        out.push_str(" partial ");
        out.push_str(containing.kind.keyword());
        out.push(' ');
        out.push_str(&containing.name);
        out.push_str(" {\n");
    }

    out.push_str(fragment);
    if !fragment.ends_with('\n') {
        out.push('\n');
    }

    for _ in containing_types {
        out.push_str("}\n");
    }
    if !namespace.is_empty() {
        out.push_str("}\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContainingTypeKind;

    #[test]
    fn wraps_namespace_and_nesting_outer_to_inner() {
        let containing = vec![ContainingType {
            name: "Outer".to_string(),
            kind: ContainingTypeKind::Class,
            accessibility: "public".to_string(),
            is_partial: true,
        }];
        let text = wrap_fragment(
            &["B".to_string(), "A".to_string(), "B".to_string()],
            "App",
            &containing,
            "partial class Page { }",
        );
        assert_eq!(
            text,
            "// <auto-generated />\n\
             using A;\n\
             using B;\n\
             \n\
             namespace App {\n\
             public partial class Outer {\n\
             partial class Page { }\n\
             }\n\
             }\n"
        );
    }

    #[test]
    fn global_namespace_omits_wrapper() {
        let text = wrap_fragment(&[], "", &[], "partial class P { }");
        assert_eq!(text, "// <auto-generated />\npartial class P { }\n");
    }
}
