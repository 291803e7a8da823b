//! Code inspection — syntax-plus-symbols queries over declarations.
//!
//! Everything the repositories need to know about a declaration is
//! answered here: enclosing namespace, nesting chain, using list,
//! instance members materialized as [`PropOrField`] descriptors, and
//! method presence. Results are plain values; no state is kept.

use smol_str::SmolStr;

use crate::model::{
    AttributeDescription, ContainingType, ContainingTypeKind, DisplayPart, PropOrField,
};
use crate::parser::{AstNode, ClassDecl, CompilationUnit, Member, SyntaxKind, UsingDirective};
use crate::semantic::SymbolTable;

/// Member-level marker excluding a stub member from composition.
pub const IGNORE_MARKER: &str = "PowerUpIgnore";

/// Namespace enclosing a class declaration, dotted, outermost first.
/// Empty for the global namespace.
pub fn containing_namespace(class: &ClassDecl) -> String {
    let mut segments: Vec<String> = class
        .syntax()
        .ancestors()
        .filter(|n| n.kind() == SyntaxKind::NAMESPACE_DECL)
        .filter_map(|n| crate::parser::NamespaceDecl::cast(n))
        .filter_map(|ns| ns.name().map(|q| q.dotted()))
        .collect();
    segments.reverse();

    if segments.is_empty() {
        // file-scoped form: the namespace is a sibling, not an ancestor
        if let Some(root) = class
            .syntax()
            .ancestors()
            .find(|n| n.kind() == SyntaxKind::COMPILATION_UNIT)
            .and_then(CompilationUnit::cast)
        {
            if let Some(ns) = root.file_scoped_namespace() {
                if let Some(name) = ns.name() {
                    return name.dotted();
                }
            }
        }
    }
    segments.join(".")
}

/// Outer-to-inner chain of type declarations enclosing `class`,
/// excluding the class itself.
pub fn containing_types(class: &ClassDecl) -> Vec<ContainingType> {
    let mut chain: Vec<ContainingType> = class
        .syntax()
        .ancestors()
        .skip(1)
        .filter(|n| n.kind() == SyntaxKind::CLASS_DECL)
        .filter_map(ClassDecl::cast)
        .map(|outer| ContainingType {
            name: outer.name_with_generics().unwrap_or_default(),
            kind: containing_kind(&outer),
            accessibility: outer.accessibility().to_string(),
            is_partial: outer.is_partial(),
        })
        .collect();
    chain.reverse();
    chain
}

fn containing_kind(class: &ClassDecl) -> ContainingTypeKind {
    match class.decl_keyword().map(|t| t.kind()) {
        Some(SyntaxKind::RECORD_KW) => ContainingTypeKind::Record,
        Some(SyntaxKind::INTERFACE_KW) => ContainingTypeKind::Interface,
        Some(SyntaxKind::STRUCT_KW) => ContainingTypeKind::Struct,
        _ => ContainingTypeKind::Class,
    }
}

/// All using directives visible in a unit, in source order. `using
/// static` directives keep their `static ` prefix.
pub fn usings(unit: &CompilationUnit) -> Vec<String> {
    unit.syntax()
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::USING_DIRECTIVE)
        .filter_map(UsingDirective::cast)
        .filter_map(|u| {
            let name = u.name()?.dotted();
            Some(if u.is_static() {
                format!("static {name}")
            } else {
                name
            })
        })
        .collect()
}

/// Materialize the declared instance properties and fields of a class
/// as descriptors. Static and const members are skipped, as are
/// members carrying the ignore marker.
pub fn props_and_fields(
    class: &ClassDecl,
    type_params: &[String],
    table: &SymbolTable,
    namespace: &str,
    unit_usings: &[String],
) -> Vec<PropOrField> {
    let mut out = Vec::new();
    for member in class.members() {
        if member.has_attribute(IGNORE_MARKER) {
            continue;
        }
        match member {
            Member::Field(field) => {
                if field.is_static() || field.is_const() {
                    continue;
                }
                let Some(name) = field.name() else { continue };
                let ty = field.type_ref().map(|t| t.display()).unwrap_or_default();
                let reference = name.clone();
                out.push(PropOrField {
                    name: SmolStr::new(&name),
                    name_parts: split_parts(&reference, type_params),
                    reference,
                    type_parts: split_parts(&ty, type_params),
                    ty,
                    attributes: attribute_descriptions(
                        field.syntax(),
                        table,
                        namespace,
                        unit_usings,
                    ),
                    is_field: true,
                    is_mutable: !field.is_readonly(),
                    is_readable: true,
                });
            }
            Member::Property(prop) => {
                if prop.is_static() {
                    continue;
                }
                let Some(name) = prop.name() else { continue };
                let reference = prop
                    .member_name()
                    .map(|n| n.reference())
                    .unwrap_or_else(|| name.clone());
                let ty = prop.type_ref().map(|t| t.display()).unwrap_or_default();
                out.push(PropOrField {
                    name: SmolStr::new(&name),
                    name_parts: split_parts(&reference, type_params),
                    reference,
                    type_parts: split_parts(&ty, type_params),
                    ty,
                    attributes: attribute_descriptions(
                        prop.syntax(),
                        table,
                        namespace,
                        unit_usings,
                    ),
                    is_field: false,
                    is_mutable: prop.is_mutable(),
                    is_readable: prop.is_readable(),
                });
            }
            _ => {}
        }
    }
    out
}

/// Split a textual type or reference into display parts against the
/// declared type parameters. Returns an empty sequence when no
/// fragment names a type parameter — the already-concrete fast path.
pub fn split_parts(text: &str, type_params: &[String]) -> Vec<DisplayPart> {
    if type_params.is_empty() {
        return Vec::new();
    }
    let mut parts: Vec<DisplayPart> = Vec::new();
    let mut literal = String::new();
    let mut found_param = false;
    let mut chars = text.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_ascii_alphabetic() || c == '_' {
            let mut end = start;
            while let Some(&(i, c)) = chars.peek() {
                if c.is_ascii_alphanumeric() || c == '_' {
                    end = i + c.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            let ident = &text[start..end];
            if type_params.iter().any(|p| p == ident) {
                if !literal.is_empty() {
                    parts.push(DisplayPart::text(literal.as_str()));
                    literal.clear();
                }
                parts.push(DisplayPart::type_parameter(ident));
                found_param = true;
            } else {
                literal.push_str(ident);
            }
        } else {
            literal.push(c);
            chars.next();
        }
    }
    if !found_param {
        return Vec::new();
    }
    if !literal.is_empty() {
        parts.push(DisplayPart::text(literal.as_str()));
    }
    parts
}

/// Attribute descriptions for one member node, resolving each
/// attribute's full type through the table when it is known.
fn attribute_descriptions(
    node: &crate::parser::SyntaxNode,
    table: &SymbolTable,
    namespace: &str,
    unit_usings: &[String],
) -> Vec<AttributeDescription> {
    node.children()
        .filter(|n| n.kind() == SyntaxKind::ATTRIBUTE_LIST)
        .flat_map(|l| l.children().collect::<Vec<_>>())
        .filter(|n| n.kind() == SyntaxKind::ATTRIBUTE)
        .filter_map(crate::parser::Attribute::cast)
        .filter_map(|attr| {
            let name = attr.simple_name()?;
            let full_type = resolve_attribute_type(&name, table, namespace, unit_usings);
            let argument_expressions = attr.args().map(|a| a.expression_text()).collect();
            Some(AttributeDescription {
                name: SmolStr::new(&name),
                full_type,
                argument_expressions,
            })
        })
        .collect()
}

/// Attribute classes conventionally carry an `Attribute` suffix the
/// usage site omits; try both spellings before keeping the
/// conventional full name as written.
fn resolve_attribute_type(
    name: &str,
    table: &SymbolTable,
    namespace: &str,
    unit_usings: &[String],
) -> String {
    let with_suffix = if name.ends_with("Attribute") {
        name.to_string()
    } else {
        format!("{name}Attribute")
    };
    let resolved = table.resolve(&with_suffix, namespace, unit_usings);
    if table.get(&resolved).is_some() {
        return resolved;
    }
    let resolved = table.resolve(name, namespace, unit_usings);
    if table.get(&resolved).is_some() {
        return resolved;
    }
    with_suffix
}
