//! SuperNode/SuperObject repository — target classification, lifecycle
//! hook extraction, and descriptor building.

use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::{trace, warn};

use crate::base::FileId;
use crate::model::notifications::{CATCH_ALL_HANDLER, is_notification_handler};
use crate::model::{LifecycleHook, SuperBase, SuperNode, SuperObject};
use crate::parser::{AstNode, Attribute, ClassDecl, CompilationUnit};
use crate::semantic::{SymbolTable, inspect};

/// Declaration-level marker identifying a node target.
pub const SUPER_NODE_MARKER: &str = "SuperNode";

/// Declaration-level marker identifying a plain-object target.
pub const SUPER_OBJECT_MARKER: &str = "SuperObject";

/// Name of the partial dispatch stub the generated method pairs with.
pub const DISPATCH_STUB: &str = "Notify";

/// Either flavor of composition target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Node(SuperNode),
    Object(SuperObject),
}

impl Target {
    pub fn base(&self) -> &SuperBase {
        match self {
            Target::Node(n) => &n.base,
            Target::Object(o) => &o.base,
        }
    }
}

/// Syntactic pre-filter: is this declaration a node target?
pub fn is_super_node(class: &ClassDecl) -> bool {
    class.has_attribute(SUPER_NODE_MARKER)
}

/// Syntactic pre-filter: is this declaration an object target?
pub fn is_super_object(class: &ClassDecl) -> bool {
    class.has_attribute(SUPER_OBJECT_MARKER)
}

/// Build a [`SuperNode`] descriptor from a classified declaration.
pub fn build_super_node(
    file: FileId,
    class: &ClassDecl,
    unit: &CompilationUnit,
    table: &SymbolTable,
) -> Option<SuperNode> {
    let base = build_base(file, class, unit, table, SUPER_NODE_MARKER)?;

    // recognized handlers, in declaration order
    let notification_handlers: Vec<SmolStr> = class
        .methods()
        .filter_map(|m| m.name())
        .filter(|name| is_notification_handler(name))
        .map(|name| SmolStr::new(&name))
        .collect();

    Some(SuperNode {
        has_dispatch_stub: class.has_partial_method_stub(DISPATCH_STUB),
        has_on_notification: class.has_method(CATCH_ALL_HANDLER),
        notification_handlers,
        base,
    })
}

/// Build a [`SuperObject`] descriptor from a classified declaration.
pub fn build_super_object(
    file: FileId,
    class: &ClassDecl,
    unit: &CompilationUnit,
    table: &SymbolTable,
) -> Option<SuperObject> {
    Some(SuperObject {
        base: build_base(file, class, unit, table, SUPER_OBJECT_MARKER)?,
    })
}

/// Scan parsed units for composition targets, in source order. Units
/// are numbered in iteration order; the ids land in diagnostics.
pub fn find_targets<'a>(
    units: impl IntoIterator<Item = &'a CompilationUnit>,
    table: &SymbolTable,
) -> Vec<Target> {
    let mut out = Vec::new();
    for (index, unit) in units.into_iter().enumerate() {
        let file = FileId::new(index as u32);
        for class in unit.classes() {
            if is_super_node(&class) {
                if let Some(node) = build_super_node(file, &class, unit, table) {
                    out.push(Target::Node(node));
                }
            } else if is_super_object(&class) {
                if let Some(object) = build_super_object(file, &class, unit, table) {
                    out.push(Target::Object(object));
                }
            }
        }
    }
    out
}

fn build_base(
    file: FileId,
    class: &ClassDecl,
    unit: &CompilationUnit,
    table: &SymbolTable,
    marker: &str,
) -> Option<SuperBase> {
    let name_without_generics = class.name()?;
    let name = class.name_with_generics()?;
    let namespace = inspect::containing_namespace(class);
    let full_name = if namespace.is_empty() {
        name_without_generics.clone()
    } else {
        format!("{namespace}.{name_without_generics}")
    };
    let unit_usings = inspect::usings(unit);
    let type_params = class.type_param_names();

    let (lifecycle_hooks, power_up_hooks_by_full_name) = class
        .find_attribute(marker)
        .map(|attr| extract_hooks(&attr, table, &namespace, &unit_usings))
        .unwrap_or_default();

    let props_and_fields =
        inspect::props_and_fields(class, &type_params, table, &namespace, &unit_usings);

    trace!(%full_name, hooks = lifecycle_hooks.len(), "built target");

    Some(SuperBase {
        namespace,
        base_classes: table.base_chain(&full_name).to_vec(),
        name,
        name_without_generics: SmolStr::new(&name_without_generics),
        lifecycle_hooks,
        power_up_hooks_by_full_name,
        props_and_fields,
        usings: unit_usings,
        containing_types: inspect::containing_types(class),
        file,
        range: class.syntax().text_range(),
    })
}

/// Extract the ordered hook list from the marker attribute's
/// positional arguments.
///
/// A string literal is a method hook; a `typeof(...)` argument is a
/// mixin application. Arguments of any other shape are ignored rather
/// than failing the build.
fn extract_hooks(
    attr: &Attribute,
    table: &SymbolTable,
    namespace: &str,
    unit_usings: &[String],
) -> (Vec<LifecycleHook>, IndexMap<String, Vec<String>>) {
    let mut hooks = Vec::new();
    let mut by_full_name: IndexMap<String, Vec<String>> = IndexMap::new();

    for arg in attr.args() {
        if let Some(method) = arg.string_value() {
            hooks.push(LifecycleHook::method(method));
        } else if let Some(type_ref) = arg.typeof_expr().and_then(|t| t.type_ref()) {
            let full_name = table.resolve(&type_ref.display(), namespace, unit_usings);
            let type_arguments = type_ref.type_arg_texts();
            if by_full_name.contains_key(&full_name) {
                warn!(%full_name, "duplicate power-up application ignored");
                continue;
            }
            by_full_name.insert(full_name.clone(), type_arguments.clone());
            hooks.push(LifecycleHook::power_up(full_name, type_arguments));
        }
        // other shapes: ignored
    }

    (hooks, by_full_name)
}
