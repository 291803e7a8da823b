//! PowerUp repository — mixin classification and descriptor building.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::trace;

use crate::model::PowerUp;
use crate::parser::{AstNode, ClassDecl, CompilationUnit};
use crate::semantic::{OBJECT, SymbolTable, inspect};

/// Declaration-level marker identifying a mixin.
pub const POWER_UP_MARKER: &str = "PowerUp";

/// Syntactic pre-filter: is this declaration a mixin candidate?
pub fn is_power_up(class: &ClassDecl) -> bool {
    class.has_attribute(POWER_UP_MARKER)
}

/// Build a [`PowerUp`] descriptor from a classified declaration.
///
/// Returns `None` for declarations too malformed to describe (no
/// name); partial syntax errors inside members are tolerated.
pub fn build_power_up(
    class: &ClassDecl,
    unit: &CompilationUnit,
    table: &SymbolTable,
) -> Option<PowerUp> {
    let name = class.name()?;
    let namespace = inspect::containing_namespace(class);
    let full_name = if namespace.is_empty() {
        name.clone()
    } else {
        format!("{namespace}.{name}")
    };
    let unit_usings = inspect::usings(unit);
    let type_parameters: Vec<SmolStr> = class
        .type_param_names()
        .into_iter()
        .map(SmolStr::new)
        .collect();
    let type_param_strings = class.type_param_names();

    let (base_class, interfaces) = match table.get(&full_name) {
        Some(facts) => (
            facts
                .base_chain
                .first()
                .cloned()
                .unwrap_or_else(|| OBJECT.to_string()),
            facts.interfaces.clone(),
        ),
        None => (OBJECT.to_string(), Vec::new()),
    };

    let props_and_fields = inspect::props_and_fields(
        class,
        &type_param_strings,
        table,
        &namespace,
        &unit_usings,
    );

    let entry_point = format!("On{name}");
    let has_on_power_up_method = class.has_method(&entry_point);

    trace!(%full_name, members = props_and_fields.len(), "built power-up");

    Some(PowerUp {
        namespace,
        name: SmolStr::new(&name),
        full_name,
        base_class,
        type_parameters,
        interfaces,
        source: class.text(),
        props_and_fields,
        usings: unit_usings,
        has_on_power_up_method,
    })
}

/// Scan parsed units for mixin declarations and build the full-name
/// keyed mixin table.
pub fn find_power_ups<'a>(
    units: impl IntoIterator<Item = &'a CompilationUnit>,
    table: &SymbolTable,
) -> FxHashMap<String, PowerUp> {
    let mut out = FxHashMap::default();
    for unit in units {
        for class in unit.classes() {
            if is_power_up(&class) {
                if let Some(power_up) = build_power_up(&class, unit, table) {
                    out.insert(power_up.full_name.clone(), power_up);
                }
            }
        }
    }
    out
}
