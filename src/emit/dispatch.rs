//! Dispatch-method generator.
//!
//! Implements the target's partial `Notify` stub: the ordered
//! lifecycle invocations, then the switch over recognized notification
//! handlers, then the catch-all handler when the target declares one.

use rustc_hash::FxHashMap;

use super::unit::{SourceUnit, wrap_fragment};
use crate::compose::lifecycle::{NOTIFICATION_PARAM, invocation_statements};
use crate::model::notifications::{CATCH_ALL_HANDLER, notification_code};
use crate::model::{PowerUp, SuperNode};
use crate::repo::DISPATCH_STUB;

/// Build the dispatch source unit for one node target.
pub fn dispatch_unit(node: &SuperNode, power_ups: &FxHashMap<String, PowerUp>) -> SourceUnit {
    let base = &node.base;
    let mut fragment = String::new();

    fragment.push_str(&format!("partial class {} {{\n", base.name));
    fragment.push_str(&format!(
        "    public partial void {DISPATCH_STUB}(int {NOTIFICATION_PARAM}) {{\n"
    ));

    for statement in invocation_statements(&base.lifecycle_hooks, power_ups) {
        fragment.push_str("        ");
        fragment.push_str(&statement);
        fragment.push('\n');
    }

    if !node.notification_handlers.is_empty() {
        fragment.push_str(&format!("        switch ({NOTIFICATION_PARAM}) {{\n"));
        for handler in &node.notification_handlers {
            if let Some(code) = notification_code(handler) {
                fragment.push_str(&format!("            case {code}: {handler}(); break;\n"));
            }
        }
        fragment.push_str("            default: break;\n");
        fragment.push_str("        }\n");
    }

    if node.has_on_notification {
        fragment.push_str(&format!(
            "        {CATCH_ALL_HANDLER}({NOTIFICATION_PARAM});\n"
        ));
    }

    fragment.push_str("    }\n");
    fragment.push_str("}\n");

    SourceUnit {
        hint_name: format!("{}.g.cs", base.filename_prefix()),
        text: wrap_fragment(&[], &base.namespace, &base.containing_types, &fragment),
    }
}
