//! Repositories — classify declarations and build descriptors.
//!
//! Classification is purely syntactic (marker attributes matched by
//! simple name) so the engine stays cheap to re-run on every edit;
//! descriptor building then draws on the symbol table for the facts
//! the host is trusted for.

mod power_ups;
mod super_nodes;

pub use power_ups::{POWER_UP_MARKER, build_power_up, find_power_ups, is_power_up};
pub use super_nodes::{
    DISPATCH_STUB, SUPER_NODE_MARKER, SUPER_OBJECT_MARKER, Target, build_super_node,
    build_super_object, find_targets, is_super_node, is_super_object,
};
