//! Lifecycle-invocation synthesis.
//!
//! Walks a target's hook list in declaration order and produces the
//! call statements for the dispatch method. Identical input ordering
//! always yields identical output ordering.

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::model::{LifecycleHook, PowerUp};

/// Name of the single notification-code parameter threaded through
/// every hook invocation.
pub const NOTIFICATION_PARAM: &str = "what";

/// Produce the ordered invocation statements for a hook list.
///
/// A method hook becomes a direct call. A mixin hook becomes a call to
/// the mixin's `On<Name>` entry point — but only when the mixin
/// declares one; state-only mixins contribute nothing. Hooks naming an
/// unknown mixin are skipped.
pub fn invocation_statements(
    hooks: &[LifecycleHook],
    power_ups: &FxHashMap<String, PowerUp>,
) -> Vec<String> {
    let mut out = Vec::new();
    for hook in hooks {
        match hook {
            LifecycleHook::Method(name) => {
                out.push(format!("{name}({NOTIFICATION_PARAM});"));
            }
            LifecycleHook::PowerUp { full_name, .. } => match power_ups.get(full_name) {
                Some(power_up) if power_up.has_on_power_up_method => {
                    out.push(format!(
                        "{}({NOTIFICATION_PARAM});",
                        power_up.entry_point_name()
                    ));
                }
                Some(_) => {} // state-only mixin: no entry point to call
                None => {
                    warn!(%full_name, "hook references unknown power-up");
                }
            },
        }
    }
    out
}
