//! Lifecycle hooks declared on a composition target.

use smol_str::SmolStr;

/// One entry of a target's ordered hook list.
///
/// Order within the owning list is the exact call order in the
/// synthesized dispatch method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleHook {
    /// A bare method to call.
    Method(SmolStr),
    /// An applied mixin with its concrete type arguments in
    /// declaration order.
    PowerUp {
        full_name: String,
        type_arguments: Vec<String>,
    },
}

impl LifecycleHook {
    pub fn method(name: impl Into<SmolStr>) -> Self {
        Self::Method(name.into())
    }

    pub fn power_up(full_name: impl Into<String>, type_arguments: Vec<String>) -> Self {
        Self::PowerUp {
            full_name: full_name.into(),
            type_arguments,
        }
    }
}
