//! Composition-target descriptors.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::{LifecycleHook, PropOrField};
use crate::base::{FileId, TextRange};

/// Kind of a type declaration enclosing a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainingTypeKind {
    Class,
    Record,
    Interface,
    Struct,
}

impl ContainingTypeKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Record => "record",
            Self::Interface => "interface",
            Self::Struct => "struct",
        }
    }
}

/// One level of the outer-to-inner nesting chain around a target,
/// enough to regenerate the wrapper declarations around emitted
/// members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainingType {
    /// Name as written, generics included.
    pub name: String,
    pub kind: ContainingTypeKind,
    pub accessibility: String,
    pub is_partial: bool,
}

/// State shared by both target flavors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperBase {
    pub namespace: String,
    /// Possibly with generic syntax, e.g. `Menu<T>`.
    pub name: String,
    pub name_without_generics: SmolStr,
    /// Full ancestor chain, fully qualified, nearest first.
    pub base_classes: Vec<String>,
    /// Hooks in declaration order; dispatch order is observable.
    pub lifecycle_hooks: Vec<LifecycleHook>,
    /// Mixin full name → concrete type arguments at the application
    /// site. At most one application of a given mixin per target;
    /// iteration preserves declaration order.
    pub power_up_hooks_by_full_name: IndexMap<String, Vec<String>>,
    /// The target's own members, pre-merge.
    pub props_and_fields: Vec<PropOrField>,
    pub usings: Vec<String>,
    /// Outer-to-inner nesting chain.
    pub containing_types: Vec<ContainingType>,
    /// Location of the declaration, for diagnostics.
    pub file: FileId,
    pub range: TextRange,
}

impl SuperBase {
    /// Identification prefix for generated output files. Not used for
    /// any lookup logic.
    pub fn filename_prefix(&self) -> String {
        if self.namespace.is_empty() {
            self.name_without_generics.to_string()
        } else {
            format!("{}.{}", self.namespace, self.name_without_generics)
        }
    }

    /// Fully qualified name of the target itself.
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name_without_generics.to_string()
        } else {
            format!("{}.{}", self.namespace, self.name_without_generics)
        }
    }
}

/// A `[SuperNode]` target: receives the synthesized dispatch method in
/// addition to mixin members and reflection tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperNode {
    pub base: SuperBase,
    /// Recognized handler method names found on the target, in
    /// declaration order.
    pub notification_handlers: Vec<SmolStr>,
    /// Whether the partial dispatch stub is declared.
    pub has_dispatch_stub: bool,
    /// Whether the catch-all `OnNotification` handler is declared.
    pub has_on_notification: bool,
}

/// A `[SuperObject]` target: mixin members and reflection tables only,
/// no notification dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperObject {
    pub base: SuperBase,
}
