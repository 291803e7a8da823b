//! Type-parameter substitution.
//!
//! Pairs a mixin's declared type parameters positionally with the
//! concrete arguments supplied at an application site, then derives
//! substituted member descriptors by splicing arguments into the
//! recorded display parts. Descriptors with empty part sequences are
//! already concrete and pass through unchanged.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::ComposeError;
use crate::model::{DisplayPart, PowerUp, PropOrField};

/// A resolved parameter-name → argument-text binding for one
/// application site.
#[derive(Debug, Clone, Default)]
pub struct TypeParamMapping {
    map: FxHashMap<SmolStr, String>,
}

impl TypeParamMapping {
    /// Pair parameters with arguments positionally.
    ///
    /// Lengths must match; the host front end normally rejects the
    /// mismatch before the engine sees it, so this is a backstop.
    pub fn new(parameters: &[SmolStr], arguments: &[String]) -> Result<Self, ComposeError> {
        if parameters.len() != arguments.len() {
            return Err(ComposeError::arity_mismatch(
                parameters
                    .first()
                    .map(|p| p.as_str())
                    .unwrap_or("<non-generic>"),
                parameters.len(),
                arguments.len(),
            ));
        }
        let map = parameters
            .iter()
            .cloned()
            .zip(arguments.iter().cloned())
            .collect();
        Ok(Self { map })
    }

    /// Binding for one mixin application.
    pub fn for_power_up(power_up: &PowerUp, arguments: &[String]) -> Result<Self, ComposeError> {
        if power_up.type_parameters.len() != arguments.len() {
            return Err(ComposeError::arity_mismatch(
                power_up.full_name.clone(),
                power_up.type_parameters.len(),
                arguments.len(),
            ));
        }
        Self::new(&power_up.type_parameters, arguments)
    }

    /// The argument bound to `parameter`, if any.
    pub fn argument_for(&self, parameter: &str) -> Option<&str> {
        self.map.get(parameter).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Splice the mapping into a part sequence. Literal parts pass
    /// through verbatim and in order; parameter parts not covered by
    /// the mapping keep their own name.
    pub fn splice(&self, parts: &[DisplayPart]) -> String {
        let mut out = String::new();
        for part in parts {
            match part {
                DisplayPart::Text(text) => out.push_str(text),
                DisplayPart::TypeParameter(name) => {
                    out.push_str(self.argument_for(name).unwrap_or(name.as_str()));
                }
            }
        }
        out
    }

    /// Derive the substituted descriptor for one member.
    ///
    /// A member whose part sequences are empty is returned as-is —
    /// substitution is a no-op on concrete members.
    pub fn apply(&self, prop: &PropOrField) -> PropOrField {
        let mut derived = prop.clone();
        if !prop.type_parts.is_empty() {
            derived.ty = self.splice(&prop.type_parts);
            derived.type_parts = Vec::new();
        }
        if !prop.name_parts.is_empty() {
            derived.reference = self.splice(&prop.name_parts);
            derived.name_parts = Vec::new();
        }
        derived
    }
}

/// Substitute type parameters in a free-standing type or reference
/// text, e.g. an interface-list entry `IFoo<TA>`.
pub fn substitute_text(text: &str, params: &[String], mapping: &TypeParamMapping) -> String {
    let parts = crate::semantic::inspect::split_parts(text, params);
    if parts.is_empty() {
        text.to_string()
    } else {
        mapping.splice(&parts)
    }
}

/// Merge the target's own members with each mixin's substituted
/// members into the deterministic table order: ascending by name.
pub fn merge_members(
    own: &[PropOrField],
    contributed: impl IntoIterator<Item = PropOrField>,
) -> Vec<PropOrField> {
    let mut all: Vec<PropOrField> = own.to_vec();
    all.extend(contributed);
    all.sort_by(|a, b| a.name.cmp(&b.name));
    all
}
