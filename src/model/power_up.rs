//! The mixin descriptor.

use smol_str::SmolStr;

use super::PropOrField;

/// A `[PowerUp]`-marked declaration, built once per mixin found in the
/// compilation and looked up by `full_name` during target composition.
///
/// `source` keeps the original declaration text; each application
/// reparses it and rewrites the fresh tree, so one descriptor serves
/// any number of targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerUp {
    pub namespace: String,
    pub name: SmolStr,
    /// Fully qualified, the stable lookup key.
    pub full_name: String,
    /// Fully qualified base class the mixin requires on its targets.
    pub base_class: String,
    /// Declared generic parameter names in order; empty means
    /// non-generic.
    pub type_parameters: Vec<SmolStr>,
    /// Interfaces the mixin declares, added to targets on application.
    pub interfaces: Vec<String>,
    /// Original declaration text, reparsed per application.
    pub source: String,
    pub props_and_fields: Vec<PropOrField>,
    pub usings: Vec<String>,
    /// Whether a method named `On<Name>` exists — the lifecycle entry
    /// point.
    pub has_on_power_up_method: bool,
}

impl PowerUp {
    /// Name of the lifecycle entry-point method, `On<Name>`.
    pub fn entry_point_name(&self) -> String {
        format!("On{}", self.name)
    }
}
